// Host-side tests for the seesaw and swing integrators.

use playground_core::*;

const EPS: f32 = 1e-4;

#[test]
fn balance_uses_strict_threshold() {
    let th = SEESAW_BALANCE_THRESHOLD;
    assert_eq!(Balance::classify(0.0, th), Balance::Balanced);
    assert_eq!(Balance::classify(29.9, th), Balance::Balanced);
    assert_eq!(Balance::classify(-29.9, th), Balance::Balanced);
    assert_eq!(Balance::classify(30.0, th), Balance::RightDown);
    assert_eq!(Balance::classify(-30.0, th), Balance::LeftDown);
    assert_eq!(Balance::classify(500.0, th), Balance::RightDown);
}

#[test]
fn target_angle_for_single_rider() {
    // 80 kg sitting 3 units right of the pivot
    let params = SeesawParams::default();
    let target = Seesaw::target_angle(80.0 * 3.0, &params);
    let expected = -(240.0 / 420.0) * std::f32::consts::PI / 10.0;
    assert!((target - expected).abs() < EPS);
    assert!((target - -0.1795).abs() < 1e-3);
}

#[test]
fn target_angle_saturates_at_max_tilt() {
    let params = SeesawParams::default();
    assert!((Seesaw::target_angle(5000.0, &params) + params.max_angle).abs() < EPS);
    assert!((Seesaw::target_angle(-5000.0, &params) - params.max_angle).abs() < EPS);
    assert_eq!(Seesaw::target_angle(0.0, &params), 0.0);
}

#[test]
fn seesaw_settles_on_target_and_stays_bounded() {
    let params = SeesawParams::default();
    let mut seesaw = Seesaw::default();
    for _ in 0..600 {
        seesaw.step(240.0, &params);
        assert!(seesaw.angle.abs() <= params.max_angle + EPS);
    }
    assert!((seesaw.angle - Seesaw::target_angle(240.0, &params)).abs() < 1e-3);
    assert!(seesaw.angular_velocity.abs() < 1e-4);
}

#[test]
fn empty_seesaw_returns_level() {
    let params = SeesawParams::default();
    let mut seesaw = Seesaw {
        angle: 0.25,
        angular_velocity: 0.0,
    };
    for _ in 0..600 {
        seesaw.step(0.0, &params);
    }
    assert!(seesaw.angle.abs() < 1e-3);
}

#[test]
fn seesaw_clamps_large_velocity() {
    let params = SeesawParams::default();
    let mut seesaw = Seesaw {
        angle: 0.0,
        angular_velocity: 3.0,
    };
    seesaw.step(0.0, &params);
    assert!((seesaw.angle - params.max_angle).abs() < EPS);
}

#[test]
fn empty_swing_decays_to_rest() {
    let params = SwingParams::default();
    let mut swing = Swing {
        angle: 0.5,
        velocity: 0.0,
    };
    let mut elapsed = 0.0;
    for _ in 0..800 {
        elapsed += 16.0;
        swing.step(0, elapsed, &params);
        assert!(swing.angle.abs() <= params.max_angle + EPS);
    }
    assert!(swing.angle.abs() < 1e-3);
}

#[test]
fn empty_swing_step_is_spring_then_damping() {
    let params = SwingParams::default();
    let mut swing = Swing {
        angle: 0.0,
        velocity: 0.1,
    };
    swing.step(0, 16.0, &params);
    assert!((swing.velocity - 0.096).abs() < 1e-6);
    assert!((swing.angle - 0.096).abs() < 1e-6);

    let (a0, v0) = (0.3, -0.05);
    let mut swing = Swing {
        angle: a0,
        velocity: v0,
    };
    swing.step(0, 32.0, &params);
    let v1 = (v0 - a0 * SWING_SPRING) * SWING_DAMPING_EMPTY;
    assert!((swing.velocity - v1).abs() < 1e-6);
    assert!((swing.angle - (a0 + v1)).abs() < 1e-6);
}

#[test]
fn occupied_swing_keeps_swaying() {
    let params = SwingParams::default();
    let mut swing = Swing::default();
    let mut elapsed = 0.0;
    let mut peak = 0.0_f32;
    for i in 0..3000 {
        elapsed += 1000.0 / 60.0;
        swing.step(1, elapsed, &params);
        if i > 2000 {
            peak = peak.max(swing.angle.abs());
        }
    }
    assert!(peak > 1e-3, "peak sway {peak}");
    assert!(peak < params.max_angle);
}

#[test]
fn swing_angle_is_clamped() {
    let params = SwingParams::default();
    let mut swing = Swing::default();
    swing.push(10.0);
    swing.step(1, 0.0, &params);
    assert!((swing.angle - params.max_angle).abs() < EPS);
    swing.push(-50.0);
    swing.step(1, 0.0, &params);
    assert!((swing.angle + params.max_angle).abs() < EPS);
}

#[test]
fn push_adds_to_velocity() {
    let mut swing = Swing::default();
    swing.push(SWING_PUSH_IMPULSE);
    swing.push(SWING_PUSH_IMPULSE);
    assert!((swing.velocity - 2.0 * SWING_PUSH_IMPULSE).abs() < EPS);
    assert_eq!(swing.angle, 0.0);
}

#[test]
fn rider_offsets_fan_out_and_clamp() {
    let params = SwingParams::default();
    assert!((swing_rider_offset(1, &params) - 0.0).abs() < EPS);
    assert!((swing_rider_offset(2, &params) - 0.24).abs() < EPS);
    assert!((swing_rider_offset(3, &params) - 0.36).abs() < EPS);
    assert!((swing_rider_offset(9, &params) - 0.36).abs() < EPS);
}

#[test]
fn torque_of_empty_registry_is_zero() {
    let registry = Registry::new();
    assert_eq!(seesaw_torque(&registry), 0.0);
}

#[test]
fn standing_characters_add_no_torque() {
    let mut pg = Playground::default();
    pg.spawn_character(CharacterParams {
        height_cm: 170.0,
        weight_kg: 90.0,
        gender: Gender::Male,
    });
    let readout = pg.tick(16.0);
    assert_eq!(readout.torque, 0.0);
    assert_eq!(readout.balance, Balance::Balanced);
}
