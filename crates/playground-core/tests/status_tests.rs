// Host-side tests for readout text, hints and configuration defaults.

use playground_core::*;

#[test]
fn torque_text_rounds_to_whole_units() {
    let r = |torque| Readout {
        torque,
        balance: Balance::Balanced,
    };
    assert_eq!(r(0.0).torque_text(), "0 kg·m");
    assert_eq!(r(239.6).torque_text(), "240 kg·m");
    assert_eq!(r(-12.6).torque_text(), "-13 kg·m");
    // halves go up, on both sides of zero
    assert_eq!(r(0.5).torque_text(), "1 kg·m");
    assert_eq!(r(-0.5).torque_text(), "0 kg·m");
    assert_eq!(r(-12.5).torque_text(), "-12 kg·m");
}

#[test]
fn balance_labels_per_locale() {
    assert_eq!(Balance::Balanced.label(Locale::Korean), "균형");
    assert_eq!(Balance::RightDown.label(Locale::Korean), "오른쪽이 내려감");
    assert_eq!(Balance::LeftDown.label(Locale::Korean), "왼쪽이 내려감");
    assert_eq!(Balance::Balanced.label(Locale::English), "balanced");
    assert_eq!(Balance::RightDown.label(Locale::English), "right side down");
    assert_eq!(Balance::LeftDown.label(Locale::English), "left side down");
}

#[test]
fn every_hint_has_text() {
    let hints = [
        Hint::CharacterCreated,
        Hint::DragStarted,
        Hint::SeatedOnSeesaw,
        Hint::SeatedOnSwing,
        Hint::SwingPushed,
        Hint::DroppedToGround,
    ];
    for hint in hints {
        for locale in [Locale::Korean, Locale::English] {
            assert!(!hint.text(locale).is_empty());
        }
        assert_ne!(hint.text(Locale::Korean), hint.text(Locale::English));
    }
    assert_eq!(Hint::SeatedOnSeesaw.text(Locale::Korean), "탑승 완료");
}

#[test]
fn default_config_matches_tuning_constants() {
    let config = PlaygroundConfig::default();
    assert_eq!(config.locale, Locale::Korean);
    assert_eq!(config.seesaw.seat_half_span, SEESAW_SEAT_HALF_SPAN);
    assert_eq!(config.seesaw.balance_threshold, SEESAW_BALANCE_THRESHOLD);
    assert_eq!(config.swing.push_impulse, SWING_PUSH_IMPULSE);
    assert_eq!(config.swing.max_angle, SWING_MAX_ANGLE);
}

#[test]
fn config_overrides_reach_the_simulation() {
    let mut config = PlaygroundConfig {
        locale: Locale::English,
        ..PlaygroundConfig::default()
    };
    config.seesaw.balance_threshold = 1000.0;
    let pg = Playground::new(config);
    assert_eq!(pg.locale(), Locale::English);
    assert_eq!(pg.config().seesaw.balance_threshold, 1000.0);
}

#[test]
fn same_seed_spawns_same_characters() {
    let spawn = |seed| {
        let mut pg = Playground::new(PlaygroundConfig {
            seed,
            ..PlaygroundConfig::default()
        });
        let id = pg.spawn_character(CharacterParams {
            height_cm: 160.0,
            weight_kg: 50.0,
            gender: Gender::Female,
        });
        let c = pg.registry().get(id).unwrap();
        (c.position, c.palette)
    };
    assert_eq!(spawn(11), spawn(11));
}

#[test]
fn rgb_splits_hex_channels() {
    assert_eq!(rgb(0xff0000), [1.0, 0.0, 0.0]);
    assert_eq!(rgb(0x00ff00), [0.0, 1.0, 0.0]);
    let [_, _, b] = rgb(0x000080);
    assert!((b - 128.0 / 255.0).abs() < 1e-6);
}
