//! Ride physics: seesaw tilt from rider torque and the swing pendulum.
//!
//! Both toys are spring/damper approximations stepped once per rendered
//! frame. The rates are per step, not per second, so the motion speed follows
//! the host's refresh rate.

use crate::character::Ride;
use crate::constants::*;
use crate::registry::Registry;

#[derive(Clone, Copy, Debug)]
pub struct SeesawParams {
    pub torque_scale: f32,
    pub max_angle: f32,
    pub spring: f32,
    pub damping: f32,
    pub balance_threshold: f32,
    pub seat_half_span: f32,
}

impl Default for SeesawParams {
    fn default() -> Self {
        Self {
            torque_scale: SEESAW_TORQUE_SCALE,
            max_angle: SEESAW_MAX_ANGLE,
            spring: SEESAW_SPRING,
            damping: SEESAW_DAMPING,
            balance_threshold: SEESAW_BALANCE_THRESHOLD,
            seat_half_span: SEESAW_SEAT_HALF_SPAN,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SwingParams {
    pub spring: f32,
    pub damping_occupied: f32,
    pub damping_empty: f32,
    pub sway_amplitude: f32,
    pub sway_rate_per_ms: f64,
    pub max_angle: f32,
    pub push_impulse: f32,
    pub join_impulse: f32,
    pub rider_spacing: f32,
    pub max_rider_offset: f32,
}

impl Default for SwingParams {
    fn default() -> Self {
        Self {
            spring: SWING_SPRING,
            damping_occupied: SWING_DAMPING_OCCUPIED,
            damping_empty: SWING_DAMPING_EMPTY,
            sway_amplitude: SWING_SWAY_AMPLITUDE,
            sway_rate_per_ms: SWING_SWAY_RATE_PER_MS,
            max_angle: SWING_MAX_ANGLE,
            push_impulse: SWING_PUSH_IMPULSE,
            join_impulse: SWING_JOIN_IMPULSE,
            rider_spacing: SWING_RIDER_SPACING,
            max_rider_offset: SWING_MAX_RIDER_OFFSET,
        }
    }
}

/// Which way the seesaw leans, derived from the signed torque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    Balanced,
    RightDown,
    LeftDown,
}

impl Balance {
    pub fn classify(torque: f32, threshold: f32) -> Self {
        if torque.abs() < threshold {
            Balance::Balanced
        } else if torque > 0.0 {
            Balance::RightDown
        } else {
            Balance::LeftDown
        }
    }
}

/// Signed sum of `weight * local_x` over seated seesaw riders.
pub fn seesaw_torque(registry: &Registry) -> f32 {
    registry
        .riders(Ride::Seesaw)
        .map(|c| c.weight * c.position.x)
        .sum()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Seesaw {
    pub angle: f32,
    pub angular_velocity: f32,
}

impl Seesaw {
    /// Tilt the plank settles toward for a given torque.
    pub fn target_angle(torque: f32, params: &SeesawParams) -> f32 {
        -(torque / params.torque_scale).clamp(-1.0, 1.0) * params.max_angle
    }

    pub fn step(&mut self, torque: f32, params: &SeesawParams) {
        let target = Self::target_angle(torque, params);
        self.angular_velocity += (target - self.angle) * params.spring;
        self.angular_velocity *= params.damping;
        self.angle =
            (self.angle + self.angular_velocity).clamp(-params.max_angle, params.max_angle);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Swing {
    pub angle: f32,
    pub velocity: f32,
}

impl Swing {
    pub fn step(&mut self, rider_count: usize, elapsed_ms: f64, params: &SwingParams) {
        let occupied = rider_count > 0;
        self.velocity += -self.angle * params.spring;
        self.velocity *= if occupied {
            params.damping_occupied
        } else {
            params.damping_empty
        };
        if occupied {
            // idle sway so an occupied swing never fully stops
            let phase = (elapsed_ms * params.sway_rate_per_ms).sin() as f32;
            self.velocity += phase * params.sway_amplitude;
        }
        self.angle = (self.angle + self.velocity).clamp(-params.max_angle, params.max_angle);
    }

    pub fn push(&mut self, impulse: f32) {
        self.velocity += impulse;
    }
}

/// Lateral seat offset for the `rider_count`-th rider (counting the one just
/// seated), fanned out and clamped to the seat width.
#[inline]
pub fn swing_rider_offset(rider_count: usize, params: &SwingParams) -> f32 {
    ((rider_count as f32 - 1.0) * params.rider_spacing)
        .clamp(-params.max_rider_offset, params.max_rider_offset)
}
