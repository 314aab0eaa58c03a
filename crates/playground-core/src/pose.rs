//! Procedural standing/seated pose blending.
//!
//! Every offset is linear in `sit_amount`, so the blend between the rest pose
//! (0) and the seated pose (1) is continuous and monotonic.

use crate::constants::SIT_BLEND_RATE;
use std::f32::consts::PI;

/// Body-part offsets in character-local space, before width/height sizing of
/// the parts themselves. Right-side parts mirror the left-side roll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub torso_y: f32,
    /// Rotation about X; positive leans the torso toward the facing direction.
    pub torso_pitch: f32,
    pub head_y: f32,
    pub head_pitch: f32,
    /// Left arm rotation about Z, away from the body.
    pub arm_roll: f32,
    pub arm_pitch: f32,
    pub leg_y: f32,
    pub leg_z: f32,
    /// Negative swings the feet forward (hip flexion).
    pub leg_pitch: f32,
}

// Rest pose, in units of height_scale
const TORSO_Y: f32 = 0.92;
const HEAD_Y: f32 = 1.78;
const LEG_Y: f32 = 0.14;
const ARM_REST_ROLL: f32 = PI / 8.0;

// Seated deltas at sit_amount = 1
const TORSO_DROP: f32 = 0.18;
const TORSO_LEAN: f32 = 0.14;
const HEAD_DROP: f32 = 0.12;
const HEAD_NOD: f32 = 0.06;
const ARM_SPREAD: f32 = 0.18;
const ARM_REACH: f32 = -0.3;
const LEG_RAISE: f32 = 0.22;
const LEG_FORWARD: f32 = 0.26;
const LEG_BEND: f32 = -1.18;

impl Pose {
    pub fn blend(sit_amount: f32, height_scale: f32) -> Self {
        let s = sit_amount;
        let h = height_scale;
        Self {
            torso_y: TORSO_Y * h - TORSO_DROP * h * s,
            torso_pitch: TORSO_LEAN * s,
            head_y: HEAD_Y * h - HEAD_DROP * h * s,
            head_pitch: HEAD_NOD * s,
            arm_roll: ARM_REST_ROLL + ARM_SPREAD * s,
            arm_pitch: ARM_REACH * s,
            leg_y: LEG_Y * h + LEG_RAISE * h * s,
            leg_z: LEG_FORWARD * s,
            leg_pitch: LEG_BEND * s,
        }
    }

    pub fn rest(height_scale: f32) -> Self {
        Self::blend(0.0, height_scale)
    }
}

/// One smoothing step of `sit_amount` toward 1 (seated) or 0 (standing).
#[inline]
pub fn step_sit_amount(sit_amount: f32, seated: bool) -> f32 {
    let target = if seated { 1.0 } else { 0.0 };
    sit_amount + (target - sit_amount) * SIT_BLEND_RATE
}
