use glam::Vec3;

// Shared tuning constants used by the core and both front-ends.
// All rates are per tick: one physics step per rendered frame.

// Seesaw
pub const SEESAW_ORIGIN: Vec3 = Vec3::new(0.0, 1.55, 0.0); // pivot of the plank root
pub const SEESAW_TORQUE_SCALE: f32 = 420.0; // torque that maps to full tilt
pub const SEESAW_MAX_ANGLE: f32 = std::f32::consts::PI / 10.0;
pub const SEESAW_SPRING: f32 = 0.085;
pub const SEESAW_DAMPING: f32 = 0.86;
pub const SEESAW_BALANCE_THRESHOLD: f32 = 30.0; // |torque| below this reads as balanced
pub const SEESAW_SEAT_HALF_SPAN: f32 = 5.4; // riders are clamped to +/- this along the plank
pub const PLANK_SIZE: Vec3 = Vec3::new(12.0, 0.48, 1.7);

// Swing
pub const SWING_ORIGIN: Vec3 = Vec3::new(9.5, 4.7, -7.8); // top bar, pivot of the rig
pub const SWING_SEAT_OFFSET: Vec3 = Vec3::new(0.0, -3.1, 0.0); // rig-local seat / rider anchor
pub const SWING_SPRING: f32 = 0.028;
pub const SWING_DAMPING_OCCUPIED: f32 = 0.992;
pub const SWING_DAMPING_EMPTY: f32 = 0.96;
pub const SWING_SWAY_AMPLITUDE: f32 = 0.0007;
pub const SWING_SWAY_RATE_PER_MS: f64 = 0.004;
pub const SWING_MAX_ANGLE: f32 = 0.62;
pub const SWING_PUSH_IMPULSE: f32 = 0.06; // click on an occupied swing
pub const SWING_JOIN_IMPULSE: f32 = 0.045; // nudge when a rider sits down
pub const SWING_RIDER_SPACING: f32 = 0.24;
pub const SWING_MAX_RIDER_OFFSET: f32 = 0.36;
pub const SWING_SEAT_SIZE: Vec3 = Vec3::new(1.65, 0.12, 0.58);
pub const SWING_HITBOX_SIZE: Vec3 = Vec3::new(2.9, 1.8, 2.2);
pub const SWING_CHAIN_X: f32 = 0.52;
pub const SWING_CHAIN_LENGTH: f32 = 3.1;
pub const SWING_CHAIN_RADIUS: f32 = 0.035;

// Riders
pub const RIDE_SEAT_HEIGHT: f32 = 0.32; // frame-local y of a seated character
pub const GROUND_HEIGHT: f32 = -0.42; // world y of a standing character
pub const SIT_BLEND_RATE: f32 = 0.18; // sit_amount approach per tick

// Character creation
pub const REFERENCE_HEIGHT_CM: f32 = 170.0;
pub const REFERENCE_WEIGHT_KG: f32 = 65.0;
pub const HEIGHT_SCALE_RANGE: (f32, f32) = (0.8, 1.25);
pub const WIDTH_SCALE_RANGE: (f32, f32) = (0.72, 1.45);
pub const SPAWN_X_MIN: f32 = -4.6;
pub const SPAWN_X_SPAN: f32 = 2.8;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 7.2, 15.5);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.8, 0.0);
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Cosmetic palettes (0xRRGGBB)
pub const SKIN_PALETTE: [u32; 3] = [0xf3c8ab, 0xe9b996, 0xd69f7f];
pub const HAIR_PALETTE: [u32; 3] = [0x211713, 0x3a2a22, 0x1b1b1b];
pub const SHIRT_PALETTE: [u32; 3] = [0x4f76ff, 0x3ebc8a, 0xea5b6a];
pub const PANTS_PALETTE: [u32; 3] = [0x2f3b4c, 0x1d2730, 0x293443];
pub const SKIRT_COLOR: u32 = 0xff84b2;

/// Convert a packed `0xRRGGBB` colour into linear-ish `[r, g, b]` floats.
#[inline]
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
