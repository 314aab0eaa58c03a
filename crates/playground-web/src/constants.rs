use glam::Vec3;

// Scene dressing drawn around the rides. Positions are world-space box
// centres, sizes are full extents, colours are 0xRRGGBB.

pub const SKY_COLOR: u32 = 0xa7dafc;
pub const LIGHT_DIR: Vec3 = Vec3::new(10.0, 14.0, 9.0); // towards the key light
pub const AMBIENT: [f32; 3] = [0.42, 0.44, 0.48];

pub const GROUND_CENTER: Vec3 = Vec3::new(0.0, -0.61, 0.0);
pub const GROUND_SIZE: Vec3 = Vec3::new(80.0, 0.02, 80.0);
pub const GROUND_COLOR: u32 = 0x8ccb6b;

// Seesaw stand
pub const SEESAW_BASE_CENTER: Vec3 = Vec3::new(0.0, -0.48, 0.0);
pub const SEESAW_BASE_SIZE: Vec3 = Vec3::new(3.8, 0.28, 3.8);
pub const SEESAW_BASE_COLOR: u32 = 0x272727;
pub const SEESAW_PIVOT_CENTER: Vec3 = Vec3::new(0.0, 0.5, 0.0);
pub const SEESAW_PIVOT_SIZE: Vec3 = Vec3::new(2.0, 1.65, 2.0);
pub const SEESAW_PIVOT_COLOR: u32 = 0x4a4a4a;
pub const PLANK_COLOR: u32 = 0xbb7a44;
pub const PLANK_CAP_X: f32 = 6.05; // seesaw-local
pub const PLANK_CAP_SIZE: Vec3 = Vec3::new(0.2, 1.64, 1.64);
pub const PLANK_CAP_COLOR: u32 = 0x3a2a20;

// Swing frame
pub const SWING_POST_SIZE: Vec3 = Vec3::new(0.26, 5.2, 0.26);
pub const SWING_POST_CENTERS: [Vec3; 2] = [Vec3::new(6.9, 2.1, -7.8), Vec3::new(12.1, 2.1, -7.8)];
pub const SWING_BAR_SIZE: Vec3 = Vec3::new(5.2, 0.26, 0.26);
pub const SWING_FRAME_COLOR: u32 = 0x5f7f92;
pub const SWING_CHAIN_COLOR: u32 = 0x3b3b3b;
pub const SWING_SEAT_COLOR: u32 = 0x2d2d2d;

// Upper bound on drawn boxes before the instance buffer grows
pub const INITIAL_INSTANCE_CAPACITY: usize = 256;
