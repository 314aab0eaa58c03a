use crate::constants::*;
use glam::{Mat4, Quat, Vec3};
use playground_core::{
    rgb, swing_clickables, Frame, Placed, Playground, Shape, PLANK_SIZE, SWING_ORIGIN,
};

// Edge of a cube with the same volume as a unit sphere, roughly.
const SPHERE_AS_CUBE: f32 = 1.61;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub fn new(model: Mat4, hex: u32) -> Self {
        let [r, g, b] = rgb(hex);
        Self {
            model: model.to_cols_array_2d(),
            color: [r, g, b, 1.0],
        }
    }
}

fn part_model(placed: &Placed) -> Mat4 {
    match placed.shape {
        Shape::Cube => placed.transform,
        Shape::Sphere => placed.transform * Mat4::from_scale(Vec3::splat(SPHERE_AS_CUBE)),
    }
}

fn boxed(center: Vec3, size: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(size, Quat::IDENTITY, center)
}

/// Collect every box drawn this frame: static stands, the moving toys and
/// each character's posed body parts.
pub fn build_instances(pg: &Playground, out: &mut Vec<InstanceRaw>) {
    out.clear();
    let frames = pg.frames();

    out.push(InstanceRaw::new(boxed(GROUND_CENTER, GROUND_SIZE), GROUND_COLOR));
    out.push(InstanceRaw::new(
        boxed(SEESAW_BASE_CENTER, SEESAW_BASE_SIZE),
        SEESAW_BASE_COLOR,
    ));
    out.push(InstanceRaw::new(
        boxed(SEESAW_PIVOT_CENTER, SEESAW_PIVOT_SIZE),
        SEESAW_PIVOT_COLOR,
    ));

    let seesaw = frames.to_world(Frame::Seesaw);
    out.push(InstanceRaw::new(
        seesaw * boxed(Vec3::ZERO, PLANK_SIZE),
        PLANK_COLOR,
    ));
    for x in [-PLANK_CAP_X, PLANK_CAP_X] {
        out.push(InstanceRaw::new(
            seesaw * boxed(Vec3::new(x, 0.0, 0.0), PLANK_CAP_SIZE),
            PLANK_CAP_COLOR,
        ));
    }

    for center in SWING_POST_CENTERS {
        out.push(InstanceRaw::new(
            boxed(center, SWING_POST_SIZE),
            SWING_FRAME_COLOR,
        ));
    }
    out.push(InstanceRaw::new(
        boxed(SWING_ORIGIN, SWING_BAR_SIZE),
        SWING_FRAME_COLOR,
    ));

    // seat and both chains; the enlarged hitbox stays invisible
    let rig = frames.to_world(Frame::SwingRig);
    let [seat, chain_l, chain_r, _hitbox] = swing_clickables();
    out.push(InstanceRaw::new(rig * seat.transform, SWING_SEAT_COLOR));
    out.push(InstanceRaw::new(rig * chain_l.transform, SWING_CHAIN_COLOR));
    out.push(InstanceRaw::new(rig * chain_r.transform, SWING_CHAIN_COLOR));

    for (_, character) in pg.registry().iter() {
        let root = frames.to_world(character.frame()) * character.local_transform();
        for part in character.body_parts() {
            out.push(InstanceRaw::new(root * part_model(&part.placed), part.color));
        }
    }
}
