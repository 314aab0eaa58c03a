//! Coordinate frames a character can be expressed in.
//!
//! A rider's position is stored relative to the frame of the ride it sits on.
//! Switching rides re-expresses the transform in the new frame so the figure
//! does not jump in world space.

use crate::constants::{SEESAW_ORIGIN, SWING_ORIGIN, SWING_SEAT_OFFSET};
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Frame {
    World,
    /// Plank root; rotates about world Z by the seesaw tilt.
    Seesaw,
    /// Swing rig hanging from the top bar; rotates about X by the swing angle.
    SwingRig,
    /// Rider anchor at the seat, a fixed offset inside the rig.
    SwingSeat,
}

/// Frame-to-world transforms for one tick, built from the current ride angles.
#[derive(Clone, Copy, Debug)]
pub struct FrameTransforms {
    seesaw: Mat4,
    swing_rig: Mat4,
    swing_seat: Mat4,
}

impl FrameTransforms {
    pub fn new(seesaw_angle: f32, swing_angle: f32) -> Self {
        let seesaw =
            Mat4::from_rotation_translation(Quat::from_rotation_z(seesaw_angle), SEESAW_ORIGIN);
        let swing_rig =
            Mat4::from_rotation_translation(Quat::from_rotation_x(swing_angle), SWING_ORIGIN);
        let swing_seat = swing_rig * Mat4::from_translation(SWING_SEAT_OFFSET);
        Self {
            seesaw,
            swing_rig,
            swing_seat,
        }
    }

    pub fn to_world(&self, frame: Frame) -> Mat4 {
        match frame {
            Frame::World => Mat4::IDENTITY,
            Frame::Seesaw => self.seesaw,
            Frame::SwingRig => self.swing_rig,
            Frame::SwingSeat => self.swing_seat,
        }
    }

    pub fn local_to_world(&self, frame: Frame, local: Vec3) -> Vec3 {
        self.to_world(frame).transform_point3(local)
    }

    pub fn world_to_local(&self, frame: Frame, world: Vec3) -> Vec3 {
        self.to_world(frame).inverse().transform_point3(world)
    }

    /// World-space position and orientation of a frame-local transform.
    pub fn pose_in_world(&self, frame: Frame, position: Vec3, rotation: Quat) -> (Vec3, Quat) {
        let (_, frame_rot, _) = self.to_world(frame).to_scale_rotation_translation();
        (self.local_to_world(frame, position), frame_rot * rotation)
    }

    /// Re-express a transform held in `from` as one held in `to`, keeping its
    /// world placement.
    pub fn reparent(&self, from: Frame, to: Frame, position: Vec3, rotation: Quat) -> (Vec3, Quat) {
        if from == to {
            return (position, rotation);
        }
        let (world_pos, world_rot) = self.pose_in_world(from, position, rotation);
        let (_, to_rot, _) = self.to_world(to).to_scale_rotation_translation();
        (
            self.world_to_local(to, world_pos),
            (to_rot.inverse() * world_rot).normalize(),
        )
    }
}

impl Default for FrameTransforms {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
