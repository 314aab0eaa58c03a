// Host-side tests for ride frames and re-parenting.

use glam::{Quat, Vec3};
use playground_core::*;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn level_frames_match_rig_layout() {
    let frames = FrameTransforms::default();
    assert!(close(frames.local_to_world(Frame::World, Vec3::ONE), Vec3::ONE));
    assert!(close(frames.local_to_world(Frame::Seesaw, Vec3::ZERO), SEESAW_ORIGIN));
    assert!(close(frames.local_to_world(Frame::SwingRig, Vec3::ZERO), SWING_ORIGIN));
    assert!(close(
        frames.local_to_world(Frame::SwingSeat, Vec3::ZERO),
        Vec3::new(9.5, 1.6, -7.8)
    ));
}

#[test]
fn positive_torque_lowers_the_right_end() {
    let params = SeesawParams::default();
    let angle = Seesaw::target_angle(200.0, &params);
    let frames = FrameTransforms::new(angle, 0.0);
    let right_end = frames.local_to_world(Frame::Seesaw, Vec3::new(6.0, 0.0, 0.0));
    let left_end = frames.local_to_world(Frame::Seesaw, Vec3::new(-6.0, 0.0, 0.0));
    assert!(right_end.y < SEESAW_ORIGIN.y);
    assert!(left_end.y > SEESAW_ORIGIN.y);
}

#[test]
fn swing_seat_moves_on_an_arc() {
    let a = 0.4_f32;
    let frames = FrameTransforms::new(0.0, a);
    let seat = frames.local_to_world(Frame::SwingSeat, Vec3::ZERO);
    let l = -SWING_SEAT_OFFSET.y;
    let expected = SWING_ORIGIN + Vec3::new(0.0, -l * a.cos(), -l * a.sin());
    assert!(close(seat, expected));
    assert!(((seat - SWING_ORIGIN).length() - l).abs() < 1e-4);
}

#[test]
fn world_local_round_trip() {
    let frames = FrameTransforms::new(-0.2, 0.3);
    let p = Vec3::new(1.5, -2.0, 0.7);
    for frame in [Frame::World, Frame::Seesaw, Frame::SwingRig, Frame::SwingSeat] {
        let world = frames.local_to_world(frame, p);
        assert!(close(frames.world_to_local(frame, world), p));
    }
}

#[test]
fn reparent_keeps_world_placement() {
    let frames = FrameTransforms::new(0.22, -0.35);
    let position = Vec3::new(2.0, RIDE_SEAT_HEIGHT, 0.1);
    let rotation = Quat::from_rotation_y(0.5);
    let (world_pos, world_rot) = frames.pose_in_world(Frame::Seesaw, position, rotation);

    let (seat_pos, seat_rot) = frames.reparent(Frame::Seesaw, Frame::SwingSeat, position, rotation);
    let (again_pos, again_rot) = frames.pose_in_world(Frame::SwingSeat, seat_pos, seat_rot);
    assert!(close(again_pos, world_pos));
    assert!(again_rot.angle_between(world_rot) < 1e-3);

    let (back_pos, back_rot) = frames.reparent(Frame::SwingSeat, Frame::Seesaw, seat_pos, seat_rot);
    assert!(close(back_pos, position));
    assert!(back_rot.angle_between(rotation) < 1e-3);
}

#[test]
fn reparent_to_same_frame_is_identity() {
    let frames = FrameTransforms::new(0.1, 0.1);
    let position = Vec3::new(0.3, 0.2, 0.1);
    let rotation = Quat::from_rotation_z(0.2);
    let (p, r) = frames.reparent(Frame::Seesaw, Frame::Seesaw, position, rotation);
    assert_eq!(p, position);
    assert_eq!(r, rotation);
}

#[test]
fn ride_frames() {
    assert_eq!(Ride::None.frame(), Frame::World);
    assert_eq!(Ride::Seesaw.frame(), Frame::Seesaw);
    assert_eq!(Ride::Swing.frame(), Frame::SwingSeat);
    assert_eq!(Ride::default(), Ride::None);
}
