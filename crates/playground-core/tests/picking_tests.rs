// Host-side tests for ray intersection and camera ray construction.

use glam::{Mat4, Vec2, Vec3};
use playground_core::*;

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    // sphere behind the origin
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_scales_with_direction_length() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z * 2.0, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 1.5).abs() < 1e-5);
}

#[test]
fn ray_sphere_from_inside_is_a_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::ZERO, 1.0).is_none());
}

#[test]
fn unit_cube_front_face() {
    let t = ray_unit_cube(Vec3::new(0.0, 0.0, -3.0), Vec3::Z).unwrap();
    assert!((t - 2.5).abs() < 1e-5);
    assert!(ray_unit_cube(Vec3::new(2.0, 0.0, -3.0), Vec3::Z).is_none());
    assert!(ray_unit_cube(Vec3::ZERO, Vec3::Z).is_none());
}

#[test]
fn placed_cuboid_reports_world_distance() {
    let ray = Ray::new(Vec3::ZERO, Vec3::Z);
    let target = Placed::cuboid(Vec3::new(0.0, 0.0, 10.0), Vec3::new(2.0, 4.0, 6.0));
    let t = target.intersect(Mat4::IDENTITY, &ray).unwrap();
    assert!((t - 7.0).abs() < 1e-4);
    assert!((ray.at(t) - Vec3::new(0.0, 0.0, 7.0)).length() < 1e-4);
}

#[test]
fn placed_sphere_under_parent_transform() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);
    let ball = Placed {
        shape: Shape::Sphere,
        transform: Mat4::from_scale(Vec3::splat(2.0)),
    };
    let parent = Mat4::from_translation(Vec3::new(0.0, 0.0, 4.0));
    let t = ball.intersect(parent, &ray).unwrap();
    assert!((t - 12.0).abs() < 1e-4);
}

#[test]
fn rotated_plank_is_still_hit_from_above() {
    let frames = FrameTransforms::new(0.25, 0.0);
    let top = frames.local_to_world(Frame::Seesaw, Vec3::new(4.0, PLANK_SIZE.y * 0.5, 0.0));
    let ray = Ray::new(top + Vec3::Y * 5.0, -Vec3::Y);
    let t = plank_target()
        .intersect(frames.to_world(Frame::Seesaw), &ray)
        .unwrap();
    assert!(t > 4.0 && t < 5.5);
}

#[test]
fn horizontal_plane_hit_and_parallel_miss() {
    let down = Ray::new(Vec3::new(1.0, 10.0, 2.0), -Vec3::Y);
    let p = ray_horizontal_plane(&down, 2.0).unwrap();
    assert!((p - Vec3::new(1.0, 2.0, 2.0)).length() < 1e-5);

    let flat = Ray::new(Vec3::ZERO, Vec3::X);
    assert!(ray_horizontal_plane(&flat, 1.0).is_none());
    // plane behind the origin
    assert!(ray_horizontal_plane(&down, 12.0).is_none());
}

#[test]
fn ray_through_projected_point_passes_through_it() {
    let camera = Camera::default();
    let world = Vec3::new(3.0, 1.79, 0.0);
    let ndc = camera.world_to_ndc(world);
    let ray = camera.ray_from_ndc(ndc);
    let to_point = world - ray.origin;
    let along = to_point.dot(ray.dir);
    assert!((ray.at(along) - world).length() < 1e-3);
    assert!((ray.dir.length() - 1.0).abs() < 1e-5);
}

#[test]
fn viewport_ndc_round_trip_and_orientation() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
    assert_eq!(vp.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
    let p = Vec2::new(123.0, 456.0);
    assert!((vp.from_ndc(vp.to_ndc(p)) - p).length() < 1e-3);
    // zero-sized surfaces are clamped
    assert_eq!(Viewport::new(0.0, 0.0).aspect(), 1.0);
}

#[test]
fn centre_ray_looks_at_target() {
    let camera = Camera::default();
    let ray = camera.ray_from_ndc(Vec2::ZERO);
    let expected = (camera.target - camera.eye).normalize();
    assert!((ray.dir - expected).length() < 1e-4);
}

#[test]
fn swing_clickables_cover_seat_and_chains() {
    let frames = FrameTransforms::default();
    let seat = frames.local_to_world(Frame::SwingSeat, Vec3::ZERO);
    let down_at = |p: Vec3| Ray::new(p + Vec3::new(0.0, 0.0, 20.0), -Vec3::Z);
    assert!(hits_swing(&frames, &down_at(seat)));
    let chain = frames.local_to_world(Frame::SwingRig, Vec3::new(SWING_CHAIN_X, -0.4, 0.0));
    assert!(hits_swing(&frames, &down_at(chain)));
    assert!(!hits_swing(&frames, &down_at(Vec3::new(0.0, 1.0, 0.0))));
    let hitbox = swing_seat_hitbox();
    assert!(hitbox.transform.transform_point3(Vec3::splat(0.5)).x > SWING_SEAT_SIZE.x * 0.5);
}

#[test]
fn drop_target_prefers_plank_then_swing() {
    let frames = FrameTransforms::default();
    let over_plank = Ray::new(Vec3::new(1.0, 10.0, 0.0), -Vec3::Y);
    assert!(matches!(
        drop_target(&frames, &over_plank),
        DropTarget::Seesaw { .. }
    ));
    let seat = frames.local_to_world(Frame::SwingSeat, Vec3::ZERO);
    let over_seat = Ray::new(seat + Vec3::Y * 10.0, -Vec3::Y);
    assert!(matches!(
        drop_target(&frames, &over_seat),
        DropTarget::Swing { .. }
    ));
    let over_grass = Ray::new(Vec3::new(-20.0, 10.0, 20.0), -Vec3::Y);
    assert_eq!(drop_target(&frames, &over_grass), DropTarget::Ground);
}

#[test]
fn pick_character_returns_nearest_owner() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(7);
    let params = CharacterParams {
        height_cm: 170.0,
        weight_kg: 65.0,
        gender: Gender::Male,
    };
    let mut registry = Registry::new();
    let mut near = Character::new(params, &mut rng);
    near.position = Vec3::new(0.0, GROUND_HEIGHT, 2.0);
    let mut far = Character::new(params, &mut rng);
    far.position = Vec3::new(0.0, GROUND_HEIGHT, -2.0);
    let far_id = registry.insert(far);
    let near_id = registry.insert(near);

    let frames = FrameTransforms::default();
    let ray = Ray::new(Vec3::new(0.0, 0.5, 20.0), -Vec3::Z);
    let hit = pick_character(&registry, &frames, &ray).unwrap();
    assert_eq!(hit.owner, near_id);
    assert_ne!(hit.owner, far_id);
    assert_eq!(hit.part, BodyPart::Torso);
    assert!((hit.point.z - (2.0 + 0.28)).abs() < 1e-3);

    let miss = Ray::new(Vec3::new(10.0, 0.5, 20.0), -Vec3::Z);
    assert!(pick_character(&registry, &frames, &miss).is_none());
}
