//! Ray intersection primitives used for picking and drop-zone resolution.
//!
//! Pickable geometry is expressed as unit primitives placed by an affine
//! transform. Rays are moved into the primitive's local space without
//! renormalizing, so the returned `t` is directly the world-space distance
//! along the (normalized) world ray.

use crate::state::Ray;
use glam::{Mat4, Vec3};

/// Unit primitive in its local space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Axis-aligned cube spanning `[-0.5, 0.5]` on each axis.
    Cube,
    /// Sphere of radius 1 centred at the origin.
    Sphere,
}

/// A shape placed in some parent space.
#[derive(Clone, Copy, Debug)]
pub struct Placed {
    pub shape: Shape,
    pub transform: Mat4,
}

impl Placed {
    pub fn cuboid(center: Vec3, size: Vec3) -> Self {
        Self {
            shape: Shape::Cube,
            transform: Mat4::from_scale_rotation_translation(size, glam::Quat::IDENTITY, center),
        }
    }

    /// Nearest non-negative hit distance of `ray` given the placement's parent
    /// to world transform.
    pub fn intersect(&self, parent_to_world: Mat4, ray: &Ray) -> Option<f32> {
        let to_local = (parent_to_world * self.transform).inverse();
        let o = to_local.transform_point3(ray.origin);
        let d = to_local.transform_vector3(ray.dir);
        match self.shape {
            Shape::Cube => ray_unit_cube(o, d),
            Shape::Sphere => ray_sphere(o, d, Vec3::ZERO, 1.0),
        }
    }
}

/// Ray/sphere entry distance. `ray_dir` need not be normalized; the result is
/// in units of `ray_dir`. Rays starting inside the sphere do not hit.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let a = ray_dir.dot(ray_dir);
    if a <= f32::EPSILON {
        return None;
    }
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / a;
    (t >= 0.0).then_some(t)
}

/// Slab test against the unit cube. Front faces only: an origin inside the
/// cube is a miss.
#[inline]
pub fn ray_unit_cube(origin: Vec3, dir: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-9 {
            if !(-0.5..=0.5).contains(&o) {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (-0.5 - o) * inv;
        let mut t1 = (0.5 - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    (t_near >= 0.0).then_some(t_near)
}

/// Intersection with the horizontal plane `y = height`, only in front of the
/// ray origin.
#[inline]
pub fn ray_horizontal_plane(ray: &Ray, height: f32) -> Option<Vec3> {
    if ray.dir.y.abs() < 1e-6 {
        return None;
    }
    let t = (height - ray.origin.y) / ray.dir.y;
    (t >= 0.0).then(|| ray.at(t))
}
