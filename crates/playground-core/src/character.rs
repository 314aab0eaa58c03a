use crate::constants::*;
use crate::error::PlaygroundError;
use crate::frame::Frame;
use crate::picking::{Placed, Shape};
use crate::pose::{step_sit_amount, Pose};
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = PlaygroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(PlaygroundError::UnknownGender(other.to_string())),
        }
    }
}

/// The toy a character is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ride {
    #[default]
    None,
    Seesaw,
    Swing,
}

impl Ride {
    /// Frame a character on this ride is expressed in.
    pub fn frame(self) -> Frame {
        match self {
            Ride::None => Frame::World,
            Ride::Seesaw => Frame::Seesaw,
            Ride::Swing => Frame::SwingSeat,
        }
    }
}

/// Creation parameters from the character form.
#[derive(Clone, Copy, Debug)]
pub struct CharacterParams {
    pub height_cm: f32,
    pub weight_kg: f32,
    pub gender: Gender,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub skin: u32,
    pub hair: u32,
    pub shirt: u32,
    pub pants: u32,
}

impl Palette {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            skin: SKIN_PALETTE[rng.gen_range(0..SKIN_PALETTE.len())],
            hair: HAIR_PALETTE[rng.gen_range(0..HAIR_PALETTE.len())],
            shirt: SHIRT_PALETTE[rng.gen_range(0..SHIRT_PALETTE.len())],
            pants: PANTS_PALETTE[rng.gen_range(0..PANTS_PALETTE.len())],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    HairCap,
    LongHair,
    Torso,
    Skirt,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

/// A body part placed in character-local space.
#[derive(Clone, Copy, Debug)]
pub struct PartPlacement {
    pub part: BodyPart,
    pub placed: Placed,
    pub color: u32,
}

pub type BodyParts = SmallVec<[PartPlacement; 9]>;

#[derive(Clone, Debug)]
pub struct Character {
    pub weight: f32,
    pub height_scale: f32,
    pub width_scale: f32,
    pub gender: Gender,
    pub palette: Palette,
    /// Smoothed pose blend, 0 standing .. 1 seated.
    pub sit_amount: f32,
    /// Position in the frame of the current ride.
    pub position: Vec3,
    /// Orientation in the frame of the current ride.
    pub rotation: Quat,
    ride: Ride,
}

impl Character {
    pub fn new<R: Rng>(params: CharacterParams, rng: &mut R) -> Self {
        let palette = Palette::random(rng);
        let spawn_x = SPAWN_X_MIN + rng.gen::<f32>() * SPAWN_X_SPAN;
        Self {
            weight: params.weight_kg,
            height_scale: height_scale(params.height_cm),
            width_scale: width_scale(params.weight_kg),
            gender: params.gender,
            palette,
            sit_amount: 0.0,
            position: Vec3::new(spawn_x, GROUND_HEIGHT, 0.0),
            rotation: Quat::IDENTITY,
            ride: Ride::None,
        }
    }

    pub fn ride(&self) -> Ride {
        self.ride
    }

    pub fn seated(&self) -> bool {
        self.ride != Ride::None
    }

    pub fn frame(&self) -> Frame {
        self.ride.frame()
    }

    /// Attach to a ride with a transform already expressed in that ride's frame.
    pub(crate) fn attach(&mut self, ride: Ride, position: Vec3, rotation: Quat) {
        self.ride = ride;
        self.position = position;
        self.rotation = rotation;
    }

    /// Character root to frame-local transform.
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    pub fn step_pose(&mut self) {
        self.sit_amount = step_sit_amount(self.sit_amount, self.seated());
    }

    pub fn pose(&self) -> Pose {
        Pose::blend(self.sit_amount, self.height_scale)
    }

    /// Posed body parts in character-local space, used for picking and drawing.
    pub fn body_parts(&self) -> BodyParts {
        let p = self.pose();
        let h = self.height_scale;
        let w = self.width_scale;
        let pal = self.palette;
        let mut parts = BodyParts::new();

        let head_r = 0.44 * w;
        parts.push(PartPlacement {
            part: BodyPart::Head,
            placed: ellipsoid(
                Vec3::splat(head_r),
                Quat::from_rotation_x(p.head_pitch),
                Vec3::new(0.0, p.head_y, 0.0),
            ),
            color: pal.skin,
        });
        let hair_r = 0.48 * w;
        parts.push(PartPlacement {
            part: BodyPart::HairCap,
            placed: ellipsoid(
                Vec3::new(hair_r, hair_r * 0.63, hair_r * 0.72),
                Quat::from_rotation_x(p.head_pitch),
                Vec3::new(0.0, p.head_y + 0.11, -0.14 * w),
            ),
            color: pal.hair,
        });
        if self.gender == Gender::Female {
            parts.push(PartPlacement {
                part: BodyPart::LongHair,
                placed: cuboid(
                    Vec3::new(0.62 * w, 0.95 * h, 0.36),
                    Quat::IDENTITY,
                    Vec3::new(0.0, p.head_y - 0.48 * h, -0.24),
                ),
                color: pal.hair,
            });
        }
        parts.push(PartPlacement {
            part: BodyPart::Torso,
            placed: cuboid(
                Vec3::new(0.92 * w, 1.15 * h, 0.56 * w),
                Quat::from_rotation_x(p.torso_pitch),
                Vec3::new(0.0, p.torso_y, 0.0),
            ),
            color: pal.shirt,
        });
        if self.gender == Gender::Female {
            parts.push(PartPlacement {
                part: BodyPart::Skirt,
                placed: cuboid(
                    Vec3::new(1.36 * w, 0.72 * h, 1.36 * w * 0.7),
                    Quat::from_rotation_x(p.torso_pitch),
                    Vec3::new(0.0, 0.44 * h + (p.torso_y - 0.92 * h), 0.0),
                ),
                color: SKIRT_COLOR,
            });
        }

        let arm_size = Vec3::new(0.22 * w, 0.58 * h + 0.22 * w, 0.22 * w);
        for (part, side) in [(BodyPart::LeftArm, -1.0_f32), (BodyPart::RightArm, 1.0)] {
            parts.push(PartPlacement {
                part,
                placed: cuboid(
                    arm_size,
                    Quat::from_rotation_x(p.arm_pitch) * Quat::from_rotation_z(-side * p.arm_roll),
                    Vec3::new(side * 0.67 * w, 1.03 * h + (p.torso_y - 0.92 * h), 0.02),
                ),
                color: pal.skin,
            });
        }

        let leg_size = Vec3::new(0.28 * w, 0.72 * h + 0.28 * w, 0.28 * w);
        for (part, side) in [(BodyPart::LeftLeg, -1.0_f32), (BodyPart::RightLeg, 1.0)] {
            parts.push(PartPlacement {
                part,
                placed: cuboid(
                    leg_size,
                    Quat::from_rotation_x(p.leg_pitch),
                    Vec3::new(side * 0.28 * w, p.leg_y, p.leg_z),
                ),
                color: pal.pants,
            });
        }
        parts
    }
}

#[inline]
pub fn height_scale(height_cm: f32) -> f32 {
    (height_cm / REFERENCE_HEIGHT_CM).clamp(HEIGHT_SCALE_RANGE.0, HEIGHT_SCALE_RANGE.1)
}

#[inline]
pub fn width_scale(weight_kg: f32) -> f32 {
    (weight_kg / REFERENCE_WEIGHT_KG).clamp(WIDTH_SCALE_RANGE.0, WIDTH_SCALE_RANGE.1)
}

fn cuboid(size: Vec3, rotation: Quat, translation: Vec3) -> Placed {
    Placed {
        shape: Shape::Cube,
        transform: Mat4::from_scale_rotation_translation(size, rotation, translation),
    }
}

fn ellipsoid(radii: Vec3, rotation: Quat, translation: Vec3) -> Placed {
    Placed {
        shape: Shape::Sphere,
        transform: Mat4::from_scale_rotation_translation(radii, rotation, translation),
    }
}
