//! Pointer-driven picking, dragging and drop-zone resolution.
//!
//! A gesture runs `Idle -> Dragging -> Idle`. Pointer-down on an occupied
//! swing pushes it instead of starting a drag. Pointer-up re-casts the last
//! pointer ray against the seesaw plank, then the swing seat hitbox; anything
//! else drops the character to the ground.

use crate::character::{BodyPart, Ride};
use crate::constants::*;
use crate::frame::{Frame, FrameTransforms};
use crate::picking::{ray_horizontal_plane, Placed};
use crate::physics::swing_rider_offset;
use crate::playground::Playground;
use crate::registry::{CharacterId, Registry};
use crate::state::Ray;
use crate::status::Hint;
use glam::{Vec2, Vec3};

/// Transient state between pointer-down and pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub character: CharacterId,
    /// World y of the horizontal plane the pointer is projected onto.
    pub plane_height: f32,
    /// Character origin minus the projected pointer point.
    pub offset: Vec3,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
    last_ndc: Option<Vec2>,
}

impl DragController {
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}

/// What a pointer event did, for hosts that want more than the hint line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    Ignored,
    SwingPushed { impulse: f32 },
    DragStarted(CharacterId),
    Moved(CharacterId),
    Dropped { character: CharacterId, ride: Ride },
}

#[derive(Clone, Copy, Debug)]
pub struct CharacterHit {
    pub owner: CharacterId,
    pub part: BodyPart,
    pub distance: f32,
    pub point: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    Seesaw { point: Vec3 },
    Swing { point: Vec3 },
    Ground,
}

/// Plank surface, in the seesaw frame.
pub fn plank_target() -> Placed {
    Placed::cuboid(Vec3::ZERO, PLANK_SIZE)
}

/// Invisible enlarged box around the swing seat, in the swing rig frame.
pub fn swing_seat_hitbox() -> Placed {
    Placed::cuboid(SWING_SEAT_OFFSET, SWING_HITBOX_SIZE)
}

/// Everything on the swing that can be clicked to push it, in the rig frame.
pub fn swing_clickables() -> [Placed; 4] {
    let chain_size = Vec3::new(
        SWING_CHAIN_RADIUS * 2.0,
        SWING_CHAIN_LENGTH,
        SWING_CHAIN_RADIUS * 2.0,
    );
    let chain_y = -SWING_CHAIN_LENGTH * 0.5;
    [
        Placed::cuboid(SWING_SEAT_OFFSET, SWING_SEAT_SIZE),
        Placed::cuboid(Vec3::new(-SWING_CHAIN_X, chain_y, 0.0), chain_size),
        Placed::cuboid(Vec3::new(SWING_CHAIN_X, chain_y, 0.0), chain_size),
        swing_seat_hitbox(),
    ]
}

pub fn hits_swing(frames: &FrameTransforms, ray: &Ray) -> bool {
    let rig = frames.to_world(Frame::SwingRig);
    swing_clickables()
        .iter()
        .any(|target| target.intersect(rig, ray).is_some())
}

/// Nearest body part under the ray, resolved to its owning character.
pub fn pick_character(
    registry: &Registry,
    frames: &FrameTransforms,
    ray: &Ray,
) -> Option<CharacterHit> {
    let mut best: Option<CharacterHit> = None;
    for (id, character) in registry.iter() {
        let root = frames.to_world(character.frame()) * character.local_transform();
        for part in character.body_parts() {
            let Some(t) = part.placed.intersect(root, ray) else {
                continue;
            };
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(CharacterHit {
                        owner: id,
                        part: part.part,
                        distance: t,
                        point: ray.at(t),
                    })
                }
            }
        }
    }
    best
}

/// Drop zone under the ray: the plank first, then the swing seat.
pub fn drop_target(frames: &FrameTransforms, ray: &Ray) -> DropTarget {
    if let Some(t) = plank_target().intersect(frames.to_world(Frame::Seesaw), ray) {
        return DropTarget::Seesaw { point: ray.at(t) };
    }
    if let Some(t) = swing_seat_hitbox().intersect(frames.to_world(Frame::SwingRig), ray) {
        return DropTarget::Swing { point: ray.at(t) };
    }
    DropTarget::Ground
}

impl Playground {
    /// Pointer pressed at a viewport position (CSS px, origin top-left).
    pub fn pointer_down(&mut self, pos: Vec2) -> PointerOutcome {
        let ndc = self.viewport.to_ndc(pos);
        self.drag.last_ndc = Some(ndc);
        if self.drag.is_dragging() {
            return PointerOutcome::Ignored;
        }
        let ray = self.camera.ray_from_ndc(ndc);
        let frames = self.frames();

        if self.registry.rider_count(Ride::Swing) > 0 && hits_swing(&frames, &ray) {
            // upper half pushes backward, lower half forward
            let dir = if ndc.y >= 0.0 { -1.0 } else { 1.0 };
            let impulse = dir * self.config.swing.push_impulse;
            self.swing.push(impulse);
            self.set_hint(Hint::SwingPushed);
            log::debug!("[swing] pushed, impulse={:.3}", impulse);
            return PointerOutcome::SwingPushed { impulse };
        }

        let Some(hit) = pick_character(&self.registry, &frames, &ray) else {
            return PointerOutcome::Ignored;
        };
        let id = hit.owner;
        let Ok(character) = self.registry.get_mut(id) else {
            return PointerOutcome::Ignored;
        };
        let (world_pos, world_rot) = frames.reparent(
            character.frame(),
            Frame::World,
            character.position,
            character.rotation,
        );
        character.attach(Ride::None, world_pos, world_rot);

        let offset = ray_horizontal_plane(&ray, world_pos.y)
            .map(|p| world_pos - p)
            .unwrap_or(Vec3::ZERO);
        self.drag.session = Some(DragSession {
            character: id,
            plane_height: world_pos.y,
            offset,
        });
        self.set_hint(Hint::DragStarted);
        log::debug!("[drag] begin {:?} via {:?}", id, hit.part);
        PointerOutcome::DragStarted(id)
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> PointerOutcome {
        let ndc = self.viewport.to_ndc(pos);
        self.drag.last_ndc = Some(ndc);
        let Some(session) = self.drag.session else {
            return PointerOutcome::Ignored;
        };
        let ray = self.camera.ray_from_ndc(ndc);
        let Some(point) = ray_horizontal_plane(&ray, session.plane_height) else {
            return PointerOutcome::Ignored;
        };
        match self.registry.get_mut(session.character) {
            Ok(character) => {
                character.position = point + session.offset;
                PointerOutcome::Moved(session.character)
            }
            Err(e) => {
                log::warn!("[drag] {e}");
                PointerOutcome::Ignored
            }
        }
    }

    /// Pointer released. `pos` falls back to the last known pointer position.
    pub fn pointer_up(&mut self, pos: Option<Vec2>) -> PointerOutcome {
        if let Some(pos) = pos {
            self.drag.last_ndc = Some(self.viewport.to_ndc(pos));
        }
        let Some(session) = self.drag.session.take() else {
            return PointerOutcome::Ignored;
        };
        let frames = self.frames();
        let target = self
            .drag
            .last_ndc
            .map(|ndc| drop_target(&frames, &self.camera.ray_from_ndc(ndc)))
            .unwrap_or(DropTarget::Ground);
        self.drop_character(session.character, target)
    }

    /// End an active drag without a pointer-up, e.g. on focus loss.
    pub fn cancel_drag(&mut self) -> PointerOutcome {
        match self.drag.session.take() {
            Some(session) => {
                log::debug!("[drag] cancelled for {:?}", session.character);
                self.drop_character(session.character, DropTarget::Ground)
            }
            None => PointerOutcome::Ignored,
        }
    }

    fn drop_character(&mut self, id: CharacterId, target: DropTarget) -> PointerOutcome {
        let frames = self.frames();
        let seat_half_span = self.config.seesaw.seat_half_span;
        let Ok(character) = self.registry.get_mut(id) else {
            log::warn!("[drag] dropped unknown character {:?}", id);
            return PointerOutcome::Ignored;
        };
        let from = character.frame();

        let ride = match target {
            DropTarget::Seesaw { point } => {
                let (_, rotation) =
                    frames.reparent(from, Frame::Seesaw, character.position, character.rotation);
                let local_hit = frames.world_to_local(Frame::Seesaw, point);
                let x = local_hit.x.clamp(-seat_half_span, seat_half_span);
                character.attach(Ride::Seesaw, Vec3::new(x, RIDE_SEAT_HEIGHT, 0.0), rotation);
                self.set_hint(Hint::SeatedOnSeesaw);
                Ride::Seesaw
            }
            DropTarget::Swing { .. } => {
                let (position, rotation) =
                    frames.reparent(from, Frame::SwingSeat, character.position, character.rotation);
                character.attach(Ride::Swing, position, rotation);
                let riders = self.registry.rider_count(Ride::Swing);
                let offset_x = swing_rider_offset(riders, &self.config.swing);
                if let Ok(character) = self.registry.get_mut(id) {
                    character.position = Vec3::new(offset_x, RIDE_SEAT_HEIGHT, 0.0);
                }
                let sign = if offset_x >= 0.0 { 1.0 } else { -1.0 };
                self.swing.push(sign * self.config.swing.join_impulse);
                self.set_hint(Hint::SeatedOnSwing);
                Ride::Swing
            }
            DropTarget::Ground => {
                let (mut position, rotation) =
                    frames.reparent(from, Frame::World, character.position, character.rotation);
                position.y = GROUND_HEIGHT;
                character.attach(Ride::None, position, rotation);
                self.set_hint(Hint::DroppedToGround);
                Ride::None
            }
        };
        log::info!("[drag] {:?} dropped onto {:?}", id, ride);
        PointerOutcome::Dropped { character: id, ride }
    }
}
