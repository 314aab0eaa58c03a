use crate::character::{Character, CharacterParams, Ride};
use crate::config::PlaygroundConfig;
use crate::error::Result;
use crate::frame::FrameTransforms;
use crate::interaction::DragController;
use crate::physics::{seesaw_torque, Balance, Seesaw, Swing};
use crate::registry::{CharacterId, Registry};
use crate::state::{Camera, Viewport};
use crate::status::{Hint, Locale, Readout};
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The whole simulated playground: rides, characters and the drag gesture.
///
/// Hosts call [`Playground::tick`] once per displayed frame and forward
/// pointer events between ticks. Everything runs on one thread; ride state
/// written by a pointer event is visible to the next tick.
pub struct Playground {
    pub(crate) config: PlaygroundConfig,
    pub(crate) camera: Camera,
    pub(crate) viewport: Viewport,
    pub(crate) registry: Registry,
    pub(crate) seesaw: Seesaw,
    pub(crate) swing: Swing,
    pub(crate) drag: DragController,
    readout: Readout,
    hint: Option<Hint>,
    rng: StdRng,
}

impl Playground {
    pub fn new(config: PlaygroundConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let viewport = Viewport::new(1280.0, 720.0);
        let camera = Camera {
            aspect: viewport.aspect(),
            ..Camera::default()
        };
        Self {
            config,
            camera,
            viewport,
            registry: Registry::new(),
            seesaw: Seesaw::default(),
            swing: Swing::default(),
            drag: DragController::default(),
            readout: Readout {
                torque: 0.0,
                balance: Balance::Balanced,
            },
            hint: None,
            rng,
        }
    }

    pub fn spawn_character(&mut self, params: CharacterParams) -> CharacterId {
        let character = Character::new(params, &mut self.rng);
        log::info!(
            "[spawn] {:?} {:.0}cm {:.0}kg scales=({:.2},{:.2}) at x={:.2}",
            params.gender,
            params.height_cm,
            params.weight_kg,
            character.height_scale,
            character.width_scale,
            character.position.x
        );
        let id = self.registry.insert(character);
        self.set_hint(Hint::CharacterCreated);
        id
    }

    /// Advance ride physics and pose blending by one frame.
    ///
    /// `elapsed_ms` is the host's monotonic clock and only phases the idle
    /// sway of an occupied swing.
    pub fn tick(&mut self, elapsed_ms: f64) -> Readout {
        let torque = seesaw_torque(&self.registry);
        self.seesaw.step(torque, &self.config.seesaw);

        let swing_riders = self.registry.rider_count(Ride::Swing);
        self.swing.step(swing_riders, elapsed_ms, &self.config.swing);

        for character in self.registry.iter_mut() {
            character.step_pose();
        }

        self.readout = Readout {
            torque,
            balance: Balance::classify(torque, self.config.seesaw.balance_threshold),
        };
        self.readout
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
    }

    pub fn frames(&self) -> FrameTransforms {
        FrameTransforms::new(self.seesaw.angle, self.swing.angle)
    }

    /// Character root to world transform.
    pub fn character_to_world(&self, id: CharacterId) -> Result<Mat4> {
        let character = self.registry.get(id)?;
        Ok(self.frames().to_world(character.frame()) * character.local_transform())
    }

    pub fn character_world_position(&self, id: CharacterId) -> Result<Vec3> {
        let character = self.registry.get(id)?;
        Ok(self
            .frames()
            .local_to_world(character.frame(), character.position))
    }

    /// Viewport position whose pick ray passes through a world point.
    pub fn viewport_point_of(&self, world: Vec3) -> Vec2 {
        self.viewport.from_ndc(self.camera.world_to_ndc(world))
    }

    pub fn set_hint(&mut self, hint: Hint) {
        self.hint = Some(hint);
    }

    /// Drain the hint set since the last call.
    pub fn take_hint(&mut self) -> Option<Hint> {
        self.hint.take()
    }

    pub fn readout(&self) -> Readout {
        self.readout
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn seesaw(&self) -> &Seesaw {
        &self.seesaw
    }

    pub fn swing(&self) -> &Swing {
        &self.swing
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new(PlaygroundConfig::default())
    }
}
