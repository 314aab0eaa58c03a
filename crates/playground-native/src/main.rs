use anyhow::Context;
use glam::{Vec2, Vec3};
use playground_core::{
    BodyPart, CharacterId, CharacterParams, Frame, Gender, Locale, Playground, PlaygroundConfig,
    PointerOutcome, PLANK_SIZE, RIDE_SEAT_HEIGHT, SWING_SEAT_OFFSET,
};

// 60 Hz display
const FRAME_MS: f64 = 1000.0 / 60.0;
const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

struct Session {
    pg: Playground,
    elapsed_ms: f64,
}

impl Session {
    fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.elapsed_ms += FRAME_MS;
            self.pg.tick(self.elapsed_ms);
        }
    }

    fn report(&mut self, label: &str) {
        let locale = self.pg.locale();
        let readout = self.pg.readout();
        log::info!(
            "[{label}] torque={} balance={} seesaw={:.3}rad swing={:.3}rad",
            readout.torque_text(),
            readout.balance_text(locale),
            self.pg.seesaw().angle,
            self.pg.swing().angle,
        );
        if let Some(hint) = self.pg.take_hint() {
            log::info!("[{label}] hint: {}", hint.text(locale));
        }
    }

    /// Screen position over a character's torso.
    fn torso_point(&self, id: CharacterId) -> anyhow::Result<Vec2> {
        let root = self.pg.character_to_world(id)?;
        let character = self.pg.registry().get(id)?;
        let torso = character
            .body_parts()
            .into_iter()
            .find(|p| p.part == BodyPart::Torso)
            .context("character has no torso")?;
        let world = (root * torso.placed.transform).transform_point3(Vec3::ZERO);
        Ok(self.pg.viewport_point_of(world))
    }

    fn drag(&mut self, id: CharacterId, to: Vec2) -> anyhow::Result<PointerOutcome> {
        let from = self.torso_point(id)?;
        match self.pg.pointer_down(from) {
            PointerOutcome::DragStarted(picked) if picked == id => {}
            other => anyhow::bail!("expected to pick {:?}, got {:?}", id, other),
        }
        // a few intermediate moves, like a real pointer
        for step in 1..=4 {
            let t = step as f32 / 4.0;
            self.pg.pointer_move(from.lerp(to, t));
        }
        Ok(self.pg.pointer_up(Some(to)))
    }

    fn plank_point(&self, local_x: f32) -> Vec2 {
        let local = Vec3::new(local_x, PLANK_SIZE.y * 0.5, 0.0);
        let world = self.pg.frames().local_to_world(Frame::Seesaw, local);
        self.pg.viewport_point_of(world)
    }

    fn swing_seat_point(&self) -> Vec2 {
        let world = self
            .pg
            .frames()
            .local_to_world(Frame::SwingRig, SWING_SEAT_OFFSET + Vec3::Y * RIDE_SEAT_HEIGHT);
        self.pg.viewport_point_of(world)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let locale = match std::env::args().nth(1).as_deref() {
        Some("en") => Locale::English,
        _ => Locale::Korean,
    };
    let mut pg = Playground::new(PlaygroundConfig {
        locale,
        ..PlaygroundConfig::default()
    });
    pg.resize(WIDTH, HEIGHT);
    let mut s = Session { pg, elapsed_ms: 0.0 };

    let heavy = s.pg.spawn_character(CharacterParams {
        height_cm: 182.0,
        weight_kg: 80.0,
        gender: Gender::Male,
    });
    s.report("spawn");
    let outcome = s.drag(heavy, s.plank_point(3.0))?;
    log::info!("[script] {:?}", outcome);
    s.run_frames(180);
    s.report("heavy on right");

    let light = s.pg.spawn_character(CharacterParams {
        height_cm: 150.0,
        weight_kg: 40.0,
        gender: Gender::Female,
    });
    let outcome = s.drag(light, s.plank_point(-4.5))?;
    log::info!("[script] {:?}", outcome);
    s.run_frames(180);
    s.report("both on seesaw");

    let swinger = s.pg.spawn_character(CharacterParams {
        height_cm: 165.0,
        weight_kg: 55.0,
        gender: Gender::Female,
    });
    let outcome = s.drag(swinger, s.swing_seat_point())?;
    log::info!("[script] {:?}", outcome);
    s.run_frames(60);
    s.report("swing joined");

    let push_at = s.swing_seat_point();
    let outcome = s.pg.pointer_down(push_at);
    s.pg.pointer_up(Some(push_at));
    log::info!("[script] {:?}", outcome);
    for second in 1..=3 {
        s.run_frames(60);
        s.report(&format!("swing t+{second}s"));
    }
    Ok(())
}
