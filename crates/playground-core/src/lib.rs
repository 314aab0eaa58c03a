pub mod character;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod interaction;
pub mod physics;
pub mod picking;
pub mod playground;
pub mod pose;
pub mod registry;
pub mod state;
pub mod status;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use character::*;
pub use config::*;
pub use constants::*;
pub use error::PlaygroundError;
pub use frame::*;
pub use interaction::*;
pub use physics::*;
pub use picking::*;
pub use playground::*;
pub use pose::*;
pub use registry::*;
pub use state::*;
pub use status::*;
