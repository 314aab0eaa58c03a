use crate::physics::{SeesawParams, SwingParams};
use crate::status::Locale;

/// Runtime parameters for a playground session.
#[derive(Clone, Debug)]
pub struct PlaygroundConfig {
    pub seesaw: SeesawParams,
    pub swing: SwingParams,
    pub locale: Locale,
    /// Seed for cosmetic palettes and spawn positions.
    pub seed: u64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            seesaw: SeesawParams::default(),
            swing: SwingParams::default(),
            locale: Locale::default(),
            seed: 42,
        }
    }
}
