use crate::registry::CharacterId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaygroundError {
    #[error("no character registered with id {0:?}")]
    UnknownCharacter(CharacterId),
    #[error("unknown gender {0:?}, expected \"male\" or \"female\"")]
    UnknownGender(String),
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
