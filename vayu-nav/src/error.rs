//! Error types for VayuNav

use thiserror::Error;

use crate::core::GeoPoint;

/// Reasons a navigation leg can fail.
///
/// These are expected outcomes of a flight, not faults: the navigator stops
/// the leg, keeps everything recorded so far and reports the cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    #[error("Move budget of {budget} exhausted at {position}")]
    OutOfMoves { budget: u32, position: GeoPoint },

    #[error("No legal move towards {target} from {position}")]
    Obstructed { position: GeoPoint, target: GeoPoint },
}

impl NavError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OutOfMoves { .. } => "OUT_OF_MOVES",
            Self::Obstructed { .. } => "OBSTRUCTED",
        }
    }
}

/// A heading that is not a multiple of 10 in [0, 350].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid bearing {0}: must be a multiple of 10 between 0 and 350")]
pub struct InvalidBearing(pub i32);

/// Config load error
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigLoadError {
    fn from(e: toml::de::Error) -> Self {
        ConfigLoadError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
