//! Error types for gesture classification.

use crate::landmarks::HAND_LANDMARK_COUNT;

/// Errors raised while validating input or building a classifier.
#[derive(Debug, thiserror::Error)]
pub enum GestureError {
    #[error("Expected at least {expected} landmarks, got {actual}")]
    InsufficientLandmarks { expected: usize, actual: usize },

    #[error("Landmark {index} has {actual} coordinates, at least 2 are required")]
    MissingCoordinates { index: usize, actual: usize },

    #[error("Landmark {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("Landmark {index} is too far from the palm center to measure")]
    NonFiniteFeature { index: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Confidence threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GestureError {
    pub(crate) fn insufficient(actual: usize) -> Self {
        Self::InsufficientLandmarks {
            expected: HAND_LANDMARK_COUNT,
            actual,
        }
    }
}

pub type Result<T> = std::result::Result<T, GestureError>;
