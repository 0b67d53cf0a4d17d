//! Error types for path persistence and library management.
//!
//! Evaluation and keyframe editing never fail; only the surfaces that deal
//! with external input (stored paths, caller-supplied indices into the
//! library) report errors.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PathError {
    /// Malformed JSON or a value of the wrong shape
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Reading or writing a stored path failed
    #[error("IO error: {reason}")]
    IoError { reason: String },

    /// A stored keyframe param that cannot be ordered
    #[error("Invalid param {param} for point {index}")]
    InvalidParam { index: usize, param: f32 },

    /// Index past the end of a collection
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl PathError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::SerializationError { .. } => "serialization",
            Self::IoError { .. } => "io",
            Self::InvalidParam { .. } => "validation",
            Self::IndexOutOfRange { .. } => "index",
        }
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PathError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
