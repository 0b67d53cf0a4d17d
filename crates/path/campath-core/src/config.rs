//! Tunables shared by paths, interpolators and the preview sampler.

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Numeric guards and editing defaults.
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Smallest bracket span the pair-blend interpolator divides by.
    pub blend_span_epsilon: f32,
    /// Params closer than this are treated as coincident by the cubic
    /// interpolator (degenerate span, dropped neighbours).
    pub param_epsilon: f32,

    /// Time step used when resampling a path for its drawn preview.
    pub preview_step: f32,
    /// Upper bound on preview samples; a smaller step is widened to fit.
    pub max_preview_points: usize,
    /// Gap in seconds placed between the last key and a key appended to the end.
    pub append_spacing: f32,
    /// Timescale given to the first key of an empty path.
    pub default_timescale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blend_span_epsilon: 1e-7,
            param_epsilon: 1e-5,
            preview_step: 0.1,
            max_preview_points: 100_000,
            append_spacing: 5.0,
            default_timescale: 1.0,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config document.
    pub fn from_json(s: &str) -> Result<Self, PathError> {
        Ok(serde_json::from_str(s)?)
    }
}
