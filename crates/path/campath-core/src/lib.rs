//! Campath Core (engine-agnostic)
//!
//! Keyframe storage and interpolation for recorded camera paths. A path is a
//! sorted sequence of `(param, value)` keyframes; evaluation reconstructs a
//! continuous curve through them, either by blending the two bracketing keys
//! or by cubic Hermite interpolation over a four-key window with a selectable
//! rotation strategy.
//!
//! Scene-graph posing, rendering and input are left to adapters: they consume
//! the evaluated [`CameraPose`] and feed edits back through [`CameraPath`].

pub mod config;
pub mod error;
pub mod interp;
pub mod library;
pub mod path;
pub mod pose;
pub mod quat;
pub mod rotation;
pub mod runner;
pub mod sequence;
pub mod stored_path;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use error::PathError;
pub use interp::{
    Blend, CubicPathInterpolator, Hermite, KeyWindow, PairBlendInterpolator, WindowInterpolator,
};
pub use library::PathLibrary;
pub use path::CameraPath;
pub use pose::{CameraPose, CameraPoseInterpolator};
pub use rotation::RotationStrategy;
pub use runner::PathRunner;
pub use sequence::{Keyframe, KeyframeSequence};
pub use stored_path::{load_stored_path, parse_stored_path_json, save_stored_path, stored_path_json};

/// Campath result type
pub type Result<T> = core::result::Result<T, PathError>;
