//! A named, editable camera path.
//!
//! Wraps a `CubicPathInterpolator<CameraPose, _>` with the editing operations
//! a recorder UI needs. Indices returned by one call are not stable across
//! another mutating call.

use crate::config::Config;
use crate::interp::CubicPathInterpolator;
use crate::pose::{CameraPose, CameraPoseInterpolator};
use crate::rotation::RotationStrategy;
use crate::sequence::KeyframeSequence;

#[derive(Clone, Debug)]
pub struct CameraPath {
    pub name: String,
    /// Whether playback should apply the evaluated timescale.
    pub scale_time: bool,
    curve: CubicPathInterpolator<CameraPose, CameraPoseInterpolator>,
    cfg: Config,
}

impl Default for CameraPath {
    fn default() -> Self {
        Self::new("")
    }
}

impl CameraPath {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, Config::default())
    }

    pub fn with_config(name: impl Into<String>, cfg: Config) -> Self {
        let curve = CubicPathInterpolator::new(CameraPoseInterpolator::default())
            .with_param_epsilon(cfg.param_epsilon);
        Self {
            name: name.into(),
            scale_time: false,
            curve,
            cfg,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    #[inline]
    pub fn rotation(&self) -> RotationStrategy {
        self.curve.interpolator().rotation
    }

    pub fn set_rotation(&mut self, rotation: RotationStrategy) {
        self.curve.interpolator_mut().rotation = rotation;
    }

    #[inline]
    pub fn keys(&self) -> &KeyframeSequence<CameraPose> {
        self.curve.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.curve.keys().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curve.keys().is_empty()
    }

    #[inline]
    pub fn min_time(&self) -> f32 {
        self.curve.keys().min_param()
    }

    #[inline]
    pub fn max_time(&self) -> f32 {
        self.curve.keys().max_param()
    }

    /// Panics if `time` is NaN or infinite.
    pub fn add_key(&mut self, time: f32, pose: CameraPose) -> usize {
        self.curve.keys_mut().add_key(time, pose)
    }

    /// Append `pose` after the last key, spaced by `Config::append_spacing`.
    /// The new key inherits the last key's timescale (or the configured
    /// default on an empty path); `pose.timescale` is ignored.
    pub fn add_key_to_end(&mut self, pose: CameraPose) -> usize {
        let keys = self.curve.keys();
        let (time, timescale) = match keys.len() {
            0 => (0.0, self.cfg.default_timescale),
            n => (
                keys.max_param() + self.cfg.append_spacing,
                keys.value_at(n - 1).timescale,
            ),
        };
        self.add_key(time, CameraPose { timescale, ..pose })
    }

    /// Copy of the pose at `index`.
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn pose_at(&self, index: usize) -> CameraPose {
        self.curve.keys().value_at(index)
    }

    /// Replace the pose at `index`, keeping its time.
    ///
    /// Panics if `index` is out of range.
    pub fn set_pose(&mut self, index: usize, pose: CameraPose) {
        self.curve.keys_mut().set_value(index, pose);
    }

    /// Panics if `index` is out of range.
    #[inline]
    pub fn time_at(&self, index: usize) -> f32 {
        self.curve.keys().param_at(index)
    }

    /// Retime the key at `index`. Returns its new index.
    ///
    /// Panics if `index` is out of range or `time` is not finite.
    pub fn move_key_at(&mut self, index: usize, time: f32) -> usize {
        self.curve.keys_mut().move_key_at(index, time)
    }

    pub fn remove_key(&mut self, index: usize) -> CameraPose {
        self.curve.keys_mut().remove_at(index).into_value()
    }

    /// Pose at `time`, clamped to the first/last key outside the keyed range.
    #[inline]
    pub fn evaluate(&self, time: f32) -> CameraPose {
        self.curve.evaluate(time)
    }

    /// Positions resampled every `Config::preview_step` seconds from the
    /// first to the last key, for drawing the path. Call again after edits.
    ///
    /// At most `Config::max_preview_points` samples are taken; past that the
    /// step is widened so the samples still span the whole path.
    pub fn preview_positions(&self) -> Vec<[f32; 3]> {
        let mut step = self.cfg.preview_step;
        let (min, max) = (self.min_time(), self.max_time());
        if step.is_nan() || step <= 0.0 || max <= min {
            return Vec::new();
        }
        let mut count = ((max - min) / step) as usize;
        let cap = self.cfg.max_preview_points;
        if count > cap {
            log::debug!("preview of '{}' capped at {cap} points (step {step})", self.name);
            count = cap;
            step = (max - min) / cap as f32;
        }
        (0..count)
            .map(|i| self.evaluate(min + i as f32 * step).position)
            .collect()
    }
}
