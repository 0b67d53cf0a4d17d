//! Frame-stepped playback of a camera path.
//!
//! The runner owns only playback state (time, running, paused); the path is
//! borrowed per tick, so edits made between ticks are picked up immediately.

use crate::path::CameraPath;
use crate::pose::CameraPose;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathRunner {
    current_time: f32,
    running: bool,
    paused: bool,
}

impl PathRunner {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    /// Start playback from the beginning.
    pub fn start(&mut self) {
        log::debug!("runner: start");
        self.running = true;
        self.current_time = 0.0;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("runner: stop at {:.2}s", self.current_time);
        }
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Scrub to `time`, clamped to the path's `[0, max_time]`.
    pub fn set_current_time(&mut self, path: &CameraPath, time: f32) {
        self.current_time = time.clamp(0.0, path.max_time().max(0.0));
    }

    /// Advance by `dt` seconds (unless paused) and return the pose to apply,
    /// or `None` when not running. Reaching the end yields the final pose and
    /// stops playback. Without `scale_time` the timescale is reported as 1.
    pub fn tick(&mut self, path: &CameraPath, dt: f32) -> Option<CameraPose> {
        if !self.running {
            return None;
        }
        if !self.paused {
            self.current_time += dt;
        }
        let end = path.max_time();
        if self.current_time >= end && !self.paused {
            self.current_time = end;
            log::debug!("runner: reached end of '{}' at {:.2}s", path.name, end);
            self.running = false;
        }

        let mut pose = path.evaluate(self.current_time);
        if !path.scale_time {
            pose.timescale = 1.0;
        }
        Some(pose)
    }
}
