//! Camera pose payload and its four-key interpolator.

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::interp::functions::{hermite_channel, lerp_f32, lerp_vec3};
use crate::interp::{KeyWindow, WindowInterpolator};
use crate::quat::{self, IDENTITY};
use crate::rotation::RotationStrategy;

/// A recorded camera viewpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: [f32; 3],
    /// Unit quaternion (x, y, z, w)
    pub rotation: [f32; 4],
    /// Simulation speed multiplier while this pose is active; never negative.
    pub timescale: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: IDENTITY,
            timescale: 1.0,
        }
    }
}

impl CameraPose {
    pub fn new(position: [f32; 3], rotation: [f32; 4], timescale: f32) -> Self {
        Self {
            position,
            rotation,
            timescale,
        }
    }

    /// Two-key blend: linear position and timescale, shortest-arc slerp for
    /// the rotation. Usable directly as a [`Blend`](crate::interp::Blend)
    /// with `PairBlendInterpolator`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: lerp_vec3(self.position, other.position, t),
            rotation: quat::slerp(self.rotation, other.rotation, t),
            timescale: lerp_f32(self.timescale, other.timescale, t).max(0.0),
        }
    }

    /// Express a world-space camera transform relative to a reference frame
    /// (typically the vessel or object the path follows).
    pub fn relative_to(
        position: [f32; 3],
        rotation: [f32; 4],
        ref_position: [f32; 3],
        ref_rotation: [f32; 4],
        timescale: f32,
    ) -> Self {
        let inv_ref = UnitQuaternion::new_normalize(quat::to_quaternion(ref_rotation)).inverse();
        let offset = Vector3::from(position) - Vector3::from(ref_position);
        let local_pos = inv_ref * offset;
        let local_rot = inv_ref * UnitQuaternion::new_normalize(quat::to_quaternion(rotation));
        Self {
            position: local_pos.into(),
            rotation: quat::from_quaternion(local_rot.quaternion()),
            timescale,
        }
    }
}

/// Hermite position/timescale channels plus a selectable rotation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraPoseInterpolator {
    pub rotation: RotationStrategy,
}

impl CameraPoseInterpolator {
    pub fn new(rotation: RotationStrategy) -> Self {
        Self { rotation }
    }
}

impl WindowInterpolator<CameraPose> for CameraPoseInterpolator {
    fn interpolate(&self, window: &KeyWindow<'_, CameraPose>, t: f32) -> CameraPose {
        let position = [
            hermite_channel(window, t, |p| p.position[0]),
            hermite_channel(window, t, |p| p.position[1]),
            hermite_channel(window, t, |p| p.position[2]),
        ];
        let rotation = self.rotation.interpolate(window, t, |p| p.rotation);
        let timescale = hermite_channel(window, t, |p| p.timescale).max(0.0);
        CameraPose {
            position,
            rotation,
            timescale,
        }
    }
}
