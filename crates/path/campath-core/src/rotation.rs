//! Rotation interpolation strategies for a four-key window.

use serde::{Deserialize, Deserializer, Serialize};

use crate::interp::functions::hermite_channel;
use crate::interp::KeyWindow;
use crate::quat::{self, IDENTITY};

/// How the orientation channel is interpolated. Persisted with the path by
/// tag; unknown tags read back as `Slerp`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RotationStrategy {
    /// Shortest-arc slerp between the bracketing keys; ignores the outer keys.
    #[default]
    Slerp,
    /// Spherical quadrangle interpolation with tangents from the outer keys.
    Squad,
    /// Cubic Hermite on each quaternion component, not renormalized.
    /// Leaves the unit sphere between keys, so rotations look odd; kept for
    /// comparison only.
    Component,
}

impl RotationStrategy {
    pub const ALL: [RotationStrategy; 3] = [Self::Slerp, Self::Squad, Self::Component];

    /// Name used in stored paths.
    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Slerp => "Slerp",
            Self::Squad => "Squad",
            Self::Component => "Component",
        }
    }

    /// Parse a stored tag (case-insensitive). `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "slerp" => Some(Self::Slerp),
            "squad" | "sphericalquadrangle" => Some(Self::Squad),
            "component" | "componenthermite" => Some(Self::Component),
            _ => None,
        }
    }

    /// Like [`Self::from_tag`], but unknown tags fall back to `Slerp`.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            log::warn!("unhandled rotation type '{tag}', falling back to Slerp");
            Self::Slerp
        })
    }

    /// Interpolated orientation of the window at local `t`.
    pub fn interpolate<V>(
        self,
        window: &KeyWindow<'_, V>,
        t: f32,
        rotation: impl Fn(&V) -> [f32; 4],
    ) -> [f32; 4] {
        match self {
            Self::Slerp => quat::slerp(rotation(window.k1.value()), rotation(window.k2.value()), t),
            Self::Squad => squad_window(window, t, &rotation),
            Self::Component => [
                hermite_channel(window, t, |v| rotation(v)[0]),
                hermite_channel(window, t, |v| rotation(v)[1]),
                hermite_channel(window, t, |v| rotation(v)[2]),
                hermite_channel(window, t, |v| rotation(v)[3]),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for RotationStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag_or_default(&tag))
    }
}

fn squad_window<V>(
    window: &KeyWindow<'_, V>,
    t: f32,
    rotation: &impl Fn(&V) -> [f32; 4],
) -> [f32; 4] {
    let q1 = rotation(window.k1.value());
    let q2 = quat::align(rotation(window.k2.value()), q1);

    // Missing neighbours contribute an identity control quaternion.
    let s1 = window
        .k0
        .map(|k0| quat::squad_tangent(rotation(k0.value()), q1, q2))
        .unwrap_or(IDENTITY);
    let s2 = window
        .k3
        .map(|k3| quat::squad_tangent(q1, q2, rotation(k3.value())))
        .unwrap_or(IDENTITY);

    quat::squad(t, q1, q2, quat::align(s1, q1), quat::align(s2, q2))
}
