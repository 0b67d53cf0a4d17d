//! Interpolators over a [`KeyframeSequence`](crate::sequence::KeyframeSequence).
//!
//! - `PairBlendInterpolator`: locate the two bracketing keys and hand them to a
//!   [`Blend`] with a local `t` in [0,1].
//! - `CubicPathInterpolator`: locate up to four keys around the query and hand a
//!   [`KeyWindow`] to a [`WindowInterpolator`] (Catmull-Rom tangents + Hermite).
//!
//! Both clamp to the first/last key outside the keyed range and keep no state
//! besides the sequence itself, so edits show up on the next query.

pub mod cubic;
pub mod functions;
pub mod pair;

pub use cubic::{CubicPathInterpolator, Hermite};
pub use pair::PairBlendInterpolator;

use crate::sequence::Keyframe;

/// Two-value blend used by [`PairBlendInterpolator`].
pub trait Blend<V> {
    /// `t` is 0 at `a` and 1 at `b`.
    fn blend(&self, a: &V, b: &V, t: f32) -> V;
}

impl<V, F> Blend<V> for F
where
    F: Fn(&V, &V, f32) -> V,
{
    #[inline]
    fn blend(&self, a: &V, b: &V, t: f32) -> V {
        self(a, b, t)
    }
}

/// Keys surrounding a query: `k1`/`k2` bracket it, `k0`/`k3` are the outer
/// neighbours when they exist and are not (near-)coincident with `k1`/`k2`.
#[derive(Debug)]
pub struct KeyWindow<'a, V> {
    pub k0: Option<&'a Keyframe<V>>,
    pub k1: &'a Keyframe<V>,
    pub k2: &'a Keyframe<V>,
    pub k3: Option<&'a Keyframe<V>>,
}

impl<V> Clone for KeyWindow<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for KeyWindow<'_, V> {}

impl<V> KeyWindow<'_, V> {
    /// Param span of the bracketing pair.
    #[inline]
    pub fn span(&self) -> f32 {
        self.k2.param() - self.k1.param()
    }
}

/// Evaluates a value from a four-key window at local `t` in [0,1].
pub trait WindowInterpolator<V> {
    fn interpolate(&self, window: &KeyWindow<'_, V>, t: f32) -> V;
}
