//! Four-key windowed interpolation.
//!
//! Model:
//! - `k1`, `k2` bracket the query; `k0`, `k3` are the keys just outside them.
//! - A bracket whose params are within `param_epsilon` is not interpolated:
//!   `k1`'s value is returned untouched.
//! - An outer neighbour within `param_epsilon` of its inner key is dropped,
//!   since a near-zero denominator would give a wild tangent.

use crate::interp::functions::hermite_channel;
use crate::interp::{KeyWindow, WindowInterpolator};
use crate::sequence::KeyframeSequence;

const DEFAULT_PARAM_EPSILON: f32 = 1e-5;

#[derive(Clone, Debug)]
pub struct CubicPathInterpolator<V, I> {
    keys: KeyframeSequence<V>,
    interpolator: I,
    param_epsilon: f32,
}

impl<V, I> CubicPathInterpolator<V, I>
where
    V: Clone + Default,
    I: WindowInterpolator<V>,
{
    pub fn new(interpolator: I) -> Self {
        Self {
            keys: KeyframeSequence::new(),
            interpolator,
            param_epsilon: DEFAULT_PARAM_EPSILON,
        }
    }

    pub fn with_param_epsilon(mut self, param_epsilon: f32) -> Self {
        self.param_epsilon = param_epsilon;
        self
    }

    #[inline]
    pub fn keys(&self) -> &KeyframeSequence<V> {
        &self.keys
    }

    #[inline]
    pub fn keys_mut(&mut self) -> &mut KeyframeSequence<V> {
        &mut self.keys
    }

    #[inline]
    pub fn interpolator(&self) -> &I {
        &self.interpolator
    }

    #[inline]
    pub fn interpolator_mut(&mut self) -> &mut I {
        &mut self.interpolator
    }

    #[inline]
    fn params_close(&self, a: f32, b: f32) -> bool {
        (a - b).abs() <= self.param_epsilon
    }

    /// Value at `param`, clamped to the end keys outside the keyed range.
    pub fn evaluate(&self, param: f32) -> V {
        let keys = self.keys.as_slice();
        let n = keys.len();
        let lower = match self.keys.find_lower_index(param) {
            _ if n == 0 => return V::default(),
            None => return keys[0].value().clone(),
            Some(i) if i >= n - 1 => return keys[n - 1].value().clone(),
            Some(i) => i,
        };

        let k1 = &keys[lower];
        let k2 = &keys[lower + 1];
        if self.params_close(k1.param(), k2.param()) {
            return k1.value().clone();
        }

        let k0 = lower
            .checked_sub(1)
            .map(|i| &keys[i])
            .filter(|k0| !self.params_close(k0.param(), k1.param()));
        let k3 = keys
            .get(lower + 2)
            .filter(|k3| !self.params_close(k2.param(), k3.param()));

        let window = KeyWindow { k0, k1, k2, k3 };
        let t = (param - k1.param()) / window.span();
        self.interpolator.interpolate(&window, t)
    }
}

/// Catmull-Rom tangents + cubic Hermite per scalar channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hermite;

impl WindowInterpolator<f32> for Hermite {
    fn interpolate(&self, window: &KeyWindow<'_, f32>, t: f32) -> f32 {
        hermite_channel(window, t, |v| *v)
    }
}

impl WindowInterpolator<[f32; 3]> for Hermite {
    fn interpolate(&self, window: &KeyWindow<'_, [f32; 3]>, t: f32) -> [f32; 3] {
        [
            hermite_channel(window, t, |v| v[0]),
            hermite_channel(window, t, |v| v[1]),
            hermite_channel(window, t, |v| v[2]),
        ]
    }
}
