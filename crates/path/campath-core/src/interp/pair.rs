use crate::config::Config;
use crate::interp::Blend;
use crate::sequence::KeyframeSequence;

const DEFAULT_SPAN_EPSILON: f32 = 1e-7;

/// Blends the two keys bracketing a query param.
#[derive(Clone, Debug)]
pub struct PairBlendInterpolator<V, B> {
    keys: KeyframeSequence<V>,
    blend: B,
    span_epsilon: f32,
}

impl<V, B> PairBlendInterpolator<V, B>
where
    V: Clone + Default,
    B: Blend<V>,
{
    pub fn new(blend: B) -> Self {
        Self {
            keys: KeyframeSequence::new(),
            blend,
            span_epsilon: DEFAULT_SPAN_EPSILON,
        }
    }

    /// Build with the span guard taken from `cfg.blend_span_epsilon`.
    pub fn with_config(blend: B, cfg: &Config) -> Self {
        Self::new(blend).with_span_epsilon(cfg.blend_span_epsilon)
    }

    /// Override the minimum bracket span used as divisor.
    pub fn with_span_epsilon(mut self, span_epsilon: f32) -> Self {
        self.span_epsilon = span_epsilon;
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

    /// Value at `param`. Outside the keyed range the nearest end key is
    /// returned as-is; an empty sequence yields `V::default()`.
    pub fn evaluate(&self, param: f32) -> V {
        let keys = self.keys.as_slice();
        let n = keys.len();
        let lower = match self.keys.find_lower_index(param) {
            _ if n == 0 => return V::default(),
            None => return keys[0].value().clone(),
            Some(i) if i >= n - 1 => return keys[n - 1].value().clone(),
            Some(i) => i,
        };

        let (a, b) = (&keys[lower], &keys[lower + 1]);
        // Keys that are very close together would blow up the division.
        let range = (b.param() - a.param()).max(self.span_epsilon);
        let t = (param - a.param()) / range;

        self.blend.blend(a.value(), b.value(), t)
    }
}
