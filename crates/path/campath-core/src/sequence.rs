//! Sorted keyframe storage.
//!
//! `KeyframeSequence` keeps its keys ascending by param at all times, so the
//! only way to retime a key is [`KeyframeSequence::move_key_at`]. Keys with
//! equal params are allowed; a new key is always inserted after every
//! existing key with the same param. Params must be finite.

use serde::{Deserialize, Deserializer, Serialize};

/// A single `(param, value)` sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<V> {
    param: f32,
    value: V,
}

impl<V> Keyframe<V> {
    #[inline]
    pub fn new(param: f32, value: V) -> Self {
        Self { param, value }
    }

    #[inline]
    pub fn param(&self) -> f32 {
        self.param
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }
}

/// Keyframes kept sorted ascending by param.
///
/// Deserializing re-inserts every key, so documents with keys out of order
/// still produce a sorted sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyframeSequence<V> {
    keys: Vec<Keyframe<V>>,
}

impl<V> Default for KeyframeSequence<V> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for KeyframeSequence<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw<V> {
            keys: Vec<Keyframe<V>>,
        }
        let raw = Raw::<V>::deserialize(deserializer)?;
        if let Some(k) = raw.keys.iter().find(|k| !k.param.is_finite()) {
            return Err(serde::de::Error::custom(format!(
                "keyframe param must be finite, got {}",
                k.param
            )));
        }
        Ok(raw.keys.into_iter().collect())
    }
}

impl<V> FromIterator<Keyframe<V>> for KeyframeSequence<V> {
    /// Inserts in iteration order with [`KeyframeSequence::add_key`].
    fn from_iter<I: IntoIterator<Item = Keyframe<V>>>(iter: I) -> Self {
        let mut seq = Self::new();
        for k in iter {
            seq.add_key(k.param, k.value);
        }
        seq
    }
}

impl<V> KeyframeSequence<V> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Param of the first key, or 0 when empty.
    #[inline]
    pub fn min_param(&self) -> f32 {
        self.keys.first().map_or(0.0, |k| k.param)
    }

    /// Param of the last key, or 0 when empty.
    #[inline]
    pub fn max_param(&self) -> f32 {
        self.keys.last().map_or(0.0, |k| k.param)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Keyframe<V>> {
        self.keys.get(index)
    }

    /// Param of the key at `index`.
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn param_at(&self, index: usize) -> f32 {
        self.checked(index).param
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Keyframe<V>] {
        &self.keys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe<V>> {
        self.keys.iter()
    }

    /// Insert a key, keeping the sequence sorted. Returns the index it landed at.
    ///
    /// Panics if `param` is NaN or infinite.
    pub fn add_key(&mut self, param: f32, value: V) -> usize {
        assert_finite(param);
        let index = self.find_lower_index(param).map_or(0, |lower| lower + 1);
        self.keys.insert(index, Keyframe::new(param, value));
        index
    }

    /// Highest index whose param is `<= param`, or `None` when `param`
    /// precedes the first key (or the sequence is empty).
    pub fn find_lower_index(&self, param: f32) -> Option<usize> {
        let mut upper = self.keys.len().checked_sub(1)?;
        let mut lower = 0;
        if param >= self.keys[upper].param {
            return Some(upper);
        }
        if param < self.keys[lower].param {
            return None;
        }
        // keys[lower].param <= param < keys[upper].param
        while upper - lower > 1 {
            let mid = lower + (upper - lower) / 2;
            if param < self.keys[mid].param {
                upper = mid;
            } else {
                // Equal params keep searching upward so ties resolve to the last one.
                lower = mid;
            }
        }
        Some(lower)
    }

    /// Remove the key at `index`; later keys shift down by one.
    ///
    /// Panics if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Keyframe<V> {
        self.checked(index);
        self.keys.remove(index)
    }

    /// Retime the key at `index`. Returns its new index.
    ///
    /// Panics if `index` is out of range or `param` is not finite; the
    /// sequence is left untouched in both cases.
    pub fn move_key_at(&mut self, index: usize, param: f32) -> usize {
        assert_finite(param);
        let key = self.remove_at(index);
        self.add_key(param, key.into_value())
    }

    /// Replace the value stored at `index`, keeping its param.
    ///
    /// Panics if `index` is out of range.
    pub fn set_value(&mut self, index: usize, value: V) {
        self.checked(index);
        self.keys[index].value = value;
    }

    #[inline]
    fn checked(&self, index: usize) -> &Keyframe<V> {
        let len = self.keys.len();
        assert!(index < len, "keyframe index {index} out of range (len {len})");
        &self.keys[index]
    }
}

#[inline]
fn assert_finite(param: f32) {
    assert!(param.is_finite(), "keyframe param must be finite, got {param}");
}

impl<V: Clone> KeyframeSequence<V> {
    /// Copy of the key at `index`.
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn key(&self, index: usize) -> Keyframe<V> {
        self.checked(index).clone()
    }

    /// Copy of the value at `index`. Write changes back with [`Self::set_value`].
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn value_at(&self, index: usize) -> V {
        self.checked(index).value.clone()
    }
}
