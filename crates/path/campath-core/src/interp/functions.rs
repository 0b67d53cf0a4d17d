//! Interpolation helpers:
//! - lerp_f32 / lerp_vec3 (two-key blends, see `CameraPose::lerp`)
//! - cubic_hermite (Hermite basis with endpoint tangents)
//! - catmull_rom_slope (centered finite-difference tangent)
//! - hermite_channel (one scalar channel over a key window)

use super::KeyWindow;

/// `a` at t=0, `b` at t=1. Not clamped, so `t` outside [0,1] extrapolates.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-axis [`lerp_f32`].
#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    std::array::from_fn(|i| lerp_f32(a[i], b[i], t))
}

/// Cubic Hermite between `p1` (t=0) and `p2` (t=1) with tangents `m0`, `m1`.
#[inline]
pub fn cubic_hermite(t: f32, p1: f32, m0: f32, p2: f32, m1: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    (2.0 * t3 - 3.0 * t2 + 1.0) * p1
        + (t3 - 2.0 * t2 + t) * m0
        + (-2.0 * t3 + 3.0 * t2) * p2
        + (t3 - t2) * m1
}

/// Derivative at the middle of three samples, estimated from the outer two.
#[inline]
pub fn catmull_rom_slope(p0: f32, p2: f32, v0: f32, v2: f32) -> f32 {
    (v2 - v0) / (p2 - p0)
}

/// Tangents (m0, m1) for one channel, scaled to the window's span.
/// A missing neighbour yields a zero tangent.
pub fn window_tangents<V>(window: &KeyWindow<'_, V>, channel: impl Fn(&V) -> f32) -> (f32, f32) {
    let dp = window.span();
    let m0 = window.k0.map_or(0.0, |k0| {
        catmull_rom_slope(
            k0.param(),
            window.k2.param(),
            channel(k0.value()),
            channel(window.k2.value()),
        ) * dp
    });
    let m1 = window.k3.map_or(0.0, |k3| {
        catmull_rom_slope(
            window.k1.param(),
            k3.param(),
            channel(window.k1.value()),
            channel(k3.value()),
        ) * dp
    });
    (m0, m1)
}

/// Hermite-interpolate a single scalar channel of the window at local `t`.
pub fn hermite_channel<V>(window: &KeyWindow<'_, V>, t: f32, channel: impl Fn(&V) -> f32) -> f32 {
    let (m0, m1) = window_tangents(window, &channel);
    cubic_hermite(
        t,
        channel(window.k1.value()),
        m0,
        channel(window.k2.value()),
        m1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Keyframe;

    #[test]
    fn hermite_hits_endpoints() {
        assert_eq!(cubic_hermite(0.0, 2.0, 5.0, 7.0, -3.0), 2.0);
        assert_eq!(cubic_hermite(1.0, 2.0, 5.0, 7.0, -3.0), 7.0);
    }

    #[test]
    fn hermite_with_flat_tangents_is_smoothstep() {
        let v = cubic_hermite(0.5, 0.0, 0.0, 1.0, 0.0);
        assert!((v - 0.5).abs() < 1e-6);
        let v = cubic_hermite(0.25, 0.0, 0.0, 1.0, 0.0);
        assert!((v - 0.15625).abs() < 1e-6);
    }

    #[test]
    fn slope_is_centered_difference() {
        assert_eq!(catmull_rom_slope(0.0, 2.0, 1.0, 5.0), 2.0);
    }

    #[test]
    fn tangents_scale_with_span() {
        let k0 = Keyframe::new(0.0, 0.0f32);
        let k1 = Keyframe::new(1.0, 1.0f32);
        let k2 = Keyframe::new(3.0, 3.0f32);
        let k3 = Keyframe::new(4.0, 4.0f32);
        let w = KeyWindow {
            k0: Some(&k0),
            k1: &k1,
            k2: &k2,
            k3: Some(&k3),
        };
        // Unit slope everywhere, span 2.
        let (m0, m1) = window_tangents(&w, |v| *v);
        assert_eq!((m0, m1), (2.0, 2.0));
        let w = KeyWindow { k0: None, k3: None, ..w };
        assert_eq!(window_tangents(&w, |v| *v), (0.0, 0.0));
    }
}
