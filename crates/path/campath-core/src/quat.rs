//! Quaternion helpers on `[x, y, z, w]` arrays.
//!
//! Storage stays in plain arrays (serde-friendly, `Copy`); the algebra goes
//! through `nalgebra::Quaternion`. Inputs are expected to be unit length.

use nalgebra::{Quaternion, Vector3};

pub const IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Above this |dot| two rotations are treated as parallel and blended linearly.
const PARALLEL_DOT: f32 = 0.9995;
const LOG_EPS: f32 = 1e-6;

#[inline]
pub fn to_quaternion(q: [f32; 4]) -> Quaternion<f32> {
    Quaternion::new(q[3], q[0], q[1], q[2])
}

#[inline]
pub fn from_quaternion(q: &Quaternion<f32>) -> [f32; 4] {
    [q.i, q.j, q.k, q.w]
}

#[inline]
pub fn dot(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
pub fn negate(q: [f32; 4]) -> [f32; 4] {
    [-q[0], -q[1], -q[2], -q[3]]
}

/// Unit-length copy of `q`; a zero quaternion maps to identity.
#[inline]
pub fn normalize(q: [f32; 4]) -> [f32; 4] {
    let len2 = dot(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        [q[0] * inv_len, q[1] * inv_len, q[2] * inv_len, q[3] * inv_len]
    } else {
        IDENTITY
    }
}

/// `q` or `-q`, whichever lies in the same hemisphere as `reference`.
/// Both represent the same rotation.
#[inline]
pub fn align(q: [f32; 4], reference: [f32; 4]) -> [f32; 4] {
    if dot(q, reference) < 0.0 {
        negate(q)
    } else {
        q
    }
}

/// Log of a unit quaternion, as the pure-imaginary part (half-angle * axis).
fn ln_unit(q: &Quaternion<f32>) -> Vector3<f32> {
    let v = q.imag();
    let n = v.norm();
    if n < LOG_EPS {
        Vector3::zeros()
    } else {
        v * (n.atan2(q.w) / n)
    }
}

/// Exp of a pure-imaginary quaternion.
fn exp_pure(v: &Vector3<f32>) -> Quaternion<f32> {
    let theta = v.norm();
    if theta < LOG_EPS {
        Quaternion::from_parts(1.0, *v)
    } else {
        Quaternion::from_parts(theta.cos(), v * (theta.sin() / theta))
    }
}

#[inline]
fn nlerp(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    normalize([
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ])
}

/// Spherical interpolation along the great arc from `a` to `b` as given,
/// without flipping `b` into `a`'s hemisphere.
pub fn slerp_no_invert(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let d = dot(a, b).clamp(-1.0, 1.0);
    if d > PARALLEL_DOT {
        return nlerp(a, b, t);
    }
    if d < -PARALLEL_DOT {
        // `b` is (nearly) `-a`: same rotation, the great arc is undefined.
        return nlerp(a, negate(b), t);
    }
    let theta = d.acos();
    let inv_sin = theta.sin().recip();
    let wa = ((1.0 - t) * theta).sin() * inv_sin;
    let wb = (t * theta).sin() * inv_sin;
    [
        wa * a[0] + wb * b[0],
        wa * a[1] + wb * b[1],
        wa * a[2] + wb * b[2],
        wa * a[3] + wb * b[3],
    ]
}

/// Shortest-arc spherical linear interpolation.
#[inline]
pub fn slerp(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    slerp_no_invert(a, align(b, a), t)
}

/// Squad control quaternion at `cur` given its neighbours:
/// `cur * exp(-(ln(cur^-1 prev) + ln(cur^-1 next)) / 4)`.
pub fn squad_tangent(prev: [f32; 4], cur: [f32; 4], next: [f32; 4]) -> [f32; 4] {
    let c = to_quaternion(cur);
    let inv = c.conjugate();
    let to_prev = inv * to_quaternion(align(prev, cur));
    let to_next = inv * to_quaternion(align(next, cur));
    let l = (ln_unit(&to_prev) + ln_unit(&to_next)) * -0.25;
    normalize(from_quaternion(&(c * exp_pure(&l))))
}

/// Spherical quadrangle interpolation from `q1` to `q2` with control
/// quaternions `s1`, `s2`.
pub fn squad(t: f32, q1: [f32; 4], q2: [f32; 4], s1: [f32; 4], s2: [f32; 4]) -> [f32; 4] {
    let outer = slerp_no_invert(q1, q2, t);
    let inner = slerp_no_invert(s1, s2, t);
    slerp_no_invert(outer, inner, 2.0 * t * (1.0 - t))
}
