use approx::assert_abs_diff_eq;
use campath_core::{CameraPath, CameraPose, CubicPathInterpolator, Hermite};

fn mk_curve(keys: &[(f32, f32)]) -> CubicPathInterpolator<f32, Hermite> {
    let mut c = CubicPathInterpolator::new(Hermite);
    for (p, v) in keys {
        c.keys_mut().add_key(*p, *v);
    }
    c
}

fn pose_ts(timescale: f32) -> CameraPose {
    CameraPose::new([timescale, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0], timescale)
}

#[test]
fn clamps_outside_keyed_range() {
    let c = mk_curve(&[(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);
    assert_eq!(c.evaluate(-5.0), 10.0);
    assert_eq!(c.evaluate(1.0), 10.0);
    assert_eq!(c.evaluate(3.0), 30.0);
    assert_eq!(c.evaluate(7.5), 30.0);
}

#[test]
fn passes_through_every_key() {
    let keys = [(0.0, 3.0), (0.5, -1.0), (2.0, 4.0), (2.25, 4.5), (6.0, 0.0)];
    let c = mk_curve(&keys);
    for (p, v) in keys {
        assert_eq!(c.evaluate(p), v, "key at {p}");
    }
}

#[test]
fn linear_data_stays_linear_between_interior_keys() {
    // Uneven spacing: the centered slope of linear data is still its slope.
    let c = mk_curve(&[(0.0, 0.0), (1.0, 2.0), (3.0, 6.0), (4.0, 8.0)]);
    for q in [1.25, 1.5, 2.0, 2.5, 2.9] {
        assert_abs_diff_eq!(c.evaluate(q), 2.0 * q, epsilon = 1e-5);
    }
}

#[test]
fn missing_outer_neighbour_gives_flat_tangent() {
    let c = mk_curve(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    // First segment: m0 = 0, m1 = 1.
    assert_abs_diff_eq!(c.evaluate(0.5), 0.375, epsilon = 1e-6);
    // Last segment mirrors it: m0 = 1, m1 = 0.
    assert_abs_diff_eq!(c.evaluate(1.5), 1.625, epsilon = 1e-6);
}

#[test]
fn two_keys_ease_in_and_out() {
    let c = mk_curve(&[(0.0, 0.0), (2.0, 1.0)]);
    assert_abs_diff_eq!(c.evaluate(1.0), 0.5, epsilon = 1e-6);
    assert!(c.evaluate(0.2) < 0.1);
    assert!(c.evaluate(1.8) > 0.9);
}

#[test]
fn degenerate_bracket_returns_lower_key() {
    let c = mk_curve(&[(0.0, 0.0), (1.0 - 1e-6, 100.0), (1.0, 1.0), (2.0, 2.0)]);
    let v = c.evaluate(0.9999995);
    assert!(v.is_finite());
    assert_eq!(v, 100.0);
}

#[test]
fn near_duplicate_neighbour_is_dropped() {
    let c = mk_curve(&[
        (0.0, 0.0),
        (1.0 - 1e-6, 100.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (3.0, 3.0),
    ]);
    // The key just below 1.0 is ignored as k0, so m0 = 0 and m1 = 1.
    let v = c.evaluate(1.5);
    assert!(v.is_finite());
    assert_abs_diff_eq!(v, 1.375, epsilon = 1e-5);
}

#[test]
fn identical_params_stay_finite() {
    let c = mk_curve(&[(0.0, 0.0), (1.0, 5.0), (1.0, 6.0), (2.0, 7.0)]);
    let mut q = -0.5;
    while q <= 2.5 {
        assert!(c.evaluate(q).is_finite(), "query {q}");
        q += 0.05;
    }
    // Ties resolve to the last equal key.
    assert_eq!(c.evaluate(1.0), 6.0);
}

#[test]
fn repeated_evaluation_is_identical() {
    let c = mk_curve(&[(0.0, 1.0), (1.0, 3.0), (2.5, -2.0), (4.0, 0.0)]);
    for q in [-1.0, 0.3, 1.7, 2.5, 3.9, 8.0] {
        assert_eq!(c.evaluate(q).to_bits(), c.evaluate(q).to_bits());
    }
}

#[test]
fn vec3_channels_are_independent() {
    let mut c = CubicPathInterpolator::new(Hermite);
    c.keys_mut().add_key(0.0, [0.0, 10.0, -1.0]);
    c.keys_mut().add_key(1.0, [1.0, 10.0, -2.0]);
    c.keys_mut().add_key(2.0, [2.0, 10.0, -3.0]);
    c.keys_mut().add_key(3.0, [3.0, 10.0, -4.0]);
    let v = c.evaluate(1.5);
    assert_abs_diff_eq!(v[0], 1.5, epsilon = 1e-6);
    assert_eq!(v[1], 10.0);
    assert_abs_diff_eq!(v[2], -2.5, epsilon = 1e-6);
}

#[test]
fn timescale_is_never_negative() {
    let mut path = CameraPath::new("ts");
    path.add_key(0.0, pose_ts(0.0));
    path.add_key(1.0, pose_ts(10.0));
    path.add_key(2.0, pose_ts(0.0));
    path.add_key(3.0, pose_ts(0.0));

    // The position channel carries the same data and does overshoot below zero.
    let overshoot = path.evaluate(2.25);
    assert!(overshoot.position[0] < 0.0);
    assert_eq!(overshoot.timescale, 0.0);

    let mut q = 0.0;
    while q <= 3.0 {
        assert!(path.evaluate(q).timescale >= 0.0, "query {q}");
        q += 0.05;
    }
}

#[test]
fn sub_epsilon_bracket_near_zero_returns_lower_key() {
    let c = mk_curve(&[(0.0, 5.0), (5e-8, 7.0), (1.0, 9.0), (2.0, 11.0)]);
    let v = c.evaluate(2.5e-8);
    assert!(v.is_finite());
    assert_eq!(v, 5.0);
    // From the second key on, the coincident first key is not used as k0.
    let v = c.evaluate(0.5);
    assert!(v.is_finite());
    assert!((7.0..=9.0).contains(&v), "v={v}");
}
