use approx::assert_abs_diff_eq;
use campath_core::quat::{self, IDENTITY};
use campath_core::{CameraPath, CameraPose, RotationStrategy};

fn rot_z(degrees: f32) -> [f32; 4] {
    let h = degrees.to_radians() * 0.5;
    [0.0, 0.0, h.sin(), h.cos()]
}

fn norm4(q: [f32; 4]) -> f32 {
    quat::dot(q, q).sqrt()
}

fn assert_same_rotation(a: [f32; 4], b: [f32; 4]) {
    assert!(quat::dot(a, b).abs() > 1.0 - 1e-5, "a={a:?} b={b:?}");
}

fn mk_path(strategy: RotationStrategy, keys: &[(f32, [f32; 4])]) -> CameraPath {
    let mut path = CameraPath::new("rot");
    path.set_rotation(strategy);
    for (i, (t, r)) in keys.iter().enumerate() {
        path.add_key(*t, CameraPose::new([i as f32, 0.0, 0.0], *r, 1.0));
    }
    path
}

fn uniform_turn(strategy: RotationStrategy) -> CameraPath {
    mk_path(
        strategy,
        &[
            (0.0, rot_z(0.0)),
            (1.0, rot_z(45.0)),
            (2.0, rot_z(90.0)),
            (3.0, rot_z(135.0)),
        ],
    )
}

#[test]
fn every_strategy_hits_the_keys() {
    for strategy in RotationStrategy::ALL {
        let path = uniform_turn(strategy);
        for i in 0..path.len() {
            let r = path.evaluate(path.time_at(i)).rotation;
            assert_same_rotation(r, path.pose_at(i).rotation);
        }
    }
}

#[test]
fn slerp_midpoint() {
    let path = mk_path(RotationStrategy::Slerp, &[(0.0, IDENTITY), (2.0, rot_z(90.0))]);
    let r = path.evaluate(1.0).rotation;
    assert_same_rotation(r, rot_z(45.0));
    assert_abs_diff_eq!(norm4(r), 1.0, epsilon = 1e-5);
}

#[test]
fn slerp_takes_the_short_way_round() {
    // The second key is stored in the opposite hemisphere.
    let path = mk_path(
        RotationStrategy::Slerp,
        &[(0.0, IDENTITY), (1.0, quat::negate(rot_z(90.0)))],
    );
    assert_same_rotation(path.evaluate(0.5).rotation, rot_z(45.0));
}

#[test]
fn squad_matches_slerp_for_a_constant_turn() {
    let squad = uniform_turn(RotationStrategy::Squad);
    let slerp = uniform_turn(RotationStrategy::Slerp);
    // Interior segment: both tangents equal their keys.
    for q in [1.1, 1.25, 1.5, 1.8] {
        assert_same_rotation(squad.evaluate(q).rotation, slerp.evaluate(q).rotation);
    }
    assert_same_rotation(squad.evaluate(1.5).rotation, rot_z(67.5));
}

#[test]
fn squad_stays_unit_length_and_finite() {
    let path = mk_path(
        RotationStrategy::Squad,
        &[
            (0.0, rot_z(90.0)),
            (0.5, [0.5, 0.5, 0.5, 0.5]),
            (2.0, quat::negate(rot_z(-30.0))),
            (2.1, [0.0, 0.7071068, 0.0, 0.7071068]),
            (4.0, rot_z(170.0)),
        ],
    );
    let mut q = -0.5;
    while q <= 4.5 {
        let r = path.evaluate(q).rotation;
        assert!(r.iter().all(|c| c.is_finite()), "query {q}: {r:?}");
        assert_abs_diff_eq!(norm4(r), 1.0, epsilon = 1e-4);
        q += 0.05;
    }
}

#[test]
fn squad_with_missing_neighbours() {
    // Two keys only: both control quaternions fall back to identity.
    let path = mk_path(
        RotationStrategy::Squad,
        &[(0.0, rot_z(90.0)), (1.0, rot_z(120.0))],
    );
    assert_same_rotation(path.evaluate(0.0).rotation, rot_z(90.0));
    assert_same_rotation(path.evaluate(1.0).rotation, rot_z(120.0));
    let mid = path.evaluate(0.5).rotation;
    assert!(mid.iter().all(|c| c.is_finite()));
    assert_abs_diff_eq!(norm4(mid), 1.0, epsilon = 1e-4);
}

#[test]
fn component_hermite_leaves_the_unit_sphere() {
    let path = mk_path(
        RotationStrategy::Component,
        &[(0.0, IDENTITY), (1.0, rot_z(90.0))],
    );
    let mid = path.evaluate(0.5).rotation;
    // Halfway between the components, not renormalized.
    assert_abs_diff_eq!(mid[2], 0.5 * rot_z(90.0)[2], epsilon = 1e-6);
    assert_abs_diff_eq!(mid[3], 0.5 * (1.0 + rot_z(90.0)[3]), epsilon = 1e-6);
    assert!(norm4(mid) < 0.95);
}

#[test]
fn strategy_only_changes_rotation() {
    let base = uniform_turn(RotationStrategy::Slerp);
    for strategy in RotationStrategy::ALL {
        let path = uniform_turn(strategy);
        for q in [0.3, 1.5, 2.7] {
            let a = base.evaluate(q);
            let b = path.evaluate(q);
            assert_eq!(a.position, b.position);
            assert_eq!(a.timescale, b.timescale);
        }
    }
}
