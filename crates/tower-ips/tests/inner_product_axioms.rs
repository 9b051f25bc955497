use proptest::prelude::*;
use tower_ips::{Vector2, VerifyInnerProduct};
use tower_num::Real;

type Verify = VerifyInnerProduct<Vector2>;

fn real() -> impl Strategy<Value = Real> {
    (-9i64..10, 1u64..7).prop_map(|(num, den)| Real::from_fraction(num, den))
}

fn vector() -> impl Strategy<Value = Vector2> {
    (real(), real()).prop_map(|(x, y)| Vector2::new(x, y))
}

#[test]
fn reference_vectors_satisfy_every_axiom() {
    let u = Vector2::from_i64(3, 4);
    let v = Vector2::from_i64(1, 2);
    let w = Vector2::from_i64(-2, 5);
    let a = Real::from_i64(2);
    let b = Real::from_fraction(-1, 3);

    assert!(Verify::commutative(&u, &v));
    assert!(Verify::linear(&a, &u, &b, &v, &w));
    assert!(Verify::positive_definite(&u));
    assert!(Verify::positive_definite(&Vector2::zero()));
    assert!(Verify::cauchy_schwarz(&u, &v));
    assert!(Verify::all(&a, &b, &u, &v, &w));
}

#[test]
fn cauchy_schwarz_reference_bound() {
    let u = Vector2::from_i64(3, 4);
    let v = Vector2::from_i64(1, 2);
    let uv = u.inner(v);
    assert_eq!(uv * uv, Real::from_i64(121));
    assert_eq!(u.inner(u) * v.inner(v), Real::from_i64(125));
}

#[test]
fn parallel_vectors_meet_the_bound_with_equality() {
    let u = Vector2::from_i64(1, 2);
    let v = u.scale(Real::from_i64(3));
    let uv = u.inner(v);
    assert_eq!(uv * uv, u.inner(u) * v.inner(v));
    assert!(Verify::cauchy_schwarz(&u, &v));
}

proptest! {
    #[test]
    fn axioms_hold_for_small_rational_vectors(
        u in vector(),
        v in vector(),
        w in vector(),
        a in real(),
        b in real(),
    ) {
        prop_assert!(Verify::commutative(&u, &v));
        prop_assert!(Verify::linear(&a, &u, &b, &v, &w));
        prop_assert!(Verify::positive_definite(&u));
        prop_assert!(Verify::cauchy_schwarz(&u, &v));
    }
}
