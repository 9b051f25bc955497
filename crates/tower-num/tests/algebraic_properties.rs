use proptest::prelude::*;
use tower_num::{Integer, Natural, Rational, Real};

fn natural() -> impl Strategy<Value = Natural> {
    (0u64..10_000).prop_map(Natural::new)
}

fn integer() -> impl Strategy<Value = Integer> {
    (0u64..50, 0u64..50).prop_map(|(pos, neg)| Integer::new(pos, neg))
}

fn rational() -> impl Strategy<Value = Rational> {
    (integer(), 1u64..50).prop_map(|(num, den)| Rational::new(num, Natural::new(den)))
}

proptest! {
    #[test]
    fn natural_addition_is_an_associative_monoid(a in natural(), b in natural(), c in natural()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!(a + Natural::zero(), a);
        prop_assert_eq!(Natural::zero() + a, a);
        prop_assert_eq!(a * Natural::one(), a);
    }

    #[test]
    fn integer_addition_commutes_and_cancels(a in integer(), b in integer()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a + a.negate(), Integer::zero());
        prop_assert_eq!(a - b, -(b - a));
    }

    #[test]
    fn rational_multiplication_commutes_and_distributes(a in rational(), b in rational(), c in rational()) {
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn normalisation_stays_in_the_class(q in rational()) {
        let lowest = q.normalize();
        prop_assert_eq!(lowest, q);
        prop_assert_eq!(lowest.normalize().den(), lowest.den());
    }

    #[test]
    fn nonzero_rationals_invert(q in rational()) {
        match q.checked_inverse() {
            Some(inv) => prop_assert_eq!(q * inv, Rational::one()),
            None => prop_assert!(q.is_zero()),
        }
    }

    #[test]
    fn integer_order_matches_signed_values(a in integer(), b in integer()) {
        prop_assert_eq!(a < b, a.to_i128() < b.to_i128());
        prop_assert_eq!(a == b, a.to_i128() == b.to_i128());
    }

    #[test]
    fn injections_preserve_order(a in integer(), b in integer()) {
        prop_assert_eq!(a < b, a.inject() < b.inject());
        prop_assert_eq!(a.inject() < b.inject(), a.inject().inject() < b.inject().inject());
        prop_assert_eq!(a == b, Real::from(a.inject()) == Real::from(b.inject()));
    }
}

proptest! {
    #[test]
    fn comparisons_hold_across_the_full_range(
        (p1, n1, p2, n2) in (any::<u64>(), any::<u64>(), any::<u64>(), any::<u64>()),
        (d1, d2) in (1u64..=u64::MAX, 1u64..=u64::MAX),
    ) {
        let a = Integer::new(p1, n1);
        let b = Integer::new(p2, n2);
        prop_assert_eq!(a == b, a.to_i128() == b.to_i128());
        prop_assert_eq!(a < b, a.to_i128() < b.to_i128());

        let x = Rational::new(a, Natural::new(d1));
        let y = Rational::new(b, Natural::new(d2));
        prop_assert_eq!(x, x);
        prop_assert_eq!(x < y, y > x);
        prop_assert_eq!(x == y, y == x);
    }
}
