//! Integers as a quotient of natural pairs.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};
use tower_core::{AdditiveIdentity, CheckedArithmetic, MultiplicativeIdentity};

use crate::natural::Natural;

/// An integer represented by the pair `(pos, neg)` and denoting `pos - neg`.
///
/// `(p1, n1)` and `(p2, n2)` are the same integer iff `p1 + n2 == n1 + p2`.
/// Equality, ordering and hashing all follow that relation rather than the
/// stored pair, so `Integer::new(7, 3) == Integer::new(11, 7)`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Integer {
    pos: Natural,
    neg: Natural,
}

impl Integer {
    /// Builds the integer `pos - neg` from two magnitudes.
    pub const fn new(pos: u64, neg: u64) -> Self {
        Self::from_parts(Natural::new(pos), Natural::new(neg))
    }

    /// Builds the integer `pos - neg` from two naturals.
    pub const fn from_parts(pos: Natural, neg: Natural) -> Self {
        Self { pos, neg }
    }

    /// Builds the canonical representation of a machine integer.
    pub const fn from_i64(value: i64) -> Self {
        if value >= 0 {
            Self::new(value.unsigned_abs(), 0)
        } else {
            Self::new(0, value.unsigned_abs())
        }
    }

    /// Positive part of the stored pair.
    pub const fn pos(self) -> Natural {
        self.pos
    }

    /// Negative part of the stored pair.
    pub const fn neg(self) -> Natural {
        self.neg
    }

    /// Additive identity `(0, 0)`.
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Multiplicative identity `(1, 0)`.
    pub const fn one() -> Self {
        Self::new(1, 0)
    }

    /// `(a.pos + b.neg, a.neg + b.pos)`, widened so no pair of magnitudes overflows.
    const fn cross_sums(self, other: Self) -> (u128, u128) {
        (
            self.pos.value() as u128 + other.neg.value() as u128,
            self.neg.value() as u128 + other.pos.value() as u128,
        )
    }

    /// Quotient relation: `a.pos + b.neg == a.neg + b.pos`.
    pub const fn equiv(self, other: Self) -> bool {
        let (lhs, rhs) = self.cross_sums(other);
        lhs == rhs
    }

    /// Strict order through the same cross sums as [`Integer::equiv`].
    pub const fn less_than(self, other: Self) -> bool {
        let (lhs, rhs) = self.cross_sums(other);
        lhs < rhs
    }

    /// Canonical pair with the smaller side zeroed.
    pub const fn normalize(self) -> Self {
        let pos = self.pos.value();
        let neg = self.neg.value();
        if pos >= neg {
            Self::new(pos - neg, 0)
        } else {
            Self::new(0, neg - pos)
        }
    }

    /// Returns whether the value denotes zero.
    pub const fn is_zero(self) -> bool {
        self.equiv(Self::zero())
    }

    /// Magnitude `|pos - neg|`.
    pub const fn abs(self) -> Natural {
        let norm = self.normalize();
        norm.pos.plus(norm.neg)
    }

    /// Componentwise sum of the canonical pairs;
    /// `(p1 - n1) + (p2 - n2) = (p1 + p2) - (n1 + n2)`.
    pub const fn plus(self, rhs: Self) -> Self {
        let a = self.normalize();
        let b = rhs.normalize();
        Self::from_parts(a.pos.plus(b.pos), a.neg.plus(b.neg))
    }

    /// Additive inverse, swapping the pair.
    pub const fn negate(self) -> Self {
        Self::from_parts(self.neg, self.pos)
    }

    /// `self + rhs.negate()`.
    pub const fn minus(self, rhs: Self) -> Self {
        self.plus(rhs.negate())
    }

    /// `(p - n)(p' - n') = (pp' + nn') - (pn' + np')` over the canonical pairs,
    /// so each side has at most one non-zero term.
    pub const fn times(self, rhs: Self) -> Self {
        let a = self.normalize();
        let b = rhs.normalize();
        Self::from_parts(
            a.pos.times(b.pos).plus(a.neg.times(b.neg)),
            a.pos.times(b.neg).plus(a.neg.times(b.pos)),
        )
    }

    /// Signed value of the canonical pair.
    pub const fn to_i128(self) -> i128 {
        let norm = self.normalize();
        norm.pos.value() as i128 - norm.neg.value() as i128
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.equiv(*other)
    }
}

impl Eq for Integer {}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let norm = self.normalize();
        norm.pos.hash(state);
        norm.neg.hash(state);
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = self.cross_sums(*other);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Integer {
    type Output = Integer;

    fn add(self, rhs: Integer) -> Integer {
        self.plus(rhs)
    }
}

impl Sub for Integer {
    type Output = Integer;

    fn sub(self, rhs: Integer) -> Integer {
        self.minus(rhs)
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        self.times(rhs)
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        self.negate()
    }
}

impl AdditiveIdentity for Integer {
    fn zero() -> Self {
        Integer::zero()
    }
}

impl MultiplicativeIdentity for Integer {
    fn one() -> Self {
        Integer::one()
    }
}

impl CheckedArithmetic for Integer {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let a = self.normalize();
        let b = rhs.normalize();
        Some(Self::from_parts(
            a.pos.checked_add(&b.pos)?,
            a.neg.checked_add(&b.neg)?,
        ))
    }

    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let a = self.normalize();
        let b = rhs.normalize();
        let pp = a.pos.checked_mul(&b.pos)?;
        let nn = a.neg.checked_mul(&b.neg)?;
        let pn = a.pos.checked_mul(&b.neg)?;
        let np = a.neg.checked_mul(&b.pos)?;
        Some(Self::from_parts(pp.checked_add(&nn)?, pn.checked_add(&np)?))
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer::from_i64(value)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_i128(), f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_is_the_quotient_relation() {
        let a = Integer::new(7, 3);
        let b = Integer::new(11, 7);
        assert_ne!((a.pos(), a.neg()), (b.pos(), b.neg()));
        assert_eq!(a, b);
        assert_eq!(a.to_i128(), 4);
    }

    #[test]
    fn normalize_zeroes_the_smaller_side() {
        let n = Integer::new(3, 10).normalize();
        assert_eq!(n.pos(), Natural::zero());
        assert_eq!(n.neg(), Natural::new(7));
        let p = Integer::new(10, 3).normalize();
        assert_eq!((p.pos(), p.neg()), (Natural::new(7), Natural::zero()));
    }

    #[test]
    fn multiplication_uses_cross_terms() {
        let a = Integer::from_i64(-3);
        let b = Integer::new(2, 7);
        assert_eq!((a * b).to_i128(), 15);
        assert_eq!((a * Integer::one()).to_i128(), -3);
    }

    #[test]
    fn order_avoids_subtraction() {
        assert!(Integer::new(0, 5) < Integer::new(2, 3));
        assert!(Integer::new(9, 1) > Integer::new(4, 0));
        assert_eq!(Integer::new(9, 1).cmp(&Integer::new(10, 2)), Ordering::Equal);
    }

    #[test]
    fn hash_agrees_with_equality() {
        let set: HashSet<Integer> = [Integer::new(7, 3), Integer::new(11, 7), Integer::new(4, 0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn extreme_magnitudes_compare_without_overflow() {
        let a = Integer::new(u64::MAX, 1);
        assert_eq!(a, a);
        assert_eq!(a, Integer::new(u64::MAX - 1, 0));
        assert!(Integer::new(0, u64::MAX) < a);
        assert_eq!(a.cmp(&Integer::new(u64::MAX, u64::MAX)), Ordering::Greater);
        assert_eq!(a.to_i128(), u64::MAX as i128 - 1);
    }

    #[test]
    fn arithmetic_works_on_canonical_pairs() {
        let a = Integer::new(u64::MAX, u64::MAX - 2);
        let b = Integer::new(u64::MAX - 3, u64::MAX);
        assert_eq!((a + b).to_i128(), -1);
        assert_eq!((a * b).to_i128(), -6);
    }

    #[test]
    fn checked_operations_report_overflow() {
        let big = Integer::new(u64::MAX, 0);
        assert_eq!(big.checked_add(&Integer::new(0, 1)), Some(Integer::new(u64::MAX - 1, 0)));
        assert_eq!(big.checked_add(&Integer::one()), None);
        assert_eq!(big.checked_mul(&Integer::from_i64(-2)), None);
        assert_eq!(
            Integer::from_i64(-4).checked_mul(&Integer::from_i64(5)),
            Some(Integer::from_i64(-20))
        );
    }

    #[test]
    fn displays_signed_value() {
        assert_eq!(Integer::new(2, 9).to_string(), "-7");
        assert_eq!(Integer::from(12).to_string(), "12");
    }
}
