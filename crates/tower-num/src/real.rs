//! Reals, represented by a single rational approximation.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};
use tower_core::{
    AdditiveIdentity, CheckedArithmetic, Invertible, MultiplicativeIdentity, TowerError,
};

use crate::rational::Rational;

/// A real number held as one rational approximation.
///
/// This is not a completion of the rationals: every operation delegates to
/// the wrapped [`Rational`], and equality and order are those of the
/// approximation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Real {
    approx: Rational,
}

impl Real {
    /// Wraps a rational approximation.
    pub const fn new(approx: Rational) -> Self {
        Self { approx }
    }

    /// Builds the real `num / den`.
    pub const fn from_fraction(num: i64, den: u64) -> Self {
        Self::new(Rational::from_fraction(num, den))
    }

    /// Builds the real denoting an integer.
    pub const fn from_i64(value: i64) -> Self {
        Self::from_fraction(value, 1)
    }

    /// The wrapped approximation.
    pub const fn approx(self) -> Rational {
        self.approx
    }

    /// Additive identity.
    pub const fn zero() -> Self {
        Self::new(Rational::zero())
    }

    /// Multiplicative identity.
    pub const fn one() -> Self {
        Self::new(Rational::one())
    }

    /// Equality of the approximations.
    pub const fn equiv(self, other: Self) -> bool {
        self.approx.equiv(other.approx)
    }

    /// `self < other`.
    pub const fn less_than(self, other: Self) -> bool {
        self.approx.less_than(other.approx)
    }

    /// `self <= other`.
    pub const fn at_most(self, other: Self) -> bool {
        self.less_than(other) || self.equiv(other)
    }

    /// `self >= other`.
    pub const fn at_least(self, other: Self) -> bool {
        !self.less_than(other)
    }

    /// `self + rhs`.
    pub const fn plus(self, rhs: Self) -> Self {
        Self::new(self.approx.plus(rhs.approx))
    }

    /// Additive inverse.
    pub const fn negate(self) -> Self {
        Self::new(self.approx.negate())
    }

    /// `self - rhs`.
    pub const fn minus(self, rhs: Self) -> Self {
        Self::new(self.approx.minus(rhs.approx))
    }

    /// `self * rhs`.
    pub const fn times(self, rhs: Self) -> Self {
        Self::new(self.approx.times(rhs.approx))
    }

    /// Multiplicative inverse, `None` for zero.
    pub const fn checked_inverse(self) -> Option<Self> {
        match self.approx.checked_inverse() {
            Some(inv) => Some(Self::new(inv)),
            None => None,
        }
    }

    /// `self / rhs`, reporting division by zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, TowerError> {
        self.approx
            .checked_quotient(rhs.approx)
            .map(Self::new)
            .ok_or_else(|| TowerError::division_by_zero("real"))
    }

    /// Decimal approximation for display.
    pub fn to_f64(self) -> f64 {
        self.approx.to_f64()
    }
}

impl Add for Real {
    type Output = Real;

    fn add(self, rhs: Real) -> Real {
        self.plus(rhs)
    }
}

impl Sub for Real {
    type Output = Real;

    fn sub(self, rhs: Real) -> Real {
        self.minus(rhs)
    }
}

impl Mul for Real {
    type Output = Real;

    fn mul(self, rhs: Real) -> Real {
        self.times(rhs)
    }
}

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Real {
        self.negate()
    }
}

impl AdditiveIdentity for Real {
    fn zero() -> Self {
        Real::zero()
    }
}

impl MultiplicativeIdentity for Real {
    fn one() -> Self {
        Real::one()
    }
}

impl CheckedArithmetic for Real {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.approx.checked_add(&rhs.approx).map(Self::new)
    }

    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.approx.checked_mul(&rhs.approx).map(Self::new)
    }
}

impl Invertible for Real {
    fn inverse(&self) -> Result<Self, TowerError> {
        self.checked_inverse()
            .ok_or_else(|| TowerError::division_by_zero("real"))
    }
}

/// Prints the decimal approximation, honouring the formatter's precision.
impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.to_f64()),
            None => write!(f, "{}", self.to_f64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_delegate_to_the_approximation() {
        let a = Real::from_fraction(1, 2);
        let b = Real::from_fraction(3, 4);
        assert_eq!(a + b, Real::from_fraction(5, 4));
        assert_eq!(a - b, Real::from_fraction(-1, 4));
        assert_eq!(a * b, Real::from_fraction(3, 8));
        assert_eq!(a.checked_div(b).unwrap(), Real::from_fraction(2, 3));
        assert!(a < b && a.at_most(b) && b.at_least(a));
    }

    #[test]
    fn equal_approximations_compare_equal() {
        assert_eq!(Real::from_fraction(2, 4), Real::from_fraction(1, 2));
    }

    #[test]
    fn zero_inverse_is_an_error() {
        assert!(Real::zero().inverse().unwrap_err().is_division_by_zero());
        assert!(Real::one()
            .checked_div(Real::zero())
            .unwrap_err()
            .is_division_by_zero());
    }

    #[test]
    fn checked_operations_follow_the_approximation() {
        let big = Real::from_i64(1 << 31);
        let huge = big.checked_mul(&big).unwrap();
        assert_eq!(huge, Real::from_i64(1 << 62));
        assert_eq!(huge.checked_mul(&big), None);
        assert_eq!(huge.checked_add(&huge), Some(huge + huge));
        assert_eq!(
            Real::from_fraction(1, 2).checked_add(&Real::from_fraction(1, 3)),
            Some(Real::from_fraction(5, 6))
        );
    }

    #[test]
    fn display_uses_decimal_approximation() {
        let r = Real::from_fraction(15, 28);
        assert_eq!(format!("{r:.2}"), "0.54");
        assert_eq!(Real::from_i64(4).to_string(), "4");
    }
}
