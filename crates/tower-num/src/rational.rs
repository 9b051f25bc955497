//! Rationals as a quotient of integer/natural fractions.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};
use tower_core::{
    AdditiveIdentity, CheckedArithmetic, Invertible, MultiplicativeIdentity, TowerError,
};

use crate::integer::Integer;
use crate::natural::Natural;

/// A fraction `num / den` with `den >= 1`.
///
/// `a/b` and `c/d` are the same rational iff `a·d == c·b`; equality,
/// ordering and hashing follow that relation, so `2/4 == 1/2` without any
/// normalisation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "RawRational")]
pub struct Rational {
    num: Integer,
    den: Natural,
}

#[derive(Deserialize)]
struct RawRational {
    num: Integer,
    den: Natural,
}

impl From<RawRational> for Rational {
    fn from(raw: RawRational) -> Self {
        Rational::new(raw.num, raw.den)
    }
}

impl Rational {
    /// Builds `num / den`; a zero denominator is clamped to one.
    pub const fn new(num: Integer, den: Natural) -> Self {
        let den = if den.is_zero() { Natural::one() } else { den };
        Self { num, den }
    }

    /// Builds `num / den` from machine integers, clamping like [`Rational::new`].
    pub const fn from_fraction(num: i64, den: u64) -> Self {
        Self::new(Integer::from_i64(num), Natural::new(den))
    }

    /// Numerator.
    pub const fn num(self) -> Integer {
        self.num
    }

    /// Denominator, never zero.
    pub const fn den(self) -> Natural {
        self.den
    }

    /// Additive identity `0/1`.
    pub const fn zero() -> Self {
        Self::new(Integer::zero(), Natural::one())
    }

    /// Multiplicative identity `1/1`.
    pub const fn one() -> Self {
        Self::new(Integer::one(), Natural::one())
    }

    /// `num · den` as a sign and a widened magnitude.
    const fn scaled(num: Integer, den: Natural) -> (bool, u128) {
        let norm = num.normalize();
        let den = den.value() as u128;
        if norm.neg().is_zero() {
            (false, norm.pos().value() as u128 * den)
        } else {
            (true, norm.neg().value() as u128 * den)
        }
    }

    /// Compares `a.num·b.den` with `b.num·a.den`; denominators are positive.
    const fn cross_order(self, other: Self) -> Ordering {
        let (lhs_negative, lhs) = Self::scaled(self.num, other.den);
        let (rhs_negative, rhs) = Self::scaled(other.num, self.den);
        let (lhs, rhs) = match (lhs_negative, rhs_negative) {
            (false, true) => return Ordering::Greater,
            (true, false) => return Ordering::Less,
            (false, false) => (lhs, rhs),
            (true, true) => (rhs, lhs),
        };
        if lhs < rhs {
            Ordering::Less
        } else if lhs > rhs {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Cross multiplication: `a.num·b.den == b.num·a.den`.
    pub const fn equiv(self, other: Self) -> bool {
        matches!(self.cross_order(other), Ordering::Equal)
    }

    /// Strict order through cross multiplication.
    pub const fn less_than(self, other: Self) -> bool {
        matches!(self.cross_order(other), Ordering::Less)
    }

    /// `self > other`.
    pub const fn greater_than(self, other: Self) -> bool {
        other.less_than(self)
    }

    /// `self <= other`.
    pub const fn at_most(self, other: Self) -> bool {
        !self.greater_than(other)
    }

    /// `self >= other`.
    pub const fn at_least(self, other: Self) -> bool {
        !self.less_than(other)
    }

    /// Returns whether the value denotes zero.
    pub const fn is_zero(self) -> bool {
        self.num.is_zero()
    }

    /// Greatest common divisor by the Euclidean algorithm.
    pub const fn gcd(a: Natural, b: Natural) -> Natural {
        let mut a = a.value();
        let mut b = b.value();
        while b != 0 {
            let rem = a % b;
            a = b;
            b = rem;
        }
        Natural::new(a)
    }

    /// Lowest terms: `|num|` and `den` divided by their gcd, `0/1` for zero.
    pub const fn normalize(self) -> Self {
        let norm = self.num.normalize();
        let pos = norm.pos().value();
        let neg = norm.neg().value();
        let abs = pos + neg;
        if abs == 0 {
            return Self::zero();
        }
        let g = Self::gcd(Natural::new(abs), self.den).value();
        if g <= 1 {
            return Self::new(norm, self.den);
        }
        Self::new(Integer::new(pos / g, neg / g), Natural::new(self.den.value() / g))
    }

    /// `a/b + c/d = (a·d + c·b) / (b·d)`, in lowest terms.
    pub const fn plus(self, rhs: Self) -> Self {
        Self::new(
            self.num
                .times(rhs.den.inject())
                .plus(rhs.num.times(self.den.inject())),
            self.den.times(rhs.den),
        )
        .normalize()
    }

    /// Additive inverse.
    pub const fn negate(self) -> Self {
        Self::new(self.num.negate(), self.den)
    }

    /// `self + rhs.negate()`.
    pub const fn minus(self, rhs: Self) -> Self {
        self.plus(rhs.negate())
    }

    /// Componentwise product, in lowest terms.
    pub const fn times(self, rhs: Self) -> Self {
        Self::new(self.num.times(rhs.num), self.den.times(rhs.den)).normalize()
    }

    /// Swaps magnitude and denominator, keeping the sign of the numerator.
    ///
    /// Returns `None` for zero, which has no inverse.
    pub const fn checked_inverse(self) -> Option<Self> {
        let norm = self.num.normalize();
        if !norm.pos().is_zero() {
            Some(Self::new(Integer::from_parts(self.den, Natural::zero()), norm.pos()))
        } else if !norm.neg().is_zero() {
            Some(Self::new(Integer::from_parts(Natural::zero(), self.den), norm.neg()))
        } else {
            None
        }
    }

    /// `self * rhs⁻¹`, `None` when `rhs` is zero.
    pub const fn checked_quotient(self, rhs: Self) -> Option<Self> {
        match rhs.checked_inverse() {
            Some(inv) => Some(self.times(inv)),
            None => None,
        }
    }

    /// `self / rhs`, reporting division by zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, TowerError> {
        self.checked_quotient(rhs)
            .ok_or_else(|| TowerError::division_by_zero("rational"))
    }

    /// Decimal approximation for display.
    pub fn to_f64(self) -> f64 {
        self.num.to_i128() as f64 / self.den.value() as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.equiv(*other)
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let lowest = self.normalize();
        lowest.num.hash(state);
        lowest.den.hash(state);
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cross_order(*other)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        self.plus(rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self.minus(rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        self.times(rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.negate()
    }
}

impl AdditiveIdentity for Rational {
    fn zero() -> Self {
        Rational::zero()
    }
}

impl MultiplicativeIdentity for Rational {
    fn one() -> Self {
        Rational::one()
    }
}

impl CheckedArithmetic for Rational {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let lhs_num = self.num.checked_mul(&rhs.den.inject())?;
        let rhs_num = rhs.num.checked_mul(&self.den.inject())?;
        let den = self.den.checked_mul(&rhs.den)?;
        Some(Self::new(lhs_num.checked_add(&rhs_num)?, den).normalize())
    }

    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let num = self.num.checked_mul(&rhs.num)?;
        let den = self.den.checked_mul(&rhs.den)?;
        Some(Self::new(num, den).normalize())
    }
}

impl Invertible for Rational {
    fn inverse(&self) -> Result<Self, TowerError> {
        self.checked_inverse()
            .ok_or_else(|| TowerError::division_by_zero("rational"))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
