//! Natural numbers, the base of the tower.

use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};
use tower_core::{AdditiveIdentity, CheckedArithmetic, MultiplicativeIdentity};

/// A natural number stored as its magnitude.
///
/// Every value has exactly one representation, so equality and ordering are
/// structural. There is no subtraction at this level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Natural(u64);

impl Natural {
    /// Wraps a literal magnitude.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the magnitude.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Additive identity.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Multiplicative identity.
    pub const fn one() -> Self {
        Self(1)
    }

    /// Returns whether the value is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `self + rhs`, usable in const context.
    pub const fn plus(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }

    /// `self * rhs`, usable in const context.
    pub const fn times(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }

    /// Structural equality, usable in const context.
    pub const fn equiv(self, other: Self) -> bool {
        self.0 == other.0
    }

    /// Strict order, usable in const context.
    pub const fn less_than(self, other: Self) -> bool {
        self.0 < other.0
    }
}

impl Add for Natural {
    type Output = Natural;

    fn add(self, rhs: Natural) -> Natural {
        self.plus(rhs)
    }
}

impl Mul for Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        self.times(rhs)
    }
}

impl AdditiveIdentity for Natural {
    fn zero() -> Self {
        Natural::zero()
    }
}

impl MultiplicativeIdentity for Natural {
    fn one() -> Self {
        Natural::one()
    }
}

impl CheckedArithmetic for Natural {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Natural)
    }

    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_mul(rhs.0).map(Natural)
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Natural(value)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
