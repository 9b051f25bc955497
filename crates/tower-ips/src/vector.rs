use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use tower_core::{CheckedArithmetic, InnerProductSpace};
use tower_num::Real;

/// A vector `(x, y)` over [`Real`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// First component.
    pub x: Real,
    /// Second component.
    pub y: Real,
}

impl Vector2 {
    /// Builds a vector from its components.
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Builds a vector with integer components.
    pub const fn from_i64(x: i64, y: i64) -> Self {
        Self::new(Real::from_i64(x), Real::from_i64(y))
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new(Real::zero(), Real::zero())
    }

    /// Componentwise equality, usable in const context.
    pub const fn equiv(self, other: Self) -> bool {
        self.x.equiv(other.x) && self.y.equiv(other.y)
    }

    /// Componentwise sum.
    pub const fn plus(self, rhs: Self) -> Self {
        Self::new(self.x.plus(rhs.x), self.y.plus(rhs.y))
    }

    /// Componentwise scalar multiple.
    pub const fn scale(self, s: Real) -> Self {
        Self::new(self.x.times(s), self.y.times(s))
    }

    /// `⟨u, v⟩ = u.x·v.x + u.y·v.y`.
    pub const fn inner(self, other: Self) -> Real {
        self.x.times(other.x).plus(self.y.times(other.y))
    }

    /// [`Vector2::plus`], `None` when a component overflows.
    pub fn checked_plus(self, rhs: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(&rhs.x)?,
            self.y.checked_add(&rhs.y)?,
        ))
    }

    /// [`Vector2::scale`], `None` when a component overflows.
    pub fn checked_scale(self, s: Real) -> Option<Self> {
        Some(Self::new(self.x.checked_mul(&s)?, self.y.checked_mul(&s)?))
    }

    /// [`Vector2::inner`], `None` when an intermediate overflows.
    pub fn checked_inner(self, other: Self) -> Option<Real> {
        let xx = self.x.checked_mul(&other.x)?;
        let yy = self.y.checked_mul(&other.y)?;
        xx.checked_add(&yy)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        self.plus(rhs)
    }
}

impl InnerProductSpace for Vector2 {
    type Scalar = Real;

    fn scale(&self, scalar: &Real) -> Self {
        Vector2::scale(*self, *scalar)
    }

    fn inner(&self, other: &Self) -> Real {
        Vector2::inner(*self, *other)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
