//! Injections ℕ → ℤ → ℚ → ℝ.
//!
//! Each map embeds a level into the next one and preserves equality, order,
//! zero and one. The inherent `const fn inject` methods are what the
//! compile-time law checks call; the [`Inject`] impls expose the same maps to
//! capability-generic code.

use tower_core::Inject;

use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::Rational;
use crate::real::Real;

impl Natural {
    /// `n ↦ (n, 0)`.
    pub const fn inject(self) -> Integer {
        Integer::from_parts(self, Natural::zero())
    }
}

impl Integer {
    /// `z ↦ z / 1`.
    pub const fn inject(self) -> Rational {
        Rational::new(self, Natural::one())
    }
}

impl Rational {
    /// `q ↦ Real(q)`; the real is the rational itself.
    pub const fn inject(self) -> Real {
        Real::new(self)
    }
}

impl Inject for Natural {
    type Next = Integer;

    fn inject(&self) -> Integer {
        Natural::inject(*self)
    }
}

impl Inject for Integer {
    type Next = Rational;

    fn inject(&self) -> Rational {
        Integer::inject(*self)
    }
}

impl Inject for Rational {
    type Next = Real;

    fn inject(&self) -> Real {
        Rational::inject(*self)
    }
}

impl From<Natural> for Integer {
    fn from(value: Natural) -> Self {
        value.inject()
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        value.inject()
    }
}

impl From<Rational> for Real {
    fn from(value: Rational) -> Self {
        value.inject()
    }
}
