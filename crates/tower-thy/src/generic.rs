//! Law predicates generic over capability constraints.
//!
//! These take their witnesses as arguments, so they serve both the
//! configurable witness plans and any downstream type that satisfies the
//! relevant capability.

use std::ops::Mul;

use tower_core::{
    Field, Group, Inject, Magma, Monoid, MultiplicativeIdentity, OrderedField, Semigroup,
    TotallyOrdered, TowerError,
};

/// `(a + b) + c == a + (b + c)`.
pub fn associative<T: Semigroup>(a: &T, b: &T, c: &T) -> bool {
    (a.clone() + b.clone()) + c.clone() == a.clone() + (b.clone() + c.clone())
}

/// `a + b == b + a`.
pub fn commutative<T: Magma>(a: &T, b: &T) -> bool {
    a.clone() + b.clone() == b.clone() + a.clone()
}

/// `a + 0 == a == 0 + a`.
pub fn additive_identity<T: Monoid>(a: &T) -> bool {
    a.clone() + T::zero() == *a && T::zero() + a.clone() == *a
}

/// `a + (-a) == 0`.
pub fn additive_inverse<T: Group>(a: &T) -> bool {
    a.clone() + -a.clone() == T::zero()
}

/// `a * b == b * a`.
pub fn multiplicative_commutative<T: Monoid + Mul<Output = T>>(a: &T, b: &T) -> bool {
    a.clone() * b.clone() == b.clone() * a.clone()
}

/// `a * 1 == a == 1 * a`.
pub fn multiplicative_identity<T>(a: &T) -> bool
where
    T: Monoid + Mul<Output = T> + MultiplicativeIdentity,
{
    a.clone() * T::one() == *a && T::one() * a.clone() == *a
}

/// `a * (b + c) == a * b + a * c`.
pub fn distributive<T: Monoid + Mul<Output = T>>(a: &T, b: &T, c: &T) -> bool {
    a.clone() * (b.clone() + c.clone()) == a.clone() * b.clone() + a.clone() * c.clone()
}

/// `a * a⁻¹ == 1`; inverting zero is reported as an error.
pub fn multiplicative_inverse<T: Field>(a: &T) -> Result<bool, TowerError> {
    let inverse = a.inverse()?;
    Ok(a.clone() * inverse == T::one())
}

/// `a <= b` implies `a + c <= b + c`.
pub fn order_compatible_add<T: OrderedField>(a: &T, b: &T, c: &T) -> bool {
    a > b || a.clone() + c.clone() <= b.clone() + c.clone()
}

/// `0 <= a` and `0 <= b` imply `0 <= a * b`.
pub fn order_compatible_mul<T: OrderedField>(a: &T, b: &T) -> bool {
    let zero = T::zero();
    *a < zero || *b < zero || zero <= a.clone() * b.clone()
}

/// `a == b` iff `inject(a) == inject(b)`.
pub fn injection_preserves_equality<T: Inject>(a: &T, b: &T) -> bool {
    (a == b) == (a.inject() == b.inject())
}

/// `a < b` iff `inject(a) < inject(b)`.
pub fn injection_preserves_order<T>(a: &T, b: &T) -> bool
where
    T: Inject + TotallyOrdered,
    T::Next: TotallyOrdered,
{
    (a < b) == (a.inject() < b.inject())
}
