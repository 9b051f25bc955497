use std::ops::{Add, Mul, Neg};

use tower_core::errors::TowerError;
use tower_core::{
    require_capability, AdditiveIdentity, Field, Group, Inject, Invertible, Monoid,
    MultiplicativeIdentity, OrderedField, Ring,
};

/// Integers modulo 5: a field that qualifies without naming any capability.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
struct Mod5(u8);

impl Add for Mod5 {
    type Output = Mod5;

    fn add(self, rhs: Mod5) -> Mod5 {
        Mod5((self.0 + rhs.0) % 5)
    }
}

impl Mul for Mod5 {
    type Output = Mod5;

    fn mul(self, rhs: Mod5) -> Mod5 {
        Mod5((self.0 * rhs.0) % 5)
    }
}

impl Neg for Mod5 {
    type Output = Mod5;

    fn neg(self) -> Mod5 {
        Mod5((5 - self.0) % 5)
    }
}

impl AdditiveIdentity for Mod5 {
    fn zero() -> Self {
        Mod5(0)
    }
}

impl MultiplicativeIdentity for Mod5 {
    fn one() -> Self {
        Mod5(1)
    }
}

impl Invertible for Mod5 {
    fn inverse(&self) -> Result<Self, TowerError> {
        (1..5)
            .map(Mod5)
            .find(|candidate| (*self * *candidate).0 == 1)
            .ok_or_else(|| TowerError::division_by_zero("mod5"))
    }
}

impl Inject for Mod5 {
    type Next = u64;

    fn inject(&self) -> u64 {
        u64::from(self.0)
    }
}

require_capability!(Monoid: Mod5);
require_capability!(Group: Mod5);
require_capability!(Ring: Mod5);
require_capability!(Field: Mod5);
require_capability!(OrderedField: Mod5);
require_capability!(Inject: Mod5);

fn sum_all<T: Monoid + Copy>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, value| acc + *value)
}

fn divide<T: Field + Copy>(a: T, b: T) -> Result<T, TowerError> {
    Ok(a * b.inverse()?)
}

#[test]
fn blanket_capabilities_accept_structural_types() {
    assert_eq!(sum_all(&[Mod5(3), Mod5(4), Mod5(2)]), Mod5(4));
    assert_eq!(divide(Mod5(3), Mod5(2)).unwrap(), Mod5(4));
    assert_eq!(Mod5(3).inject(), 3);
}

#[test]
fn zero_inverse_is_reported() {
    let err = Mod5(0).inverse().unwrap_err();
    assert!(err.is_division_by_zero());
}
