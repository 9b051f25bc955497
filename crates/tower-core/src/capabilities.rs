//! Capability constraints for the numeric tower.
//!
//! Every structural capability is a trait with a blanket implementation: a
//! type qualifies as a [`Monoid`], [`Ring`], [`Field`] and so on purely by
//! exposing the operations the capability lists. Nothing opts in explicitly.
//! The only traits a type implements by hand are the operation providers
//! ([`AdditiveIdentity`], [`MultiplicativeIdentity`], [`Invertible`],
//! [`Inject`]) that have no counterpart in `std::ops`.
//!
//! Requirements are stated at item level with [`require_capability!`], which
//! turns a missing capability into a build failure.

use std::ops::{Add, Mul, Neg};

use crate::errors::TowerError;

/// Equality comparable, copyable, default-initialisable values.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not Regular",
    note = "Regular requires `PartialEq + Clone + Default`"
)]
pub trait Regular: PartialEq + Clone + Default {}

impl<T: PartialEq + Clone + Default> Regular for T {}

/// Regular values carrying a total order.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not TotallyOrdered",
    note = "TotallyOrdered requires Regular plus `PartialOrd` with a total order"
)]
pub trait TotallyOrdered: Regular + PartialOrd {}

impl<T: Regular + PartialOrd> TotallyOrdered for T {}

/// Closed binary operation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Magma",
    note = "Magma requires Regular plus a closed `+` returning `{Self}`"
)]
pub trait Magma: Regular + Add<Output = Self> {}

impl<T: Regular + Add<Output = T>> Magma for T {}

/// Associative magma. Associativity is witnessed by the law checks, not the type system.
pub trait Semigroup: Magma {}

impl<T: Magma> Semigroup for T {}

/// Provides the additive identity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no additive identity",
    note = "implement `AdditiveIdentity::zero` for `{Self}`"
)]
pub trait AdditiveIdentity {
    /// Returns the identity of `+`.
    fn zero() -> Self;
}

/// Provides the multiplicative identity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no multiplicative identity",
    note = "implement `MultiplicativeIdentity::one` for `{Self}`"
)]
pub trait MultiplicativeIdentity {
    /// Returns the identity of `*`.
    fn one() -> Self;
}

/// Provides multiplicative inverses for every non-zero value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no multiplicative inverse",
    note = "implement `Invertible::inverse` for `{Self}`"
)]
pub trait Invertible: Sized {
    /// Returns the multiplicative inverse.
    ///
    /// Zero has no inverse and yields [`TowerError::Arithmetic`] with code
    /// `division-by-zero`.
    fn inverse(&self) -> Result<Self, TowerError>;
}

/// Provides `+` and `*` that report overflow of the fixed-width magnitudes.
///
/// Returning `Some` guarantees the matching operator does not overflow on
/// the same operands.
pub trait CheckedArithmetic: Sized {
    /// `self + rhs`, `None` on overflow.
    fn checked_add(&self, rhs: &Self) -> Option<Self>;

    /// `self * rhs`, `None` on overflow.
    fn checked_mul(&self, rhs: &Self) -> Option<Self>;
}

/// Semigroup with an additive identity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Monoid",
    note = "Monoid requires a Semigroup with `AdditiveIdentity::zero`"
)]
pub trait Monoid: Semigroup + AdditiveIdentity {}

impl<T: Semigroup + AdditiveIdentity> Monoid for T {}

/// Monoid with additive inverses (`negate`, spelled `Neg`).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Group",
    note = "Group requires a Monoid with a `Neg` (negate) returning `{Self}`"
)]
pub trait Group: Monoid + Neg<Output = Self> {}

impl<T: Monoid + Neg<Output = T>> Group for T {}

/// Additive group with a closed multiplication and a multiplicative identity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Ring",
    note = "Ring requires a Group with a closed `*` and `MultiplicativeIdentity::one`"
)]
pub trait Ring: Group + Mul<Output = Self> + MultiplicativeIdentity {}

impl<T: Group + Mul<Output = T> + MultiplicativeIdentity> Ring for T {}

/// Ring with multiplicative inverses.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Field",
    note = "Field requires a Ring implementing `Invertible`"
)]
pub trait Field: Ring + Invertible {}

impl<T: Ring + Invertible> Field for T {}

/// Field with a total order.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an OrderedField",
    note = "OrderedField requires a Field that is also TotallyOrdered"
)]
pub trait OrderedField: Field + TotallyOrdered {}

impl<T: Field + TotallyOrdered> OrderedField for T {}

/// Vector structure over an ordered field with a symmetric bilinear pairing.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an InnerProductSpace",
    note = "InnerProductSpace requires vector `+`, `scale` and `inner` over an OrderedField scalar"
)]
pub trait InnerProductSpace: Regular + Add<Output = Self> {
    /// Scalar field of the space.
    type Scalar: OrderedField;

    /// Multiplies every component by `scalar`.
    fn scale(&self, scalar: &Self::Scalar) -> Self;

    /// Inner product `⟨self, other⟩`.
    fn inner(&self, other: &Self) -> Self::Scalar;
}

/// Structure preserving embedding into the next level of the tower.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no injection into a higher level",
    note = "implement `Inject` for `{Self}`"
)]
pub trait Inject: Regular {
    /// Target level.
    type Next: Regular;

    /// Embeds the value into [`Inject::Next`].
    fn inject(&self) -> Self::Next;
}

/// States at item level that each listed type satisfies a capability.
///
/// Expands to a `const` item that only type-checks when the bound holds, so a
/// missing capability fails the build.
///
/// ```
/// use tower_core::{require_capability, Magma, Regular};
///
/// require_capability!(Regular: u64, i32);
/// require_capability!(Magma: u64);
/// ```
///
/// ```compile_fail
/// use tower_core::{require_capability, Group};
///
/// // `u64` has no `Neg`, so it cannot be a group.
/// require_capability!(Group: u64);
/// ```
#[macro_export]
macro_rules! require_capability {
    ($capability:path : $($ty:ty),+ $(,)?) => {
        const _: fn() = || {
            fn satisfies<T: ?Sized + $capability>() {}
            $(satisfies::<$ty>();)+
        };
    };
}
