//! Algebraic laws over literal witnesses, evaluated during compilation.
//!
//! Every predicate here is a `const fn` over fixed values and is asserted at
//! item level, so a construction bug or a bad witness stops the build with
//! the name of the failing law. [`WITNESS_LAWS`] lists the same predicates so
//! the runtime report can re-run them.
//!
//! A law that holds compiles:
//!
//! ```
//! use tower_num::Natural;
//!
//! const fn two_plus_two_is_four() -> bool {
//!     Natural::new(2).plus(Natural::new(2)).equiv(Natural::new(4))
//! }
//!
//! const _: () = assert!(two_plus_two_is_four(), "two_plus_two_is_four failed");
//!
//! fn main() {}
//! ```
//!
//! A false one stops the build:
//!
//! ```compile_fail
//! use tower_num::Natural;
//!
//! const fn two_plus_two_is_five() -> bool {
//!     Natural::new(2).plus(Natural::new(2)).equiv(Natural::new(5))
//! }
//!
//! const _: () = assert!(two_plus_two_is_five(), "two_plus_two_is_five failed");
//!
//! fn main() {}
//! ```
//!
//! So does a law whose witnesses overflow:
//!
//! ```compile_fail
//! use tower_num::Natural;
//!
//! const fn doubling_is_monotone() -> bool {
//!     let big = Natural::new(u64::MAX);
//!     big.less_than(big.plus(big))
//! }
//!
//! const _: () = assert!(doubling_is_monotone(), "doubling_is_monotone failed");
//!
//! fn main() {}
//! ```

use serde::{Deserialize, Serialize};
use tower_ips::Vector2;
use tower_num::{Integer, Natural, Rational, Real};

/// Level of the tower a law belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Natural numbers.
    Natural,
    /// Integers.
    Integer,
    /// Rationals.
    Rational,
    /// Reals.
    Real,
    /// The inner-product space over the reals.
    InnerProduct,
    /// Maps between levels.
    Injection,
}

impl Level {
    /// Stable lowercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Natural => "natural",
            Level::Integer => "integer",
            Level::Rational => "rational",
            Level::Real => "real",
            Level::InnerProduct => "inner_product",
            Level::Injection => "injection",
        }
    }
}

/// A named literal-witness law.
#[derive(Debug, Clone, Copy)]
pub struct WitnessLaw {
    /// Stable identifier.
    pub name: &'static str,
    /// Level the law is stated at.
    pub level: Level,
    /// The predicate itself.
    pub check: fn() -> bool,
}

const fn real(value: i64) -> Real {
    Real::from_i64(value)
}

const fn u_vec() -> Vector2 {
    Vector2::new(real(3), real(4))
}

const fn v_vec() -> Vector2 {
    Vector2::new(real(1), real(2))
}

/// `(2 + 3) + 4 == 2 + (3 + 4)`.
pub const fn nat_associative() -> bool {
    let a = Natural::new(2);
    let b = Natural::new(3);
    let c = Natural::new(4);
    a.plus(b).plus(c).equiv(a.plus(b.plus(c)))
}

/// `5 + 0 == 5 == 0 + 5`.
pub const fn nat_identity() -> bool {
    let a = Natural::new(5);
    a.plus(Natural::zero()).equiv(a) && Natural::zero().plus(a).equiv(a)
}

/// `(3 - 1) + (2 - 5) == (2 - 5) + (3 - 1)`.
pub const fn int_commutative() -> bool {
    let a = Integer::new(3, 1);
    let b = Integer::new(2, 5);
    a.plus(b).equiv(b.plus(a))
}

/// `(7 - 3) + -(7 - 3) == 0`.
pub const fn int_inverse() -> bool {
    let a = Integer::new(7, 3);
    a.plus(a.negate()).equiv(Integer::zero())
}

/// `(7, 3)` and `(11, 7)` denote the same integer.
pub const fn int_quotient_equality() -> bool {
    Integer::new(7, 3).equiv(Integer::new(11, 7)) && !Integer::new(7, 3).equiv(Integer::new(7, 4))
}

/// `3/4 · 5/7 == 5/7 · 3/4`.
pub const fn rat_mult_commutative() -> bool {
    let a = Rational::from_fraction(3, 4);
    let b = Rational::from_fraction(5, 7);
    a.times(b).equiv(b.times(a))
}

/// `2/3 · (1/2 + 3/5) == 2/3 · 1/2 + 2/3 · 3/5`.
pub const fn rat_distributive() -> bool {
    let a = Rational::from_fraction(2, 3);
    let b = Rational::from_fraction(1, 2);
    let c = Rational::from_fraction(3, 5);
    a.times(b.plus(c)).equiv(a.times(b).plus(a.times(c)))
}

/// `2/4 == 1/2` with and without normalisation.
pub const fn rat_quotient_equality() -> bool {
    let unreduced = Rational::from_fraction(2, 4);
    let reduced = Rational::from_fraction(1, 2);
    unreduced.equiv(reduced) && unreduced.normalize().equiv(reduced)
}

/// `3/4 · (3/4)⁻¹ == 1` and `-3/4 · (-3/4)⁻¹ == 1`.
pub const fn rat_inverse_cancels() -> bool {
    let positive = Rational::from_fraction(3, 4);
    let negative = Rational::from_fraction(-3, 4);
    let cancels_positive = match positive.checked_inverse() {
        Some(inv) => positive.times(inv).equiv(Rational::one()),
        None => false,
    };
    let cancels_negative = match negative.checked_inverse() {
        Some(inv) => negative.times(inv).equiv(Rational::one()),
        None => false,
    };
    cancels_positive && cancels_negative
}

/// Zero is the only value without an inverse.
pub const fn rat_zero_has_no_inverse() -> bool {
    Rational::zero().checked_inverse().is_none()
        && Rational::from_fraction(0, 9).checked_inverse().is_none()
        && Real::zero().checked_inverse().is_none()
}

/// `1/2 + 3/4 == 3/4 + 1/2` and `1/2 < 3/4` over the reals.
pub const fn real_ordered_commutative() -> bool {
    let a = Real::from_fraction(1, 2);
    let b = Real::from_fraction(3, 4);
    a.plus(b).equiv(b.plus(a)) && a.less_than(b) && a.at_most(b) && b.at_least(a)
}

/// `⟨u,v⟩ == ⟨v,u⟩` for `u = (3,4)`, `v = (1,2)`.
pub const fn inner_product_commutative() -> bool {
    let u = u_vec();
    let v = v_vec();
    u.inner(v).equiv(v.inner(u)) && u.inner(v).equiv(real(11))
}

/// `⟨v,v⟩ >= 0` for `v = (3,4)`.
pub const fn inner_product_positive() -> bool {
    let v = u_vec();
    v.inner(v).at_least(Real::zero())
}

/// `⟨2u + 3v, w⟩ == 2⟨u,w⟩ + 3⟨v,w⟩` for `w = (-2,5)`.
pub const fn inner_product_linear() -> bool {
    let u = u_vec();
    let v = v_vec();
    let w = Vector2::new(real(-2), real(5));
    let a = real(2);
    let b = Real::from_fraction(3, 1);
    let lhs = u.scale(a).plus(v.scale(b)).inner(w);
    let rhs = a.times(u.inner(w)).plus(b.times(v.inner(w)));
    lhs.equiv(rhs)
}

/// `⟨u,v⟩² <= ⟨u,u⟩⟨v,v⟩`, that is `121 <= 125`.
pub const fn inner_product_cauchy_schwarz() -> bool {
    let u = u_vec();
    let v = v_vec();
    let uv = u.inner(v);
    uv.times(uv).at_most(u.inner(u).times(v.inner(v)))
}

/// Zero and one survive ℕ → ℤ → ℚ → ℝ.
pub const fn injection_preserves_identities() -> bool {
    Natural::zero().inject().equiv(Integer::zero())
        && Natural::one().inject().equiv(Integer::one())
        && Integer::zero().inject().equiv(Rational::zero())
        && Integer::one().inject().equiv(Rational::one())
        && Rational::zero().inject().equiv(Real::zero())
        && Rational::one().inject().equiv(Real::one())
        && Natural::one().inject().inject().inject().equiv(Real::one())
}

/// `3 < 8` stays true, and `(7,3) == (11,7)` stays equal, after injecting.
pub const fn injection_preserves_order() -> bool {
    let small = Natural::new(3);
    let large = Natural::new(8);
    small.less_than(large)
        && small.inject().less_than(large.inject())
        && small.inject().inject().less_than(large.inject().inject())
        && small
            .inject()
            .inject()
            .inject()
            .less_than(large.inject().inject().inject())
        && Integer::new(7, 3)
            .inject()
            .equiv(Integer::new(11, 7).inject())
}

const _: () = assert!(nat_associative(), "nat_associative failed");
const _: () = assert!(nat_identity(), "nat_identity failed");
const _: () = assert!(int_commutative(), "int_commutative failed");
const _: () = assert!(int_inverse(), "int_inverse failed");
const _: () = assert!(int_quotient_equality(), "int_quotient_equality failed");
const _: () = assert!(rat_mult_commutative(), "rat_mult_commutative failed");
const _: () = assert!(rat_distributive(), "rat_distributive failed");
const _: () = assert!(rat_quotient_equality(), "rat_quotient_equality failed");
const _: () = assert!(rat_inverse_cancels(), "rat_inverse_cancels failed");
const _: () = assert!(rat_zero_has_no_inverse(), "rat_zero_has_no_inverse failed");
const _: () = assert!(real_ordered_commutative(), "real_ordered_commutative failed");
const _: () = assert!(inner_product_commutative(), "inner_product_commutative failed");
const _: () = assert!(inner_product_positive(), "inner_product_positive failed");
const _: () = assert!(inner_product_linear(), "inner_product_linear failed");
const _: () = assert!(
    inner_product_cauchy_schwarz(),
    "inner_product_cauchy_schwarz failed"
);
const _: () = assert!(
    injection_preserves_identities(),
    "injection_preserves_identities failed"
);
const _: () = assert!(
    injection_preserves_order(),
    "injection_preserves_order failed"
);

/// Every compile-time law, in evaluation order.
pub const WITNESS_LAWS: &[WitnessLaw] = &[
    WitnessLaw {
        name: "nat_associative",
        level: Level::Natural,
        check: nat_associative,
    },
    WitnessLaw {
        name: "nat_identity",
        level: Level::Natural,
        check: nat_identity,
    },
    WitnessLaw {
        name: "int_commutative",
        level: Level::Integer,
        check: int_commutative,
    },
    WitnessLaw {
        name: "int_inverse",
        level: Level::Integer,
        check: int_inverse,
    },
    WitnessLaw {
        name: "int_quotient_equality",
        level: Level::Integer,
        check: int_quotient_equality,
    },
    WitnessLaw {
        name: "rat_mult_commutative",
        level: Level::Rational,
        check: rat_mult_commutative,
    },
    WitnessLaw {
        name: "rat_distributive",
        level: Level::Rational,
        check: rat_distributive,
    },
    WitnessLaw {
        name: "rat_quotient_equality",
        level: Level::Rational,
        check: rat_quotient_equality,
    },
    WitnessLaw {
        name: "rat_inverse_cancels",
        level: Level::Rational,
        check: rat_inverse_cancels,
    },
    WitnessLaw {
        name: "rat_zero_has_no_inverse",
        level: Level::Rational,
        check: rat_zero_has_no_inverse,
    },
    WitnessLaw {
        name: "real_ordered_commutative",
        level: Level::Real,
        check: real_ordered_commutative,
    },
    WitnessLaw {
        name: "inner_product_commutative",
        level: Level::InnerProduct,
        check: inner_product_commutative,
    },
    WitnessLaw {
        name: "inner_product_positive",
        level: Level::InnerProduct,
        check: inner_product_positive,
    },
    WitnessLaw {
        name: "inner_product_linear",
        level: Level::InnerProduct,
        check: inner_product_linear,
    },
    WitnessLaw {
        name: "inner_product_cauchy_schwarz",
        level: Level::InnerProduct,
        check: inner_product_cauchy_schwarz,
    },
    WitnessLaw {
        name: "injection_preserves_identities",
        level: Level::Injection,
        check: injection_preserves_identities,
    },
    WitnessLaw {
        name: "injection_preserves_order",
        level: Level::Injection,
        check: injection_preserves_order,
    },
];
