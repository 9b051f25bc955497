#![deny(missing_docs)]
//! Quotient constructions of ℕ, ℤ, ℚ and ℝ.
//!
//! * [`Natural`] is a commutative monoid under `+` and `*`.
//! * [`Integer`] is the quotient of natural pairs `(pos, neg)` and a ring.
//! * [`Rational`] is the quotient of integer/natural fractions and an ordered field.
//! * [`Real`] wraps one rational approximation and is an ordered field by delegation.
//!
//! All arithmetic is available as `const fn` so that laws over literal values
//! can be checked during compilation. The capability requirements below are
//! part of the build: a level that loses an operation stops compiling.
//!
//! Naturals have no negation, so they are not a group:
//!
//! ```compile_fail
//! use tower_core::{require_capability, Group};
//! use tower_num::Natural;
//!
//! require_capability!(Group: Natural);
//! ```
//!
//! Integers have no multiplicative inverse:
//!
//! ```compile_fail
//! use tower_core::{require_capability, Field};
//! use tower_num::Integer;
//!
//! require_capability!(Field: Integer);
//! ```

mod inject;
mod integer;
mod natural;
mod rational;
mod real;

pub use integer::Integer;
pub use natural::Natural;
pub use rational::Rational;
pub use real::Real;

use tower_core::{require_capability, Inject, Monoid, OrderedField, Regular, Ring};

require_capability!(Regular: Natural, Integer, Rational, Real);
require_capability!(Monoid: Natural);
require_capability!(Ring: Integer);
require_capability!(OrderedField: Rational, Real);
require_capability!(Inject: Natural, Integer, Rational);
