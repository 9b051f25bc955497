#![deny(missing_docs)]
#![doc = "Capability constraints, injection contract and shared error types for the numeric tower."]

pub mod capabilities;
pub mod errors;
pub mod schema;

pub use capabilities::{
    AdditiveIdentity, CheckedArithmetic, Field, Group, Inject, InnerProductSpace, Invertible,
    Magma, Monoid, MultiplicativeIdentity, OrderedField, Regular, Ring, Semigroup, TotallyOrdered,
};
pub use errors::{ErrorInfo, TowerError};
pub use schema::SchemaVersion;
