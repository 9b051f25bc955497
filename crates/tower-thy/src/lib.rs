#![deny(missing_docs)]
#![doc = "Algebraic law checks for the numeric tower: compile-time witness laws, generic predicates, witness plans and reports."]

/// Law runners and the startup self-check.
pub mod assertions;
/// Law predicates generic over capability constraints.
pub mod generic;
/// Literal-witness laws asserted during compilation.
pub mod laws;
/// User supplied witness plans.
pub mod plan;
/// Policy definitions controlling failure handling.
pub mod policies;
/// Law reports and their canonical JSON encoding.
pub mod report;

pub use assertions::{run_laws, run_plan, run_witness_laws, self_check};
pub use laws::{Level, WitnessLaw, WITNESS_LAWS};
pub use plan::{Fraction, VectorWitness, WitnessPlan};
pub use policies::Policy;
pub use report::{to_canonical_json_bytes, LawCheck, LawReport};
