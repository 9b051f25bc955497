#![deny(missing_docs)]
#![doc = "Two dimensional inner-product space over the tower reals, with generic axiom checks."]

mod vector;
mod verify;

pub use vector::Vector2;
pub use verify::VerifyInnerProduct;

use tower_core::{require_capability, InnerProductSpace};

require_capability!(InnerProductSpace: Vector2);
