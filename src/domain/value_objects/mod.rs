//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod label;
mod proof_standard;
mod reference;
mod scheme;

pub use label::Label;
pub use proof_standard::ProofStandard;
pub use reference::{ReferenceKind, UnresolvedReference};
pub use scheme::{Scheme, WeighingFunction};
