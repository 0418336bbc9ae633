//! Domain Entities
//!
//! Core domain entities that have identity.
//! - `ArgGraph` - owns everything below and maintains their links
//! - `Statement` - an atomic claim
//! - `Issue` - a question with candidate statements (positions)
//! - `Argument` - a scheme instance linking premises to a conclusion

mod argument;
mod graph;
mod issue;
mod statement;

pub use argument::{Argument, Premise};
pub use graph::{ArgGraph, GraphError};
pub use issue::Issue;
pub use statement::Statement;

/// Opaque key/value annotations, passed through unchanged
pub type Metadata = serde_json::Map<String, serde_json::Value>;
