//! Domain Services
//!
//! Shared, stateful helpers that outlive a single graph.

mod scheme_registry;

pub use scheme_registry::{Resolved, SchemeRegistry};
