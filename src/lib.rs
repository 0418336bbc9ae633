//! argraph - codec for argument graphs
//!
//! argraph translates between a flat JSON wire format, where statements,
//! issues and arguments refer to one another by id, and a linked in-memory
//! graph consumed by argument evaluation engines. Decoding resolves every
//! reference, maintains the statement/issue and statement/argument back-links
//! and registers unknown argumentation schemes in a shared registry.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{ArgGraph, Argument, GraphError, Issue, Metadata, Premise, Statement};
pub use domain::ports::{DecodeEvent, DecodeEventSink, GraphCodec, NoopEventSink};
pub use domain::services::SchemeRegistry;
pub use domain::value_objects::{Label, ProofStandard, Scheme, WeighingFunction};
pub use error::{ArgraphError, ArgraphResult};
pub use infrastructure::json::{decode, encode, DecodeOptions, EncodeOptions, JsonCodec};
