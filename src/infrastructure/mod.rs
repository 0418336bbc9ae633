//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `json` - the JSON graph codec
//! - `events` - decode event sinks (NDJSON, console)

pub mod events;
pub mod json;
