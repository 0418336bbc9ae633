//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod decode_events;
pub mod graph_codec;

pub use decode_events::{DecodeEvent, DecodeEventSink, NoopEventSink};
pub use graph_codec::GraphCodec;
