//! Event Sink Implementations
//!
//! Provides concrete implementations of DecodeEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable warnings on stderr

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
