//! Decode Event Port
//!
//! Provides an observable interface for decode operations.
//! Dropped references are reported here instead of failing the decode.

use crate::domain::value_objects::UnresolvedReference;

/// Event emitted while decoding a graph
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeEvent {
    /// Wire records parsed, linking about to start
    Started {
        format: &'static str,
        statement_count: usize,
        issue_count: usize,
        argument_count: usize,
    },

    /// A scheme name was unknown and a descriptor was registered for it
    SchemeSynthesized { scheme: String, argument: String },

    /// A reference named no known statement and was left out
    ReferenceDropped(UnresolvedReference),

    /// A role-tagged premise carried more than one entry; only `kept_role` was used
    PremiseAmbiguous {
        argument: String,
        kept_role: String,
        entry_count: usize,
    },

    /// Decode finished and produced a graph
    Completed {
        statement_count: usize,
        issue_count: usize,
        argument_count: usize,
        dropped_count: usize,
    },
}

/// Trait for receiving decode events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait DecodeEventSink: Send + Sync {
    fn on_event(&self, event: DecodeEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DecodeEventSink for NoopEventSink {
    fn on_event(&self, _event: DecodeEvent) {}
}
