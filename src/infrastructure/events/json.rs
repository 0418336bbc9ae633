//! JSON Event Sink
//!
//! Outputs decode events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DecodeEvent, DecodeEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stderr
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DecodeEventSink for JsonEventSink {
    fn on_event(&self, event: DecodeEvent) {
        let json = match event {
            DecodeEvent::Started {
                format,
                statement_count,
                issue_count,
                argument_count,
            } => serde_json::json!({
                "event": "start",
                "command": "decode",
                "format": format,
                "statements": statement_count,
                "issues": issue_count,
                "arguments": argument_count,
            }),

            DecodeEvent::SchemeSynthesized { scheme, argument } => serde_json::json!({
                "event": "scheme_synthesized",
                "command": "decode",
                "scheme": scheme,
                "argument": argument,
            }),

            DecodeEvent::ReferenceDropped(reference) => serde_json::json!({
                "event": "reference_dropped",
                "command": "decode",
                "kind": reference.kind.as_str(),
                "owner": reference.owner,
                "target": reference.target,
            }),

            DecodeEvent::PremiseAmbiguous {
                argument,
                kept_role,
                entry_count,
            } => serde_json::json!({
                "event": "premise_ambiguous",
                "command": "decode",
                "argument": argument,
                "kept_role": kept_role,
                "entries": entry_count,
            }),

            DecodeEvent::Completed {
                statement_count,
                issue_count,
                argument_count,
                dropped_count,
            } => {
                let status = if dropped_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "decode",
                    "status": status,
                    "statements": statement_count,
                    "issues": issue_count,
                    "arguments": argument_count,
                    "dropped": dropped_count,
                })
            }
        };

        self.write_event(json);
    }
}
