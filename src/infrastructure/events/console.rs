//! Console Event Sink
//!
//! Prints decode warnings for humans. Progress events are shown only when
//! verbose.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DecodeEvent, DecodeEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stderr(verbose: bool) -> Self {
        Self::with_writer(io::stderr(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl DecodeEventSink for ConsoleEventSink {
    fn on_event(&self, event: DecodeEvent) {
        match event {
            DecodeEvent::ReferenceDropped(reference) => {
                self.line(format!("warning: {}; dropped", reference));
            }
            DecodeEvent::PremiseAmbiguous {
                argument,
                kept_role,
                entry_count,
            } => {
                self.line(format!(
                    "warning: premise of '{}' has {} roles; using '{}'",
                    argument, entry_count, kept_role
                ));
            }
            DecodeEvent::SchemeSynthesized { scheme, argument } if self.verbose => {
                self.line(format!(
                    "note: scheme '{}' (used by '{}') is not registered; assuming linked",
                    scheme, argument
                ));
            }
            DecodeEvent::Started {
                format,
                statement_count,
                issue_count,
                argument_count,
            } if self.verbose => {
                self.line(format!(
                    "decoding {}: {} statements, {} issues, {} arguments",
                    format, statement_count, issue_count, argument_count
                ));
            }
            _ => {}
        }
    }
}
