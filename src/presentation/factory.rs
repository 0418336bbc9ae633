//! Codec Factory
//!
//! Creates codecs with registry, options and event sinks wired up.
//! This is the dependency injection point for the CLI.

use std::io;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{DecodeEventSink, GraphCodec, NoopEventSink};
use crate::domain::services::SchemeRegistry;
use crate::error::ArgraphResult;
use crate::infrastructure::events::{ConsoleEventSink, JsonEventSink};
use crate::infrastructure::json::JsonCodec;

/// Where decode events should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutput {
    /// NDJSON on stdout (stdout carries nothing else)
    JsonStdout,
    /// NDJSON on stderr (stdout carries a graph)
    JsonStderr,
    /// Human-readable warnings on stderr
    Console { verbose: bool },
    Silent,
}

pub fn create_event_sink(output: EventOutput) -> Arc<dyn DecodeEventSink> {
    match output {
        EventOutput::JsonStdout => Arc::new(JsonEventSink::with_writer(io::stdout())),
        EventOutput::JsonStderr => Arc::new(JsonEventSink::stderr()),
        EventOutput::Console { verbose } => Arc::new(ConsoleEventSink::stderr(verbose)),
        EventOutput::Silent => Arc::new(NoopEventSink),
    }
}

/// Seed `registry` from the config and build a JSON codec over it
pub fn create_json_codec(
    config: &Config,
    registry: Arc<SchemeRegistry>,
    events: Arc<dyn DecodeEventSink>,
) -> ArgraphResult<JsonCodec> {
    config.seed_registry(&registry)?;
    Ok(JsonCodec::with_registry(registry)
        .with_event_sink(events)
        .with_decode_options(config.decode_options())
        .with_encode_options(config.encode_options()))
}

/// Codec for a format name; `json` is the only format built in.
pub fn codec_for_format(
    format: &str,
    config: &Config,
    events: Arc<dyn DecodeEventSink>,
) -> ArgraphResult<Option<Box<dyn GraphCodec>>> {
    match format {
        "json" => {
            let codec =
                create_json_codec(config, Arc::clone(SchemeRegistry::global()), events)?;
            Ok(Some(Box::new(codec)))
        }
        _ => Ok(None),
    }
}
