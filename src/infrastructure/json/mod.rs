//! JSON codec for argument graphs
//!
//! - `wire` - serde records of the wire format
//! - `decode` - wire records -> linked graph
//! - `encode` - graph -> wire records
//!
//! `JsonCodec` ties them to byte streams, a scheme registry and an event sink.

mod decode;
mod encode;
mod options;
pub mod wire;

use std::io::{Read, Write};
use std::sync::Arc;

pub use decode::Decoder;
pub use encode::{graph_to_wire, write_graph};
pub use options::{DecodeOptions, EncodeOptions};

use crate::domain::entities::ArgGraph;
use crate::domain::ports::{DecodeEventSink, GraphCodec, NoopEventSink};
use crate::domain::services::SchemeRegistry;
use crate::error::ArgraphResult;

pub(crate) const FORMAT: &str = "json";

pub struct JsonCodec {
    registry: Arc<SchemeRegistry>,
    events: Arc<dyn DecodeEventSink>,
    decode_options: DecodeOptions,
    encode_options: EncodeOptions,
}

impl JsonCodec {
    /// Codec sharing the process-wide scheme registry
    pub fn new() -> Self {
        Self::with_registry(Arc::clone(SchemeRegistry::global()))
    }

    /// Codec scoped to an explicit scheme registry
    pub fn with_registry(registry: Arc<SchemeRegistry>) -> Self {
        Self {
            registry,
            events: Arc::new(NoopEventSink),
            decode_options: DecodeOptions::default(),
            encode_options: EncodeOptions::default(),
        }
    }

    pub fn with_event_sink(mut self, events: Arc<dyn DecodeEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn with_decode_options(mut self, options: DecodeOptions) -> Self {
        self.decode_options = options;
        self
    }

    pub fn with_encode_options(mut self, options: EncodeOptions) -> Self {
        self.encode_options = options;
        self
    }

    pub fn registry(&self) -> &Arc<SchemeRegistry> {
        &self.registry
    }

    fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.registry, self.events.as_ref(), self.decode_options)
    }

    pub fn decode_str(&self, input: &str) -> ArgraphResult<ArgGraph> {
        self.decoder().read_graph(&mut input.as_bytes())
    }

    pub fn decode_wire(&self, wire: wire::WireArgGraph) -> ArgraphResult<ArgGraph> {
        self.decoder().wire_to_graph(wire)
    }

    pub fn encode_to_string(&self, graph: &ArgGraph) -> ArgraphResult<String> {
        let mut out = Vec::new();
        write_graph(graph, &mut out, self.encode_options)?;
        // serde_json only ever writes UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphCodec for JsonCodec {
    fn format(&self) -> &'static str {
        FORMAT
    }

    fn decode(&self, reader: &mut dyn Read) -> ArgraphResult<ArgGraph> {
        self.decoder().read_graph(reader)
    }

    fn encode(&self, graph: &ArgGraph, writer: &mut dyn Write) -> ArgraphResult<()> {
        write_graph(graph, writer, self.encode_options)
    }
}

/// Decode with the process-wide registry and default options
pub fn decode(reader: &mut dyn Read) -> ArgraphResult<ArgGraph> {
    JsonCodec::new().decode(reader)
}

/// Encode compactly
pub fn encode(graph: &ArgGraph, writer: &mut dyn Write) -> ArgraphResult<()> {
    write_graph(graph, writer, EncodeOptions::default())
}
