//! GraphCodec port - byte-stream codecs for argument graphs
//!
//! JSON is the only codec in this crate. Sibling formats implement the same
//! trait so callers can pick a codec by name.

use std::io::{Read, Write};

use crate::domain::entities::ArgGraph;
use crate::error::ArgraphResult;

pub trait GraphCodec: Send + Sync {
    /// Short format name, e.g. `"json"`
    fn format(&self) -> &'static str;

    /// Parse a graph from a byte stream. No partial graph is returned on error.
    fn decode(&self, reader: &mut dyn Read) -> ArgraphResult<ArgGraph>;

    /// Write a graph to a byte sink without modifying it.
    fn encode(&self, graph: &ArgGraph, writer: &mut dyn Write) -> ArgraphResult<()>;
}
