//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating codecs with their dependencies
//! - Output formatting (text/JSON, diffs)

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{codec_for_format, create_event_sink, create_json_codec, EventOutput};
pub use output::{unified_diff, write_event, GraphSummary};
