//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.
//! `-` as a FILE argument reads standard input.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// argraph - argument graph codec
#[derive(Parser, Debug)]
#[command(name = "argraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./argraph.toml, then user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a graph and report what was linked
    Check {
        /// Graph file in JSON wire format
        file: PathBuf,

        /// Fail on references to unknown statements
        #[arg(long)]
        strict: bool,
    },

    /// Decode a graph and write it back in normalized form
    Convert {
        /// Graph file in JSON wire format
        file: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Indent the output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Write the output on one line
        #[arg(long)]
        compact: bool,

        /// Only report whether FILE is already normalized (exits non-zero if not)
        #[arg(long, conflicts_with = "output")]
        check: bool,

        /// Fail on references to unknown statements
        #[arg(long)]
        strict: bool,
    },

    /// List the registered argumentation schemes
    Schemes,
}
