//! Command implementations for the argraph binary

pub mod check;
pub mod convert;
pub mod schemes;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context as _, Result};

use argraph::config::{self, Config};
use argraph::presentation::Cli;

/// Settings shared by every command
pub struct Context {
    pub json: bool,
    pub verbose: u8,
    pub config: Config,
}

impl Context {
    /// Resolve the layered configuration and report unknown keys
    pub fn load(cli: &Cli) -> Result<Self> {
        let working_dir = std::env::current_dir()?;
        let (config, warnings) = config::load_layered(cli.config.as_deref(), &working_dir)?;
        for warning in &warnings {
            eprintln!("warning: {}", warning);
        }

        Ok(Self {
            json: cli.json,
            verbose: cli.verbose,
            config,
        })
    }
}

/// Read a graph file, or standard input for `-`.
///
/// Returns the name used in messages alongside the content.
pub fn read_input(file: &Path) -> Result<(String, String)> {
    if file == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read standard input")?;
        return Ok(("<stdin>".to_string(), content));
    }

    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    Ok((file.display().to_string(), content))
}
