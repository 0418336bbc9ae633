//! argraph CLI - argument graph codec
//!
//! Usage: argraph [--json] [-v] [--config PATH] <COMMAND>
//!
//! Commands:
//!   check    Decode a graph and report what was linked
//!   convert  Decode a graph and write it back in normalized form
//!   schemes  List the registered argumentation schemes

use anyhow::Result;
use clap::Parser;

use argraph::presentation::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = commands::Context::load(&cli)?;

    match cli.command {
        Commands::Check { file, strict } => commands::check::cmd_check(&ctx, &file, strict),
        Commands::Convert {
            file,
            output,
            pretty,
            compact,
            check,
            strict,
        } => commands::convert::cmd_convert(
            &ctx,
            &file,
            commands::convert::ConvertArgs {
                output,
                pretty,
                compact,
                check,
                strict,
            },
        ),
        Commands::Schemes => commands::schemes::cmd_schemes(&ctx),
    }
}
