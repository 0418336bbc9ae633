use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use is_terminal::IsTerminal;

use argraph::domain::services::SchemeRegistry;
use argraph::presentation::{create_event_sink, create_json_codec, unified_diff, EventOutput};

use super::{read_input, Context};

pub struct ConvertArgs {
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub compact: bool,
    pub check: bool,
    pub strict: bool,
}

pub fn cmd_convert(ctx: &Context, file: &Path, args: ConvertArgs) -> Result<()> {
    let (source, content) = read_input(file)?;

    let mut config = ctx.config.clone();
    config.decode.strict_references |= args.strict;
    config.encode.pretty = resolve_pretty(&args, config.encode.pretty);

    // stdout carries the graph, so events go to stderr.
    let events = if ctx.json {
        create_event_sink(EventOutput::JsonStderr)
    } else {
        create_event_sink(EventOutput::Console {
            verbose: ctx.verbose > 0,
        })
    };
    let codec = create_json_codec(&config, Arc::clone(SchemeRegistry::global()), events)?;

    let graph = codec
        .decode_str(&content)
        .with_context(|| format!("failed to decode {}", source))?;
    let mut normalized = codec.encode_to_string(&graph)?;
    normalized.push('\n');

    if args.check {
        if content == normalized {
            if !ctx.json {
                eprintln!("{} is normalized", source);
            }
            return Ok(());
        }
        print!("{}", unified_diff(&source, &content, &normalized));
        bail!("{} is not normalized", source);
    }

    match &args.output {
        Some(path) => fs::write(path, normalized)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut out = io::stdout().lock();
            out.write_all(normalized.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Explicit flags win; otherwise indent when writing to a terminal.
fn resolve_pretty(args: &ConvertArgs, configured: bool) -> bool {
    if args.pretty {
        return true;
    }
    if args.compact {
        return false;
    }
    let interactive = args.output.is_none() && !args.check && io::stdout().is_terminal();
    configured || interactive
}
