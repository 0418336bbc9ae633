use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use argraph::domain::services::SchemeRegistry;
use argraph::presentation::{create_event_sink, create_json_codec, EventOutput, GraphSummary};

use super::{read_input, Context};

pub fn cmd_check(ctx: &Context, file: &Path, strict: bool) -> Result<()> {
    let (source, content) = read_input(file)?;

    let mut config = ctx.config.clone();
    config.decode.strict_references |= strict;

    let events = if ctx.json {
        create_event_sink(EventOutput::JsonStdout)
    } else {
        create_event_sink(EventOutput::Console {
            verbose: ctx.verbose > 0,
        })
    };
    let codec = create_json_codec(&config, Arc::clone(SchemeRegistry::global()), events)?;

    let graph = codec
        .decode_str(&content)
        .with_context(|| format!("failed to decode {}", source))?;

    let summary = GraphSummary::of(&graph);
    if ctx.json {
        let mut out = std::io::stdout().lock();
        argraph::presentation::write_event(&mut out, &summary.to_json_event(&source))?;
    } else {
        print!("{}", summary.render_text(&source));
    }

    Ok(())
}
