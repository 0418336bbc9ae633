use anyhow::Result;

use argraph::domain::services::SchemeRegistry;

use super::Context;

pub fn cmd_schemes(ctx: &Context) -> Result<()> {
    let registry = SchemeRegistry::global();
    ctx.config.seed_registry(registry)?;

    let schemes = registry.schemes();
    if ctx.json {
        let mut out = std::io::stdout().lock();
        for scheme in &schemes {
            argraph::presentation::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "scheme",
                    "command": "schemes",
                    "id": scheme.id(),
                    "weighing_function": scheme.weighing_function().as_str(),
                }),
            )?;
        }
        return Ok(());
    }

    let width = schemes.iter().map(|s| s.id().len()).max().unwrap_or(0);
    for scheme in &schemes {
        println!(
            "{:<width$}  {}",
            scheme.id(),
            scheme.weighing_function(),
            width = width
        );
    }
    if ctx.verbose > 0 {
        eprintln!("{} schemes registered", schemes.len());
    }
    Ok(())
}
