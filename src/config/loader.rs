//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArgraphError, ArgraphResult};

use super::types::Config;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "argraph.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ArgraphResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ArgraphError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration in priority order:
/// explicit path, `./argraph.toml`, user config, defaults.
///
/// An explicit path must exist; the other locations are optional.
/// Environment overrides are applied last.
pub fn load_layered(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> ArgraphResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(working_dir.join(CONFIG_FILE_NAME)),
        user_config_path(),
    ];
    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (ARGRAPH_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // ARGRAPH_STRICT_REFERENCES
    if let Ok(val) = std::env::var("ARGRAPH_STRICT_REFERENCES") {
        config.decode.strict_references = parse_flag(&val);
    }

    // ARGRAPH_PRETTY
    if let Ok(val) = std::env::var("ARGRAPH_PRETTY") {
        config.encode.pretty = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

/// `~/.config/argraph/config.toml` (or the platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("argraph").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["decode", "strict_references", "encode", "pretty", "schemes"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
