//! Configuration module for argraph
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ARGRAPH_*)
//! 3. `--config <path>` or `./argraph.toml`
//! 4. User config (~/.config/argraph/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning,
    CONFIG_FILE_NAME,
};
pub use types::{Config, DecodeConfig, EncodeConfig};
