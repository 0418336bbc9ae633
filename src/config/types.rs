//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::SchemeRegistry;
use crate::domain::value_objects::{Scheme, WeighingFunction};
use crate::error::{ArgraphError, ArgraphResult};
use crate::infrastructure::json::{DecodeOptions, EncodeOptions};

use super::loader;

/// Decode configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Fail on references to unknown statements instead of dropping them
    #[serde(default)]
    pub strict_references: bool,
}

/// Encode configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodeConfig {
    #[serde(default)]
    pub pretty: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub decode: DecodeConfig,

    #[serde(default)]
    pub encode: EncodeConfig,

    /// Scheme name -> weighing function name, registered before decoding
    #[serde(default)]
    pub schemes: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArgraphResult<Self> {
        loader::load_with_warnings(path).map(|(config, _warnings)| config)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict_references: self.decode.strict_references,
        }
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            pretty: self.encode.pretty,
        }
    }

    /// Parse the `[schemes]` table
    pub fn schemes(&self) -> ArgraphResult<Vec<Scheme>> {
        self.schemes
            .iter()
            .map(|(name, weight)| {
                weight
                    .parse::<WeighingFunction>()
                    .map(|w| Scheme::new(name.as_str(), w))
                    .map_err(|_| ArgraphError::UnknownWeighingFunction {
                        scheme: name.clone(),
                        name: weight.clone(),
                    })
            })
            .collect()
    }

    /// Register the configured schemes, replacing same-named entries
    pub fn seed_registry(&self, registry: &SchemeRegistry) -> ArgraphResult<()> {
        for scheme in self.schemes()? {
            registry.register(scheme);
        }
        Ok(())
    }
}
