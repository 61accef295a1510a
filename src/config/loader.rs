// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_IMPLEMENTATION, DEFAULT_LOG_LEVEL};
use crate::errors::ConfigError;
use crate::models::TargetShape;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use crate::traits::ProviderKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration: log level plus the providers to register.
///
/// # Example
/// ```yaml
/// log_level: info
/// providers:
///   - kind: query
///     target: Dummy
///     implementation: dummy
///     shapes: [timeserie, table]
///   - kind: search
///     target: var1
///   - kind: tag_value
///     target: TagKey1
///     alias: host
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_implementation() -> String {
    DEFAULT_IMPLEMENTATION.to_string()
}

/// One provider to build and register.
///
/// # Fields
/// * `kind` - Registry partition the provider goes into
/// * `target` - Target name the provider is built for
/// * `implementation` - Built-in implementation name (defaults to `dummy`)
/// * `shapes` - Shapes a query provider supports; query providers only
/// * `alias` - Register under this name instead of `target`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub target: String,
    #[serde(default = "default_implementation")]
    pub implementation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<TargetShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            implementation: default_implementation(),
            shapes: Vec::new(),
            alias: None,
        }
    }

    pub fn with_shapes(mut self, shapes: Vec<TargetShape>) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Name the provider is registered under.
    pub fn registered_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.target)
    }
}

impl Config {
    /// The built-in demonstration wiring: every dummy provider under its
    /// usual target name.
    pub fn default_demo() -> Self {
        Self {
            log_level: default_log_level(),
            providers: vec![
                ProviderConfig::new(ProviderKind::Query, "Dummy")
                    .with_shapes(vec![TargetShape::TimeSeries, TargetShape::Table]),
                ProviderConfig::new(ProviderKind::Search, "var1"),
                ProviderConfig::new(ProviderKind::Annotation, "Dummy"),
                ProviderConfig::new(ProviderKind::TagKey, "Dummy"),
                ProviderConfig::new(ProviderKind::TagValue, "TagKey1"),
            ],
        }
    }

    /// Report where this config came from. Call once tracing is installed.
    pub fn log_loaded(&self, path: &str) {
        ConfigLoaded {
            path,
            provider_count: self.providers.len(),
        }
        .log();
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load a config and reject it unless every provider entry is buildable.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(errors) = crate::config::validate_config(&cfg) {
        return Err(ConfigError::invalid(&errors));
    }

    Ok(cfg)
}
