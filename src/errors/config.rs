// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::traits::ProviderKind;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A provider entry has an empty target name
    #[error("Provider entry {index} ({kind}) has an empty target name")]
    EmptyTarget { index: usize, kind: ProviderKind },

    /// An alias was given but is blank, so nothing could ever resolve it
    #[error("Provider entry {index} ('{target}') has an empty alias")]
    EmptyAlias { index: usize, target: String },

    /// No built-in implementation exists under this name
    #[error("Unknown {kind} provider implementation '{implementation}' for target '{target}'")]
    UnknownImplementation {
        kind: ProviderKind,
        target: String,
        implementation: String,
    },

    /// Query providers must declare at least one target shape
    #[error("Query provider '{target}' must declare at least one shape")]
    MissingShapes { target: String },

    /// Only query providers declare target shapes
    #[error("Provider '{target}' is a {kind} provider; only query providers declare shapes")]
    UnexpectedShapes { kind: ProviderKind, target: String },

    /// One or more entries failed validation; the message lists all of them
    #[error("Configuration validation failed:\n{0}")]
    Invalid(String),
}

impl ConfigError {
    /// Fold a list of validation failures into one `Invalid` error.
    pub fn invalid(errors: &[ConfigError]) -> Self {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        ConfigError::Invalid(messages.join("\n"))
    }
}
