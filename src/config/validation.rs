// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Every provider entry is checked on its own and all problems are reported
//! together, so one edit pass can fix a broken file:
//!
//! 1. **Target names** and aliases, when given, must be non-empty
//! 2. **Implementations** must exist for the entry's kind
//! 3. **Shapes** are required on query entries and rejected elsewhere
//!
//! Duplicate `(kind, name)` pairs are allowed. Registration is
//! last-write-wins and the registry logs each replacement.

use crate::backends::BuiltinProviderFactory;
use crate::config::{Config, ProviderConfig};
use crate::errors::ConfigError;
use crate::traits::ProviderKind;

/// Validate every provider entry in `config`.
///
/// # Returns
///
/// * `Ok(())` - Every entry can be built
/// * `Err(Vec<ConfigError>)` - All problems found, in entry order
pub fn validate_config(config: &Config) -> Result<(), Vec<ConfigError>> {
    let errors: Vec<ConfigError> = config
        .providers
        .iter()
        .enumerate()
        .flat_map(|(index, provider)| validate_provider(index, provider))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_provider(index: usize, provider: &ProviderConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if provider.target.trim().is_empty() {
        errors.push(ConfigError::EmptyTarget {
            index,
            kind: provider.kind,
        });
    }

    if provider.alias.as_deref().is_some_and(|alias| alias.trim().is_empty()) {
        errors.push(ConfigError::EmptyAlias {
            index,
            target: provider.target.clone(),
        });
    }

    if !BuiltinProviderFactory::is_implementation_available(provider.kind, &provider.implementation) {
        errors.push(ConfigError::UnknownImplementation {
            kind: provider.kind,
            target: provider.target.clone(),
            implementation: provider.implementation.clone(),
        });
    }

    match (provider.kind, provider.shapes.is_empty()) {
        (ProviderKind::Query, true) => errors.push(ConfigError::MissingShapes {
            target: provider.target.clone(),
        }),
        (ProviderKind::Query, false) | (_, true) => {}
        (kind, false) => errors.push(ConfigError::UnexpectedShapes {
            kind,
            target: provider.target.clone(),
        }),
    }

    errors
}
