// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Lookup failures raised by the provider registry.

use thiserror::Error;

use crate::traits::ProviderKind;

/// A target could not be resolved to a provider.
///
/// The dispatcher never surfaces these to its caller: both variants are
/// folded into the "unhandled targets" list of the dispatch outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Nothing was ever registered under this capability kind.
    #[error("Query provider type not found: {kind}")]
    KindNotFound { kind: ProviderKind },

    /// The partition exists but holds no provider under this name.
    #[error("Query provider not found for target: {target}")]
    TargetNotFound { kind: ProviderKind, target: String },
}

impl RegistryError {
    pub fn kind_not_found(kind: ProviderKind) -> Self {
        Self::KindNotFound { kind }
    }

    pub fn target_not_found(kind: ProviderKind, target: impl Into<String>) -> Self {
        Self::TargetNotFound {
            kind,
            target: target.into(),
        }
    }
}
