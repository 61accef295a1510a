// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Failures raised by provider invocations.

use thiserror::Error;

use crate::errors::ModelError;

/// An error returned from a provider's `invoke`.
///
/// The dispatcher only ever looks at the rendered message, so providers are
/// free to use whichever variant reads best.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProviderError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
