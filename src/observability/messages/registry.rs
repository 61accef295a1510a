// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for provider registration.

use crate::observability::messages::StructuredLog;
use crate::traits::ProviderKind;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A provider was added to the registry.
///
/// # Log Level
/// `debug!` - Startup wiring detail
pub struct ProviderRegistered<'a> {
    pub kind: ProviderKind,
    pub target: &'a str,
    pub provider: &'a str,
}

impl Display for ProviderRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered {} provider '{}' for target:{}",
            self.kind, self.provider, self.target
        )
    }
}

impl StructuredLog for ProviderRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            kind = %self.kind,
            target_name = self.target,
            provider = self.provider,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "provider_registered",
            span_name = name,
            kind = %self.kind,
            target_name = self.target,
            provider = self.provider,
        )
    }
}

/// An existing `(kind, target)` entry was overwritten.
///
/// # Log Level
/// `warn!` - Last registration wins, but this usually means a wiring mistake
pub struct TargetReplaced<'a> {
    pub kind: ProviderKind,
    pub target: &'a str,
    pub previous: &'a str,
    pub replacement: &'a str,
}

impl Display for TargetReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Replacing existing target:{}", self.target)
    }
}

impl StructuredLog for TargetReplaced<'_> {
    fn log(&self) {
        tracing::warn!(
            kind = %self.kind,
            target_name = self.target,
            previous = self.previous,
            replacement = self.replacement,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "target_replaced",
            span_name = name,
            kind = %self.kind,
            target_name = self.target,
        )
    }
}
