// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for request dispatch.
//!
//! This module contains message types for logging events related to:
//! * Fan-out start and completion
//! * Targets that could not be resolved
//! * Provider invocation failures and panics

use crate::observability::messages::StructuredLog;
use crate::traits::ProviderKind;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Dispatch of one request started.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct DispatchStarted {
    pub kind: ProviderKind,
    pub candidate_count: usize,
}

impl Display for DispatchStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatching {} request: {} candidate targets",
            self.kind, self.candidate_count
        )
    }
}

impl StructuredLog for DispatchStarted {
    fn log(&self) {
        tracing::debug!(
            kind = %self.kind,
            candidate_count = self.candidate_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dispatch",
            span_name = name,
            kind = %self.kind,
            candidate_count = self.candidate_count,
        )
    }
}

/// Dispatch of one request finished, possibly with partial failures.
///
/// # Log Level
/// `info!` - One line per served request
pub struct DispatchCompleted {
    pub kind: ProviderKind,
    pub task_count: usize,
    pub result_count: usize,
    pub error_count: usize,
    pub duration: Duration,
}

impl Display for DispatchCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} dispatch completed: {} providers, {} results, {} errors in {:?}",
            self.kind, self.task_count, self.result_count, self.error_count, self.duration
        )
    }
}

impl StructuredLog for DispatchCompleted {
    fn log(&self) {
        tracing::info!(
            kind = %self.kind,
            task_count = self.task_count,
            result_count = self.result_count,
            error_count = self.error_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dispatch_completed",
            span_name = name,
            kind = %self.kind,
            result_count = self.result_count,
            error_count = self.error_count,
            duration = ?self.duration,
        )
    }
}

/// Some request targets had no provider.
///
/// # Log Level
/// `debug!` - Reported to the client through the error channel already
pub struct UnhandledTargets<'a> {
    pub kind: ProviderKind,
    pub targets: &'a [String],
}

impl Display for UnhandledTargets<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No {} provider for targets: {}",
            self.kind,
            self.targets.join(", ")
        )
    }
}

impl StructuredLog for UnhandledTargets<'_> {
    fn log(&self) {
        tracing::debug!(
            kind = %self.kind,
            unhandled_count = self.targets.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "unhandled_targets",
            span_name = name,
            kind = %self.kind,
            unhandled_count = self.targets.len(),
        )
    }
}

/// A provider's invoke returned an error.
///
/// # Log Level
/// `warn!` - Isolated failure, siblings keep running
pub struct ProviderInvocationFailed<'a> {
    pub kind: ProviderKind,
    pub target: Option<&'a str>,
    pub provider: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProviderInvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} provider '{}' failed for target:{}: {}",
            self.kind,
            self.provider,
            self.target.unwrap_or("NONE"),
            self.error
        )
    }
}

impl StructuredLog for ProviderInvocationFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            kind = %self.kind,
            target_name = self.target.unwrap_or("NONE"),
            provider = self.provider,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "provider_invocation_failed",
            span_name = name,
            kind = %self.kind,
            provider = self.provider,
            error = %self.error,
        )
    }
}

/// A provider task panicked or was aborted.
///
/// # Log Level
/// `error!` - Provider bug
pub struct ProviderTaskPanicked<'a> {
    pub kind: ProviderKind,
    pub target: Option<&'a str>,
    pub provider: &'a str,
    pub reason: &'a str,
}

impl Display for ProviderTaskPanicked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} provider '{}' task for target:{} did not complete: {}",
            self.kind,
            self.provider,
            self.target.unwrap_or("NONE"),
            self.reason
        )
    }
}

impl StructuredLog for ProviderTaskPanicked<'_> {
    fn log(&self) {
        tracing::error!(
            kind = %self.kind,
            target_name = self.target.unwrap_or("NONE"),
            provider = self.provider,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "provider_task_panicked",
            span_name = name,
            kind = %self.kind,
            provider = self.provider,
        )
    }
}

/// A provider task is about to run.
///
/// Its span wraps the spawned task, so anything the provider logs carries the
/// kind, target and provider name along with the enclosing dispatch span.
///
/// # Log Level
/// `debug!` - Per-provider detail
pub struct ProviderInvocationStarted<'a> {
    pub kind: ProviderKind,
    pub target: Option<&'a str>,
    pub provider: &'a str,
}

impl Display for ProviderInvocationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invoking {} provider '{}' for target:{}",
            self.kind,
            self.provider,
            self.target.unwrap_or("NONE")
        )
    }
}

impl StructuredLog for ProviderInvocationStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            kind = %self.kind,
            target_name = self.target.unwrap_or("NONE"),
            provider = self.provider,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "provider_invocation",
            span_name = name,
            kind = %self.kind,
            target_name = self.target.unwrap_or("NONE"),
            provider = self.provider,
        )
    }
}
