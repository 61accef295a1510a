// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Hooks for registry side effects.
//!
//! Replacing an existing target is allowed but worth a warning. The registry
//! reports it through a `ReplacementObserver` instead of logging directly, so
//! tests can capture the event and embedders can route it elsewhere.

use crate::observability::messages::registry::TargetReplaced;
use crate::observability::messages::StructuredLog;

pub trait ReplacementObserver: Send + Sync {
    fn target_replaced(&self, event: &TargetReplaced<'_>);
}

/// Default observer: emits a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ReplacementObserver for TracingObserver {
    fn target_replaced(&self, event: &TargetReplaced<'_>) {
        event.log();
    }
}

/// Discards replacement events.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl ReplacementObserver for SilentObserver {
    fn target_replaced(&self, _event: &TargetReplaced<'_>) {}
}
