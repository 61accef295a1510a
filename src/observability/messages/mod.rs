// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! `StructuredLog` to emit it through `tracing` with typed fields.
//!
//! * `registry` - provider registration and replacement
//! * `dispatch` - request fan-out, provider failures, outcomes
//! * `config` - configuration loading
//!
//! # Usage Pattern
//!
//! ```rust
//! use simplejson_registry::observability::messages::StructuredLog;
//! use simplejson_registry::observability::messages::dispatch::DispatchStarted;
//! use simplejson_registry::traits::ProviderKind;
//!
//! DispatchStarted {
//!     kind: ProviderKind::Query,
//!     candidate_count: 3,
//! }
//! .log();
//! ```

use tracing::Span;

pub mod config;
pub mod dispatch;
pub mod registry;

/// A log message that knows its level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level.
    fn log(&self);

    /// A span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
