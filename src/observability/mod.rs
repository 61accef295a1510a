// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability: structured log messages and subscriber setup.
//!
//! Message types follow a struct-based pattern with `Display` so log lines
//! are defined in one place rather than as strings scattered through the
//! registry and dispatcher.
//!
//! * `messages::registry` - registration and replacement events
//! * `messages::dispatch` - dispatch lifecycle and provider failures
//! * `messages::config` - configuration loading

pub mod messages;
#[cfg(test)]
mod capture;

#[cfg(test)]
pub(crate) use capture::CapturedLogs;

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_level` when the variable is unset or invalid.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
