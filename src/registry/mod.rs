// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod observer;
mod provider_registry;

pub use observer::{ReplacementObserver, SilentObserver, TracingObserver};
pub use provider_registry::ProviderRegistry;
