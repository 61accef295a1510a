// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Provider implementations.
//!
//! ## Dummy Backend
//! Sample-data providers for every capability kind. They make a fresh
//! deployment answer dashboards out of the box and serve as end-to-end
//! fixtures.
//!
//! ## Stub Backend (Test-Only)
//! Scripted providers for dispatcher tests (only available in test builds):
//! - **StaticQueryProvider**: fixed answers with optional latency
//! - **FailingQueryProvider** / **FailingTagKeyProvider**: always error
//! - **PanickingQueryProvider**: panics inside `invoke`
//!
//! # Architecture
//!
//! ```text
//! Configuration → BuiltinProviderFactory → Provider → ProviderRegistry
//! ```

pub mod dummy;
pub mod factory;
#[cfg(test)]
pub mod stub;

pub use dummy::register_dummy_providers;
pub use factory::BuiltinProviderFactory;
