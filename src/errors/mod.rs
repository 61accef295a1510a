// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod model;
mod provider;
mod registry;

pub use config::ConfigError;
pub use model::ModelError;
pub use provider::ProviderError;
pub use registry::RegistryError;
