// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // provider implementations
pub mod config;     // config + runtime wiring
pub mod engine;     // request dispatch
pub mod errors;     // error handling
pub mod models;     // SimpleJSON request/response models
pub mod observability;
pub mod registry;   // (kind, target) -> provider
pub mod traits;     // provider abstractions
