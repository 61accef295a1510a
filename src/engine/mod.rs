// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod dispatcher;
pub mod outcome;
pub mod request;
mod resolve;
mod tasks;
#[cfg(test)]
mod integration_tests;

pub use dispatcher::Dispatcher;
pub use outcome::{liveness, DispatchOutcome, ERROR_HEADER, ERROR_SEPARATOR};
pub use request::{DispatchRequest, DispatchResponse};
