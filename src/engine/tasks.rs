// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concurrent provider invocation with per-task failure capture.

use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::Instrument;

use crate::errors::ProviderError;
use crate::observability::messages::dispatch::{
    ProviderInvocationFailed, ProviderInvocationStarted, ProviderTaskPanicked,
};
use crate::observability::messages::StructuredLog;
use crate::traits::ProviderKind;

/// One pending provider call.
pub(crate) struct Invocation<T> {
    target: Option<String>,
    provider: &'static str,
    future: BoxFuture<'static, Result<Vec<T>, ProviderError>>,
}

impl<T> Invocation<T> {
    pub(crate) fn new<F>(target: Option<String>, provider: &'static str, future: F) -> Self
    where
        F: Future<Output = Result<Vec<T>, ProviderError>> + Send + 'static,
    {
        Self {
            target,
            provider,
            future: Box::pin(future),
        }
    }
}

/// Error text reported for a provider call that did not produce results.
pub(crate) fn invocation_error(
    target: Option<&str>,
    provider: &str,
    message: &dyn std::fmt::Display,
) -> String {
    format!(
        "Failed to query target:{} by provider:{}: {}",
        target.unwrap_or("NONE"),
        provider,
        message
    )
}

/// Text of a panic payload, when it carries one.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "provider panicked".to_string()
    }
}

/// Run every invocation concurrently and wait for all of them.
///
/// Results are flattened in invocation order regardless of which call
/// finishes first. A failing or panicking call contributes nothing to the
/// results and appends one entry to `errors`; those entries land in
/// completion order. Each task runs inside its own invocation span, nested
/// under whatever span the caller is in.
pub(crate) async fn invoke_all<T>(
    kind: ProviderKind,
    invocations: Vec<Invocation<T>>,
    errors: &mut Vec<String>,
) -> Vec<T>
where
    T: Send + 'static,
{
    if invocations.is_empty() {
        return Vec::new();
    }

    let failures = Arc::new(Mutex::new(Vec::new()));

    let handles: Vec<_> = invocations
        .into_iter()
        .map(|invocation| {
            let Invocation {
                target,
                provider,
                future,
            } = invocation;

            let started = ProviderInvocationStarted {
                kind,
                target: target.as_deref(),
                provider,
            };
            started.log();
            let span = started.span("provider_invocation");

            let failures = Arc::clone(&failures);
            let task_target = target.clone();

            let task = async move {
                let message = match AssertUnwindSafe(future).catch_unwind().await {
                    Ok(Ok(results)) => return results,
                    Ok(Err(error)) => {
                        ProviderInvocationFailed {
                            kind,
                            target: task_target.as_deref(),
                            provider,
                            error: &error,
                        }
                        .log();
                        error.to_string()
                    }
                    Err(payload) => {
                        let reason = panic_message(&*payload);
                        ProviderTaskPanicked {
                            kind,
                            target: task_target.as_deref(),
                            provider,
                            reason: &reason,
                        }
                        .log();
                        reason
                    }
                };

                failures
                    .lock()
                    .await
                    .push(invocation_error(task_target.as_deref(), provider, &message));
                Vec::new()
            };
            let handle = tokio::spawn(task.instrument(span));

            async move { (target, provider, handle.await) }
        })
        .collect();

    let joined = join_all(handles).await;

    let mut results = Vec::new();
    let mut cancelled = Vec::new();
    for (target, provider, outcome) in joined {
        match outcome {
            Ok(task_results) => results.extend(task_results),
            // Panics are caught inside the task; only runtime cancellation lands here.
            Err(join_error) => {
                let reason = join_error.to_string();
                ProviderTaskPanicked {
                    kind,
                    target: target.as_deref(),
                    provider,
                    reason: &reason,
                }
                .log();
                cancelled.push(invocation_error(target.as_deref(), provider, &reason));
            }
        }
    }

    errors.append(&mut *failures.lock().await);
    errors.append(&mut cancelled);
    results
}
