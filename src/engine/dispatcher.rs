// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, Span};

use crate::engine::resolve::{quoted_list, resolve, unhandled_targets_error};
use crate::engine::tasks::{invoke_all, Invocation};
use crate::engine::{DispatchOutcome, DispatchRequest, DispatchResponse};
use crate::errors::ProviderError;
use crate::models::{
    compare_text, AnnotationRequest, AnnotationResponse, QueryRequest, QueryResponse, SearchRequest,
    SearchResponse, TagKeyRequest, TagKeyResponse, TagValueRequest, TagValueResponse, TargetItem,
    TextKey,
};
use crate::observability::messages::dispatch::{DispatchCompleted, DispatchStarted, UnhandledTargets};
use crate::observability::messages::StructuredLog;
use crate::registry::ProviderRegistry;
use crate::traits::{Provider, ProviderKind};

type ProviderFuture<T> = BoxFuture<'static, Result<Vec<T>, ProviderError>>;

/// Routes requests to registered providers and merges their answers.
///
/// The dispatcher holds no per-call state. Each call:
/// 1. resolves the request's candidate target names against the registry,
/// 2. spawns one task per resolved provider and joins all of them,
/// 3. flattens successful results in request order,
/// 4. reports unresolved targets and provider failures as error strings.
///
/// A failing provider never fails the call; the caller always gets whatever
/// the other providers produced.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ProviderRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Route any request kind to its dispatch method.
    pub async fn dispatch(&self, request: DispatchRequest) -> DispatchResponse {
        match request {
            DispatchRequest::Query(req) => DispatchResponse::Query(self.dispatch_query(req).await),
            DispatchRequest::Search(req) => DispatchResponse::Search(self.dispatch_search(req).await),
            DispatchRequest::Annotation(req) => {
                DispatchResponse::Annotation(self.dispatch_annotation(req).await)
            }
            DispatchRequest::TagKeys(req) => DispatchResponse::TagKeys(self.dispatch_tag_keys(req).await),
            DispatchRequest::TagValues(req) => {
                DispatchResponse::TagValues(self.dispatch_tag_values(req).await)
            }
        }
    }

    /// Query every target item, in order, with the shape it asked for.
    ///
    /// Items whose provider cannot produce the requested shape are reported as
    /// `Unhandled target types` and not invoked.
    pub async fn dispatch_query(&self, request: QueryRequest) -> DispatchOutcome<QueryResponse> {
        let kind = ProviderKind::Query;
        let started = Instant::now();
        let span = dispatch_started(kind, request.targets.len());

        let request = Arc::new(request);
        let resolution = resolve(
            &self.registry,
            request.targets.iter(),
            |item| item.target.as_str(),
            kind,
        );

        let mut unhandled_shapes: Vec<&TargetItem> = Vec::new();
        let mut invocations = Vec::new();
        for (item, provider) in resolution.handled {
            let Some(provider) = provider.as_query() else {
                continue;
            };

            if !provider.supports(item.shape) {
                unhandled_shapes.push(item);
                continue;
            }

            let provider = Arc::clone(provider);
            let name = provider.name();
            let request = Arc::clone(&request);
            let owned_item = item.clone();
            invocations.push(Invocation::new(Some(item.target.clone()), name, async move {
                provider.invoke(&owned_item, &request).await
            }));
        }

        let mut errors = self.unhandled_errors(kind, &resolution.unhandled);
        let shape_labels: Vec<String> = unhandled_shapes
            .iter()
            .map(|item| format!("{}:type:{}", item.target, item.shape))
            .collect();
        errors.extend(quoted_list(
            "Unhandled target types",
            shape_labels.iter().map(String::as_str),
        ));

        self.finish(kind, invocations, errors, started, span).await
    }

    /// Ask the search provider for `request.target`.
    ///
    /// Without a target this lists every query target name instead of
    /// dispatching anything.
    pub async fn dispatch_search(&self, request: SearchRequest) -> DispatchOutcome<SearchResponse> {
        let target = match request.target.as_deref() {
            Some(target) if !target.is_empty() => target.to_string(),
            _ => {
                let names = self.registry.query_target_names();
                return DispatchOutcome::new(
                    names.into_iter().map(SearchResponse::Target).collect(),
                    Vec::new(),
                );
            }
        };

        let request = Arc::new(request);
        self.fan_out(ProviderKind::Search, vec![target], true, |provider| {
            let provider = Arc::clone(provider.as_search()?);
            let request = Arc::clone(&request);
            Some(Box::pin(async move { provider.invoke(&request).await }) as ProviderFuture<_>)
        })
        .await
    }

    /// Ask the annotation providers named by the annotation's `query` and
    /// `name`. Names with no provider are ignored without an error.
    pub async fn dispatch_annotation(
        &self,
        request: AnnotationRequest,
    ) -> DispatchOutcome<AnnotationResponse> {
        let candidates = vec![
            request.annotation.query.clone(),
            request.annotation.name.clone(),
        ];

        let request = Arc::new(request);
        self.fan_out(ProviderKind::Annotation, candidates, false, |provider| {
            let provider = Arc::clone(provider.as_annotation()?);
            let request = Arc::clone(&request);
            Some(Box::pin(async move { provider.invoke(&request).await }) as ProviderFuture<_>)
        })
        .await
    }

    /// Ask every tag key provider, sorted by text.
    ///
    /// When no tag key provider was ever registered the answer is empty and
    /// carries no error.
    pub async fn dispatch_tag_keys(&self, request: TagKeyRequest) -> DispatchOutcome<TagKeyResponse> {
        let kind = ProviderKind::TagKey;
        let Some(providers) = self.registry.providers(kind) else {
            return DispatchOutcome::empty();
        };

        let started = Instant::now();
        let request = Arc::new(request);
        let invocations: Vec<_> = providers
            .filter_map(|(_, provider)| provider.as_tag_key())
            .map(|provider| {
                let provider = Arc::clone(provider);
                let name = provider.name();
                let request = Arc::clone(&request);
                Invocation::new(None, name, async move { provider.invoke(&request).await })
            })
            .collect();

        let span = dispatch_started(kind, invocations.len());

        let mut outcome = self
            .finish(kind, invocations, Vec::new(), started, span)
            .await;
        sort_by_text(&mut outcome.results);
        outcome
    }

    /// Ask the tag value provider registered under `request.key`, sorted by text.
    pub async fn dispatch_tag_values(
        &self,
        request: TagValueRequest,
    ) -> DispatchOutcome<TagValueResponse> {
        let key = request.key.clone();
        let request = Arc::new(request);

        let mut outcome = self
            .fan_out(ProviderKind::TagValue, vec![key], true, |provider| {
                let provider = Arc::clone(provider.as_tag_value()?);
                let request = Arc::clone(&request);
                Some(Box::pin(async move { provider.invoke(&request).await }) as ProviderFuture<_>)
            })
            .await;

        sort_by_text(&mut outcome.results);
        outcome
    }

    /// Resolve `names`, invoke what resolved, and collect the outcome.
    async fn fan_out<T, F>(
        &self,
        kind: ProviderKind,
        names: Vec<String>,
        report_unhandled: bool,
        mut invoke: F,
    ) -> DispatchOutcome<T>
    where
        T: Send + 'static,
        F: FnMut(&Provider) -> Option<ProviderFuture<T>>,
    {
        let started = Instant::now();
        let span = dispatch_started(kind, names.len());

        let resolution = resolve(&self.registry, names, |name| name.as_str(), kind);

        let invocations: Vec<_> = resolution
            .handled
            .into_iter()
            .filter_map(|(name, provider)| {
                invoke(provider).map(|future| Invocation::new(Some(name), provider.name(), future))
            })
            .collect();

        let errors = if report_unhandled {
            self.unhandled_errors(kind, &resolution.unhandled)
        } else {
            Vec::new()
        };

        self.finish(kind, invocations, errors, started, span).await
    }

    fn unhandled_errors(&self, kind: ProviderKind, unhandled: &[String]) -> Vec<String> {
        if !unhandled.is_empty() {
            UnhandledTargets {
                kind,
                targets: unhandled,
            }
            .log();
        }
        unhandled_targets_error(unhandled).into_iter().collect()
    }

    async fn finish<T>(
        &self,
        kind: ProviderKind,
        invocations: Vec<Invocation<T>>,
        mut errors: Vec<String>,
        started: Instant,
        span: Span,
    ) -> DispatchOutcome<T>
    where
        T: Send + 'static,
    {
        let task_count = invocations.len();
        let results = invoke_all(kind, invocations, &mut errors)
            .instrument(span.clone())
            .await;

        span.in_scope(|| {
            DispatchCompleted {
                kind,
                task_count,
                result_count: results.len(),
                error_count: errors.len(),
                duration: started.elapsed(),
            }
            .log()
        });

        DispatchOutcome::new(results, errors)
    }
}

/// Log the start of a dispatch and return the span its provider tasks run in.
fn dispatch_started(kind: ProviderKind, candidate_count: usize) -> Span {
    let message = DispatchStarted {
        kind,
        candidate_count,
    };
    message.log();
    message.span("dispatch")
}

fn sort_by_text<T: TextKey>(results: &mut [T]) {
    results.sort_by(|a, b| compare_text(a.text(), b.text()));
}
