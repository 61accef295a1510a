// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::engine::DispatchOutcome;
use crate::models::{
    AnnotationRequest, AnnotationResponse, QueryRequest, QueryResponse, SearchRequest,
    SearchResponse, TagKeyRequest, TagKeyResponse, TagValueRequest, TagValueResponse,
};
use crate::traits::ProviderKind;

/// A request of any kind, as handed to [`crate::engine::Dispatcher::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchRequest {
    Query(QueryRequest),
    Search(SearchRequest),
    Annotation(AnnotationRequest),
    TagKeys(TagKeyRequest),
    TagValues(TagValueRequest),
}

impl DispatchRequest {
    pub fn kind(&self) -> ProviderKind {
        match self {
            DispatchRequest::Query(_) => ProviderKind::Query,
            DispatchRequest::Search(_) => ProviderKind::Search,
            DispatchRequest::Annotation(_) => ProviderKind::Annotation,
            DispatchRequest::TagKeys(_) => ProviderKind::TagKey,
            DispatchRequest::TagValues(_) => ProviderKind::TagValue,
        }
    }

    /// Parse a JSON request body for the given kind.
    pub fn from_json(kind: ProviderKind, body: &str) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            ProviderKind::Query => DispatchRequest::Query(serde_json::from_str(body)?),
            ProviderKind::Search => DispatchRequest::Search(serde_json::from_str(body)?),
            ProviderKind::Annotation => DispatchRequest::Annotation(serde_json::from_str(body)?),
            ProviderKind::TagKey => DispatchRequest::TagKeys(serde_json::from_str(body)?),
            ProviderKind::TagValue => DispatchRequest::TagValues(serde_json::from_str(body)?),
        })
    }
}

/// Outcome of [`crate::engine::Dispatcher::dispatch`], typed by request kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchResponse {
    Query(DispatchOutcome<QueryResponse>),
    Search(DispatchOutcome<SearchResponse>),
    Annotation(DispatchOutcome<AnnotationResponse>),
    TagKeys(DispatchOutcome<TagKeyResponse>),
    TagValues(DispatchOutcome<TagValueResponse>),
}

impl DispatchResponse {
    pub fn kind(&self) -> ProviderKind {
        match self {
            DispatchResponse::Query(_) => ProviderKind::Query,
            DispatchResponse::Search(_) => ProviderKind::Search,
            DispatchResponse::Annotation(_) => ProviderKind::Annotation,
            DispatchResponse::TagKeys(_) => ProviderKind::TagKey,
            DispatchResponse::TagValues(_) => ProviderKind::TagValue,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            DispatchResponse::Query(o) => &o.errors,
            DispatchResponse::Search(o) => &o.errors,
            DispatchResponse::Annotation(o) => &o.errors,
            DispatchResponse::TagKeys(o) => &o.errors,
            DispatchResponse::TagValues(o) => &o.errors,
        }
    }

    pub fn error_header(&self) -> Option<String> {
        match self {
            DispatchResponse::Query(o) => o.error_header(),
            DispatchResponse::Search(o) => o.error_header(),
            DispatchResponse::Annotation(o) => o.error_header(),
            DispatchResponse::TagKeys(o) => o.error_header(),
            DispatchResponse::TagValues(o) => o.error_header(),
        }
    }

    /// The response body: a JSON array of results.
    pub fn results_json(&self) -> Result<Value, serde_json::Error> {
        match self {
            DispatchResponse::Query(o) => serde_json::to_value(&o.results),
            DispatchResponse::Search(o) => serde_json::to_value(&o.results),
            DispatchResponse::Annotation(o) => serde_json::to_value(&o.results),
            DispatchResponse::TagKeys(o) => serde_json::to_value(&o.results),
            DispatchResponse::TagValues(o) => serde_json::to_value(&o.results),
        }
    }
}
