// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::models::{
    AnnotationRequest, AnnotationResponse, QueryRequest, QueryResponse, SearchRequest,
    SearchResponse, TagKeyRequest, TagKeyResponse, TagValueRequest, TagValueResponse, TargetItem,
    TargetShape,
};

/// Capability a provider offers. Partitions the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Query,
    Search,
    Annotation,
    TagKey,
    TagValue,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::Query,
        ProviderKind::Search,
        ProviderKind::Annotation,
        ProviderKind::TagKey,
        ProviderKind::TagValue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Query => "query",
            ProviderKind::Search => "search",
            ProviderKind::Annotation => "annotation",
            ProviderKind::TagKey => "tag_key",
            ProviderKind::TagValue => "tag_value",
        }
    }
}

impl Display for ProviderKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers query targets with time series or tables.
///
/// A provider may return more responses than the single target item it was
/// handed, e.g. an extra derived series alongside the requested one.
#[async_trait]
pub trait QueryProvider: Send + Sync {
    fn target(&self) -> &str;

    /// Shapes this provider can produce.
    fn shapes(&self) -> &[TargetShape];

    fn supports(&self, shape: TargetShape) -> bool {
        self.shapes().contains(&shape)
    }

    async fn invoke(
        &self,
        item: &TargetItem,
        request: &QueryRequest,
    ) -> Result<Vec<QueryResponse>, ProviderError>;

    /// Provider type name used in error reports.
    fn name(&self) -> &'static str;
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn target(&self) -> &str;

    async fn invoke(&self, request: &SearchRequest) -> Result<Vec<SearchResponse>, ProviderError>;

    fn name(&self) -> &'static str;
}

#[async_trait]
pub trait AnnotationProvider: Send + Sync {
    fn target(&self) -> &str;

    async fn invoke(
        &self,
        request: &AnnotationRequest,
    ) -> Result<Vec<AnnotationResponse>, ProviderError>;

    fn name(&self) -> &'static str;
}

#[async_trait]
pub trait TagKeyProvider: Send + Sync {
    fn target(&self) -> &str;

    async fn invoke(&self, request: &TagKeyRequest) -> Result<Vec<TagKeyResponse>, ProviderError>;

    fn name(&self) -> &'static str;
}

#[async_trait]
pub trait TagValueProvider: Send + Sync {
    fn target(&self) -> &str;

    async fn invoke(
        &self,
        request: &TagValueRequest,
    ) -> Result<Vec<TagValueResponse>, ProviderError>;

    fn name(&self) -> &'static str;
}

/// A registered provider of any capability kind.
///
/// The registry stores this one type; the dispatcher matches on the variant
/// that corresponds to the partition it looked in.
#[derive(Clone)]
pub enum Provider {
    Query(Arc<dyn QueryProvider>),
    Search(Arc<dyn SearchProvider>),
    Annotation(Arc<dyn AnnotationProvider>),
    TagKey(Arc<dyn TagKeyProvider>),
    TagValue(Arc<dyn TagValueProvider>),
}

impl Provider {
    pub fn query(provider: impl QueryProvider + 'static) -> Self {
        Provider::Query(Arc::new(provider))
    }

    pub fn search(provider: impl SearchProvider + 'static) -> Self {
        Provider::Search(Arc::new(provider))
    }

    pub fn annotation(provider: impl AnnotationProvider + 'static) -> Self {
        Provider::Annotation(Arc::new(provider))
    }

    pub fn tag_key(provider: impl TagKeyProvider + 'static) -> Self {
        Provider::TagKey(Arc::new(provider))
    }

    pub fn tag_value(provider: impl TagValueProvider + 'static) -> Self {
        Provider::TagValue(Arc::new(provider))
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Query(_) => ProviderKind::Query,
            Provider::Search(_) => ProviderKind::Search,
            Provider::Annotation(_) => ProviderKind::Annotation,
            Provider::TagKey(_) => ProviderKind::TagKey,
            Provider::TagValue(_) => ProviderKind::TagValue,
        }
    }

    /// The target name the provider was built for.
    pub fn target(&self) -> &str {
        match self {
            Provider::Query(p) => p.target(),
            Provider::Search(p) => p.target(),
            Provider::Annotation(p) => p.target(),
            Provider::TagKey(p) => p.target(),
            Provider::TagValue(p) => p.target(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Query(p) => p.name(),
            Provider::Search(p) => p.name(),
            Provider::Annotation(p) => p.name(),
            Provider::TagKey(p) => p.name(),
            Provider::TagValue(p) => p.name(),
        }
    }

    pub fn as_query(&self) -> Option<&Arc<dyn QueryProvider>> {
        match self {
            Provider::Query(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_search(&self) -> Option<&Arc<dyn SearchProvider>> {
        match self {
            Provider::Search(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_annotation(&self) -> Option<&Arc<dyn AnnotationProvider>> {
        match self {
            Provider::Annotation(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_tag_key(&self) -> Option<&Arc<dyn TagKeyProvider>> {
        match self {
            Provider::TagKey(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_tag_value(&self) -> Option<&Arc<dyn TagValueProvider>> {
        match self {
            Provider::TagValue(p) => Some(p),
            _ => None,
        }
    }

    /// Whether both handles point at the same provider instance.
    pub fn same_instance(&self, other: &Provider) -> bool {
        match (self, other) {
            (Provider::Query(a), Provider::Query(b)) => Arc::ptr_eq(a, b),
            (Provider::Search(a), Provider::Search(b)) => Arc::ptr_eq(a, b),
            (Provider::Annotation(a), Provider::Annotation(b)) => Arc::ptr_eq(a, b),
            (Provider::TagKey(a), Provider::TagKey(b)) => Arc::ptr_eq(a, b),
            (Provider::TagValue(a), Provider::TagValue(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("kind", &self.kind())
            .field("target", &self.target())
            .field("name", &self.name())
            .finish()
    }
}

impl From<Arc<dyn QueryProvider>> for Provider {
    fn from(provider: Arc<dyn QueryProvider>) -> Self {
        Provider::Query(provider)
    }
}

impl From<Arc<dyn SearchProvider>> for Provider {
    fn from(provider: Arc<dyn SearchProvider>) -> Self {
        Provider::Search(provider)
    }
}

impl From<Arc<dyn AnnotationProvider>> for Provider {
    fn from(provider: Arc<dyn AnnotationProvider>) -> Self {
        Provider::Annotation(provider)
    }
}

impl From<Arc<dyn TagKeyProvider>> for Provider {
    fn from(provider: Arc<dyn TagKeyProvider>) -> Self {
        Provider::TagKey(provider)
    }
}

impl From<Arc<dyn TagValueProvider>> for Provider {
    fn from(provider: Arc<dyn TagValueProvider>) -> Self {
        Provider::TagValue(provider)
    }
}
