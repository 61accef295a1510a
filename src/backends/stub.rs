// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test-only providers with scripted behavior.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::models::{
    AnnotationRequest, AnnotationResponse, ColumnType, QueryRequest, QueryResponse, SearchRequest,
    SearchResponse, TableResponse, TagKeyRequest, TagKeyResponse, TagValueRequest,
    TagValueResponse, TargetItem, TargetShape, TimeSeriesResponse,
};
use crate::traits::{
    AnnotationProvider, QueryProvider, SearchProvider, TagKeyProvider, TagValueProvider,
};

/// Answers with one empty response per item, optionally after a delay.
pub struct StaticQueryProvider {
    target: String,
    shapes: Vec<TargetShape>,
    delay: Option<Duration>,
    extra_series: Option<String>,
}

impl StaticQueryProvider {
    pub fn new(target: &str, shapes: Vec<TargetShape>) -> Self {
        Self {
            target: target.to_string(),
            shapes,
            delay: None,
            extra_series: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Also answer with an additional, differently named time series.
    pub fn with_extra_series(mut self, name: &str) -> Self {
        self.extra_series = Some(name.to_string());
        self
    }
}

#[async_trait]
impl QueryProvider for StaticQueryProvider {
    fn target(&self) -> &str {
        &self.target
    }

    fn shapes(&self) -> &[TargetShape] {
        &self.shapes
    }

    async fn invoke(
        &self,
        item: &TargetItem,
        _request: &QueryRequest,
    ) -> Result<Vec<QueryResponse>, ProviderError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut responses = vec![match item.shape {
            TargetShape::TimeSeries => {
                let mut series = TimeSeriesResponse::for_target(item);
                series.push_point(1, 1_000);
                QueryResponse::from(series)
            }
            TargetShape::Table => QueryResponse::from(TableResponse::for_target(item)),
        }];

        if let Some(name) = &self.extra_series {
            responses.push(TimeSeriesResponse::new(name.clone(), Some(item.ref_id.clone())).into());
        }

        Ok(responses)
    }

    fn name(&self) -> &'static str {
        "static_query"
    }
}

/// Supports every shape and always fails with the given message.
pub struct FailingQueryProvider {
    target: String,
    message: String,
}

impl FailingQueryProvider {
    pub fn new(target: &str, message: &str) -> Self {
        Self {
            target: target.to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl QueryProvider for FailingQueryProvider {
    fn target(&self) -> &str {
        &self.target
    }

    fn shapes(&self) -> &[TargetShape] {
        &[TargetShape::TimeSeries, TargetShape::Table]
    }

    async fn invoke(
        &self,
        _item: &TargetItem,
        _request: &QueryRequest,
    ) -> Result<Vec<QueryResponse>, ProviderError> {
        Err(ProviderError::message(self.message.clone()))
    }

    fn name(&self) -> &'static str {
        "failing_query"
    }
}

/// Panics inside `invoke`.
pub struct PanickingQueryProvider {
    target: String,
}

impl PanickingQueryProvider {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }
}

#[async_trait]
impl QueryProvider for PanickingQueryProvider {
    fn target(&self) -> &str {
        &self.target
    }

    fn shapes(&self) -> &[TargetShape] {
        &[TargetShape::TimeSeries]
    }

    async fn invoke(
        &self,
        _item: &TargetItem,
        _request: &QueryRequest,
    ) -> Result<Vec<QueryResponse>, ProviderError> {
        panic!("provider {} blew up", self.target);
    }

    fn name(&self) -> &'static str {
        "panicking_query"
    }
}

/// Returns `{text, value}` entries, value being the entry's index.
pub struct StaticSearchProvider {
    target: String,
    entries: Vec<String>,
}

impl StaticSearchProvider {
    pub fn new(target: &str, entries: &[&str]) -> Self {
        Self {
            target: target.to_string(),
            entries: entries.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[async_trait]
impl SearchProvider for StaticSearchProvider {
    fn target(&self) -> &str {
        &self.target
    }

    async fn invoke(&self, _request: &SearchRequest) -> Result<Vec<SearchResponse>, ProviderError> {
        Ok(self
            .entries
            .iter()
            .enumerate()
            .map(|(i, text)| SearchResponse::entry(text.as_str(), i as i64))
            .collect())
    }

    fn name(&self) -> &'static str {
        "static_search"
    }
}

/// Answers with one annotation titled after its own target.
pub struct StaticAnnotationProvider {
    target: String,
}

impl StaticAnnotationProvider {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }
}

#[async_trait]
impl AnnotationProvider for StaticAnnotationProvider {
    fn target(&self) -> &str {
        &self.target
    }

    async fn invoke(
        &self,
        request: &AnnotationRequest,
    ) -> Result<Vec<AnnotationResponse>, ProviderError> {
        Ok(vec![AnnotationResponse {
            annotation: request.annotation.clone(),
            time: 0,
            title: self.target.clone(),
            text: None,
            tags: None,
        }])
    }

    fn name(&self) -> &'static str {
        "static_annotation"
    }
}

pub struct StaticTagKeyProvider {
    target: String,
    keys: Vec<String>,
}

impl StaticTagKeyProvider {
    pub fn new(target: &str, keys: &[&str]) -> Self {
        Self {
            target: target.to_string(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[async_trait]
impl TagKeyProvider for StaticTagKeyProvider {
    fn target(&self) -> &str {
        &self.target
    }

    async fn invoke(&self, _request: &TagKeyRequest) -> Result<Vec<TagKeyResponse>, ProviderError> {
        Ok(self
            .keys
            .iter()
            .map(|k| TagKeyResponse::new(k.as_str(), ColumnType::String))
            .collect())
    }

    fn name(&self) -> &'static str {
        "static_tag_key"
    }
}

pub struct FailingTagKeyProvider {
    target: String,
    message: String,
}

impl FailingTagKeyProvider {
    pub fn new(target: &str, message: &str) -> Self {
        Self {
            target: target.to_string(),
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl TagKeyProvider for FailingTagKeyProvider {
    fn target(&self) -> &str {
        &self.target
    }

    async fn invoke(&self, _request: &TagKeyRequest) -> Result<Vec<TagKeyResponse>, ProviderError> {
        Err(ProviderError::message(self.message.clone()))
    }

    fn name(&self) -> &'static str {
        "failing_tag_key"
    }
}

pub struct StaticTagValueProvider {
    target: String,
    values: Vec<String>,
}

impl StaticTagValueProvider {
    pub fn new(target: &str, values: &[&str]) -> Self {
        Self {
            target: target.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[async_trait]
impl TagValueProvider for StaticTagValueProvider {
    fn target(&self) -> &str {
        &self.target
    }

    async fn invoke(
        &self,
        _request: &TagValueRequest,
    ) -> Result<Vec<TagValueResponse>, ProviderError> {
        Ok(self.values.iter().map(|v| TagValueResponse::new(v.as_str())).collect())
    }

    fn name(&self) -> &'static str {
        "static_tag_value"
    }
}
