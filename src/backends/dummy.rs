// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in demonstration providers.
//!
//! They answer with fixed sample data so a freshly started service has
//! something to show on a dashboard, and they double as the fixtures for the
//! end-to-end dispatch tests.

use async_trait::async_trait;
use futures::stream;
use serde_json::{json, Value};
use std::convert::Infallible;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::ProviderError;
use crate::models::{
    AnnotationRequest, AnnotationResponse, Column, ColumnType, LengthCheck, QueryRequest,
    QueryResponse, Rows, SearchRequest, SearchResponse, TableResponse, TagKeyRequest,
    TagKeyResponse, TagValueRequest, TagValueResponse, TargetItem, TargetShape, TimeSeriesResponse,
};
use crate::registry::ProviderRegistry;
use crate::traits::{
    AnnotationProvider, Provider, QueryProvider, SearchProvider, TagKeyProvider, TagValueProvider,
};

/// Name of the extra series the dummy query provider adds to every
/// time-series answer.
pub const MULTI_SERIES_TARGET: &str = "Multi-series";

const HOUR_MS: i64 = 3_600_000;
const MINUTE_MS: i64 = 60_000;

/// Register the full dummy wiring: query and annotation and tag keys under
/// `Dummy`, search under `var1`, tag values under `TagKey1`.
pub fn register_dummy_providers(registry: &mut ProviderRegistry) -> &mut ProviderRegistry {
    registry
        .register(Provider::query(DummyQueryProvider::new("Dummy")))
        .register(Provider::search(DummySearchProvider::new("var1")))
        .register(Provider::annotation(DummyAnnotationProvider::new("Dummy")))
        .register(Provider::tag_key(DummyTagKeyProvider::new("Dummy")))
        .register(Provider::tag_value(DummyTagValueProvider::new("TagKey1")))
}

pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

struct Sample {
    at: i64,
    value: i64,
}

fn samples(now: i64) -> [Sample; 2] {
    [
        Sample {
            at: now - 2 * HOUR_MS,
            value: 100,
        },
        Sample {
            at: now - 5 * MINUTE_MS,
            value: 200,
        },
    ]
}

/// Sample comment records backing the table answer.
fn comments() -> Vec<Value> {
    vec![
        json!({
            "postId": 1, "id": 1,
            "name": "id labore ex et quam laborum",
            "email": "Eliseo@gardner.biz",
            "body": "laudantium enim quasi est quidem magnam voluptate ipsam eos"
        }),
        json!({
            "postId": 1, "id": 2,
            "name": "quo vero reiciendis velit similique earum",
            "email": "Jayne_Kuhic@sydney.com",
            "body": "est natus enim nihil est dolore omnis voluptatem numquam"
        }),
        json!({
            "postId": 1, "id": 3,
            "name": "odio adipisci rerum aut animi",
            "email": "Nikita@garfield.biz",
            "body": "quia molestiae reprehenderit quasi aspernatur aut expedita occaecati"
        }),
    ]
}

/// Answers time series (plus a derived `Multi-series`) and a comments table.
pub struct DummyQueryProvider {
    target: String,
    shapes: Vec<TargetShape>,
}

impl DummyQueryProvider {
    /// A provider supporting both shapes.
    pub fn new(target: impl Into<String>) -> Self {
        Self::with_shapes(target, vec![TargetShape::TimeSeries, TargetShape::Table])
    }

    pub fn with_shapes(target: impl Into<String>, shapes: Vec<TargetShape>) -> Self {
        Self {
            target: target.into(),
            shapes,
        }
    }

    fn time_series(item: &TargetItem) -> Result<Vec<QueryResponse>, ProviderError> {
        let samples = samples(now_millis());

        let mut series = TimeSeriesResponse::for_target(item);
        series.populate_with(
            &samples,
            |s| vec![json!(s.value), json!(s.at)],
            LengthCheck::Enforce,
        )?;

        let mut derived = TimeSeriesResponse::new(MULTI_SERIES_TARGET, Some(item.ref_id.clone()));
        derived.populate_with(
            &samples,
            |s| vec![json!(s.value - 50), json!(s.at)],
            LengthCheck::Enforce,
        )?;

        Ok(vec![series.into(), derived.into()])
    }

    async fn table(item: &TargetItem) -> Result<Vec<QueryResponse>, ProviderError> {
        let mut table = TableResponse::for_target(item);
        table.set_columns(vec![
            Column::new("Id", ColumnType::Number),
            Column::new("Name", ColumnType::String),
            Column::new("E-mail", ColumnType::String),
            Column::new("Body", ColumnType::String),
        ]);

        let source = stream::iter(comments().into_iter().map(Ok::<_, Infallible>));
        table
            .populate_from_stream(source, |comment| {
                vec![
                    comment["id"].clone(),
                    comment["name"].clone(),
                    comment["email"].clone(),
                    comment["body"].clone(),
                ]
            })
            .await?;

        Ok(vec![table.into()])
    }
}

#[async_trait]
impl QueryProvider for DummyQueryProvider {
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
        match item.shape {
            TargetShape::TimeSeries => Self::time_series(item),
            TargetShape::Table => Self::table(item).await,
        }
    }

    fn name(&self) -> &'static str {
        "dummy_query"
    }
}

pub struct DummySearchProvider {
    target: String,
}

impl DummySearchProvider {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

#[async_trait]
impl SearchProvider for DummySearchProvider {
    fn target(&self) -> &str {
        &self.target
    }

    async fn invoke(&self, _request: &SearchRequest) -> Result<Vec<SearchResponse>, ProviderError> {
        Ok((1..=4_i64)
            .map(|n| SearchResponse::entry(format!("Value {}", n), n))
            .collect())
    }

    fn name(&self) -> &'static str {
        "dummy_search"
    }
}

/// Echoes the requested annotation one hour in the past.
pub struct DummyAnnotationProvider {
    target: String,
}

impl DummyAnnotationProvider {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

#[async_trait]
impl AnnotationProvider for DummyAnnotationProvider {
    fn target(&self) -> &str {
        &self.target
    }

    async fn invoke(
        &self,
        request: &AnnotationRequest,
    ) -> Result<Vec<AnnotationResponse>, ProviderError> {
        Ok(vec![AnnotationResponse {
            annotation: request.annotation.clone(),
            time: now_millis() - HOUR_MS,
            title: "Dummy Annotation".to_string(),
            text: None,
            tags: None,
        }])
    }

    fn name(&self) -> &'static str {
        "dummy_annotation"
    }
}

pub struct DummyTagKeyProvider {
    target: String,
}

impl DummyTagKeyProvider {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

#[async_trait]
impl TagKeyProvider for DummyTagKeyProvider {
    fn target(&self) -> &str {
        &self.target
    }

    async fn invoke(&self, _request: &TagKeyRequest) -> Result<Vec<TagKeyResponse>, ProviderError> {
        Ok(vec![TagKeyResponse::new("TagKey1", ColumnType::String)])
    }

    fn name(&self) -> &'static str {
        "dummy_tag_key"
    }
}

pub struct DummyTagValueProvider {
    target: String,
}

impl DummyTagValueProvider {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

#[async_trait]
impl TagValueProvider for DummyTagValueProvider {
    fn target(&self) -> &str {
        &self.target
    }

    async fn invoke(
        &self,
        _request: &TagValueRequest,
    ) -> Result<Vec<TagValueResponse>, ProviderError> {
        Ok(vec![
            TagValueResponse::new("TagValue1"),
            TagValueResponse::new("TagValue2"),
        ])
    }

    fn name(&self) -> &'static str {
        "dummy_tag_value"
    }
}
