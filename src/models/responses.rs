// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Response shapes for every capability kind.

use serde::Serialize;
use std::cmp::Ordering;

use crate::models::{Annotation, ColumnType, TableResponse, TargetItem, TargetShape, TimeSeriesResponse};

/// One entry of a query answer: a series or a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    TimeSeries(TimeSeriesResponse),
    Table(TableResponse),
}

impl QueryResponse {
    /// An empty response of the shape the target item asked for.
    pub fn empty_for(item: &TargetItem) -> Self {
        match item.shape {
            TargetShape::TimeSeries => TimeSeriesResponse::for_target(item).into(),
            TargetShape::Table => TableResponse::for_target(item).into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            QueryResponse::TimeSeries(series) => &series.target,
            QueryResponse::Table(table) => &table.target,
        }
    }

    pub fn ref_id(&self) -> Option<&str> {
        match self {
            QueryResponse::TimeSeries(series) => series.ref_id.as_deref(),
            QueryResponse::Table(table) => table.ref_id.as_deref(),
        }
    }

    pub fn shape(&self) -> TargetShape {
        match self {
            QueryResponse::TimeSeries(_) => TargetShape::TimeSeries,
            QueryResponse::Table(_) => TargetShape::Table,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            QueryResponse::TimeSeries(series) => series.datapoints.is_empty(),
            QueryResponse::Table(table) => table.rows.is_empty(),
        }
    }
}

impl From<TimeSeriesResponse> for QueryResponse {
    fn from(series: TimeSeriesResponse) -> Self {
        QueryResponse::TimeSeries(series)
    }
}

impl From<TableResponse> for QueryResponse {
    fn from(table: TableResponse) -> Self {
        QueryResponse::Table(table)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchValue {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for SearchValue {
    fn from(value: i64) -> Self {
        SearchValue::Number(value.into())
    }
}

impl From<&str> for SearchValue {
    fn from(value: &str) -> Self {
        SearchValue::Text(value.to_string())
    }
}

impl From<String> for SearchValue {
    fn from(value: String) -> Self {
        SearchValue::Text(value)
    }
}

/// A search answer: either a `{text, value}` pair or a bare target name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Entry { text: String, value: SearchValue },
    Target(String),
}

impl SearchResponse {
    pub fn entry(text: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        SearchResponse::Entry {
            text: text.into(),
            value: value.into(),
        }
    }

    pub fn target(name: impl Into<String>) -> Self {
        SearchResponse::Target(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationResponse {
    pub annotation: Annotation,
    pub time: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagKeyResponse {
    #[serde(rename = "type")]
    pub value_type: ColumnType,
    pub text: String,
}

impl TagKeyResponse {
    pub fn new(text: impl Into<String>, value_type: ColumnType) -> Self {
        Self {
            value_type,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagValueResponse {
    pub text: String,
}

impl TagValueResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Responses ordered by their display text.
pub trait TextKey {
    fn text(&self) -> &str;
}

impl TextKey for TagKeyResponse {
    fn text(&self) -> &str {
        &self.text
    }
}

impl TextKey for TagValueResponse {
    fn text(&self) -> &str {
        &self.text
    }
}

/// Collation used for tag listings: case-insensitive first, then lowercase
/// before uppercase so the order is total.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
