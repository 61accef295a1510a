// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request bodies sent by the SimpleJSON datasource.
//!
//! Field names follow the datasource's camelCase JSON. Everything except the
//! target list is optional because dashboards send partial bodies freely;
//! whitelisting and stricter validation belong to the transport layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::TargetShape;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeRaw {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<RangeRaw>,
}

/// One entry of a query request's `targets` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetItem {
    #[serde(default)]
    pub ref_id: String,
    #[serde(default)]
    pub target: String,
    #[serde(rename = "type", default)]
    pub shape: TargetShape,
}

impl TargetItem {
    pub fn new(ref_id: impl Into<String>, target: impl Into<String>, shape: TargetShape) -> Self {
        Self {
            ref_id: ref_id.into(),
            target: target.into(),
            shape,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdhocFilter {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_raw: Option<RangeRaw>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
    #[serde(default)]
    pub targets: Vec<TargetItem>,
    #[serde(default)]
    pub adhoc_filters: Vec<AdhocFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_data_points: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoped_vars: Option<Value>,
}

impl QueryRequest {
    pub fn with_targets(targets: Vec<TargetItem>) -> Self {
        Self {
            targets,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub target: Option<String>,
}

impl SearchRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
        }
    }
}

/// Annotation definition as configured on the dashboard.
///
/// Both `query` and `name` are tried as annotation target names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_raw: Option<RangeRaw>,
    #[serde(default)]
    pub annotation: Annotation,
}

/// Tag key requests carry no target; the body is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagKeyRequest(pub Value);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagValueRequest {
    #[serde(default)]
    pub key: String,
}

impl TagValueRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
