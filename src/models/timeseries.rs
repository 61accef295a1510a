// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::Stream;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

use crate::errors::ModelError;
use crate::models::rows::check_length;
use crate::models::stream::{populate_from_stream, read_stream};
use crate::models::{LengthCheck, Row, Rows, TargetItem, TargetShape};

/// Column read for the timestamp when none is given.
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "timestamp";

/// A single series of `[value, timestamp_millis]` datapoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesResponse {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(rename = "type")]
    shape: TargetShape,
    pub datapoints: Vec<Row>,
}

impl TimeSeriesResponse {
    pub fn new(target: impl Into<String>, ref_id: Option<String>) -> Self {
        Self {
            target: target.into(),
            ref_id,
            shape: TargetShape::TimeSeries,
            datapoints: Vec::new(),
        }
    }

    /// A response answering the given target item, carrying its name and refId.
    pub fn for_target(item: &TargetItem) -> Self {
        Self::new(item.target.clone(), Some(item.ref_id.clone()))
    }

    /// Append a well-formed datapoint.
    pub fn push_point(&mut self, value: impl Into<Value>, timestamp_ms: i64) -> &mut Self {
        self.datapoints.push(vec![value.into(), Value::from(timestamp_ms)]);
        self
    }

    pub async fn populate_from_stream<S, T, E, F>(
        &mut self,
        source: S,
        transform: F,
    ) -> Result<&mut Self, ModelError>
    where
        S: Stream<Item = Result<T, E>>,
        E: Display,
        F: FnMut(T) -> Row,
    {
        populate_from_stream(self, source, transform).await?;
        Ok(self)
    }

    /// Build datapoints from a stream of JSON records.
    ///
    /// Each record contributes `[record[value_column], record[timestamp_column]]`.
    /// Timestamps must be epoch milliseconds, either as numbers or integer strings.
    pub async fn populate_from_records<S, E>(
        &mut self,
        source: S,
        value_column: &str,
        timestamp_column: Option<&str>,
    ) -> Result<&mut Self, ModelError>
    where
        S: Stream<Item = Result<Value, E>>,
        E: Display,
    {
        let timestamp_column = timestamp_column.unwrap_or(DEFAULT_TIMESTAMP_COLUMN);

        read_stream(source, |record| {
            let value = record
                .get(value_column)
                .cloned()
                .ok_or_else(|| ModelError::MissingColumn {
                    column: value_column.to_string(),
                })?;
            let timestamp = record
                .get(timestamp_column)
                .ok_or_else(|| ModelError::MissingColumn {
                    column: timestamp_column.to_string(),
                })
                .and_then(|ts| timestamp_millis(timestamp_column, ts))?;

            self.push_point(value, timestamp);
            Ok(())
        })
        .await?;

        Ok(self)
    }
}

fn timestamp_millis(column: &str, value: &Value) -> Result<i64, ModelError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ModelError::NotNumeric {
        column: column.to_string(),
        value: value.to_string(),
    })
}

impl Rows for TimeSeriesResponse {
    fn add_row(&mut self, row: Row, check: LengthCheck) -> Result<&mut Self, ModelError> {
        check_length(&row, 2, check)?;
        self.datapoints.push(row);
        Ok(self)
    }

    fn row_count(&self) -> usize {
        self.datapoints.len()
    }
}
