// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::Stream;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::errors::ModelError;
use crate::models::rows::check_length;
use crate::models::stream::populate_from_stream;
use crate::models::{ColumnType, LengthCheck, Row, Rows, TargetItem, TargetShape};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub text: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(text: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            text: text.into(),
            column_type,
        }
    }
}

/// Tabular query answer. Every row holds one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(rename = "type")]
    shape: TargetShape,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl TableResponse {
    pub fn new(target: impl Into<String>, ref_id: Option<String>) -> Self {
        Self {
            target: target.into(),
            ref_id,
            shape: TargetShape::Table,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn for_target(item: &TargetItem) -> Self {
        Self::new(item.target.clone(), Some(item.ref_id.clone()))
    }

    /// Replace the column list. Rows already present are not re-checked.
    pub fn set_columns(&mut self, columns: Vec<Column>) -> &mut Self {
        self.columns = columns;
        self
    }

    pub fn add_column(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
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
}

impl Rows for TableResponse {
    fn add_row(&mut self, row: Row, check: LengthCheck) -> Result<&mut Self, ModelError> {
        if self.columns.is_empty() {
            return Err(ModelError::ColumnsNotSet);
        }
        check_length(&row, self.columns.len(), check)?;

        self.rows.push(row);
        Ok(self)
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}
