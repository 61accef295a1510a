// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for response model population.

use thiserror::Error;

/// Row-shape and population failures raised by the response models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A row did not have the number of cells the model requires.
    #[error("Row must contain {expected} items.")]
    RowLength { expected: usize, actual: usize },

    /// A table row was added before any column was declared.
    #[error("Columns must be set using \"set_columns(...)\" before rows can be added.")]
    ColumnsNotSet,

    /// A record lacked a column needed to build a datapoint.
    #[error("Record is missing column '{column}'")]
    MissingColumn { column: String },

    /// A record column held a value of the wrong type.
    #[error("Column '{column}' must be numeric, got {value}")]
    NotNumeric { column: String, value: String },

    /// The streamed source reported a failure before it finished.
    #[error("Stream failed: {0}")]
    Stream(String),
}
