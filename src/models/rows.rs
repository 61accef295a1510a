// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Shared row handling for the time-series and table response models.

use serde_json::Value;

use crate::errors::ModelError;

/// A single raw row: datapoint pair or table cells.
pub type Row = Vec<Value>;

/// Whether `add_row` verifies the row length against the model's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthCheck {
    #[default]
    Enforce,
    Skip,
}

/// A response model that accepts rows one at a time.
///
/// Implementors only supply `add_row` and `row_count`; the bulk population
/// helpers are built on top of them.
pub trait Rows {
    fn add_row(&mut self, row: Row, check: LengthCheck) -> Result<&mut Self, ModelError>;

    fn row_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Add every row from an in-memory sequence, stopping at the first bad row.
    fn populate<I>(&mut self, rows: I, check: LengthCheck) -> Result<&mut Self, ModelError>
    where
        I: IntoIterator<Item = Row>,
        Self: Sized,
    {
        for row in rows {
            self.add_row(row, check)?;
        }
        Ok(self)
    }

    /// Like `populate`, mapping each element to a row first.
    fn populate_with<I, F>(
        &mut self,
        items: I,
        mut transform: F,
        check: LengthCheck,
    ) -> Result<&mut Self, ModelError>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Row,
        Self: Sized,
    {
        for item in items {
            self.add_row(transform(item), check)?;
        }
        Ok(self)
    }
}

/// Check a row against the length the model expects.
pub(crate) fn check_length(row: &Row, expected: usize, check: LengthCheck) -> Result<(), ModelError> {
    if check == LengthCheck::Enforce && row.len() != expected {
        return Err(ModelError::RowLength {
            expected,
            actual: row.len(),
        });
    }
    Ok(())
}
