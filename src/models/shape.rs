// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Structural form of a query provider's output.
///
/// The wire names follow the SimpleJSON datasource protocol, which spells the
/// time-series shape `"timeserie"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetShape {
    #[default]
    #[serde(rename = "timeserie", alias = "timeseries")]
    TimeSeries,
    #[serde(rename = "table")]
    Table,
}

impl TargetShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetShape::TimeSeries => "timeserie",
            TargetShape::Table => "table",
        }
    }
}

impl Display for TargetShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value type of a table column or tag key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Number,
    String,
    Date,
    Time,
}
