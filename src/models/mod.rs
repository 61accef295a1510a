// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request and response models for the SimpleJSON datasource protocol.
//!
//! The time-series and table responses guard their row shape: a series takes
//! `[value, timestamp]` pairs, a table takes exactly one cell per declared
//! column. Both can be filled from in-memory sequences or from streams.

mod request;
mod responses;
mod rows;
mod shape;
mod stream;
mod table;
mod timeseries;

pub use request::{
    AdhocFilter, Annotation, AnnotationRequest, QueryRequest, Range, RangeRaw, SearchRequest,
    TagKeyRequest, TagValueRequest, TargetItem,
};
pub use responses::{
    compare_text, AnnotationResponse, QueryResponse, SearchResponse, SearchValue, TagKeyResponse,
    TagValueResponse, TextKey,
};
pub use rows::{LengthCheck, Row, Rows};
pub use shape::{ColumnType, TargetShape};
pub use stream::{populate_from_stream, read_stream};
pub use table::{Column, TableResponse};
pub use timeseries::{TimeSeriesResponse, DEFAULT_TIMESTAMP_COLUMN};
