// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Population of response models from streamed sources.

use futures::{Stream, StreamExt};
use std::fmt::Display;

use crate::errors::ModelError;
use crate::models::{LengthCheck, Row, Rows};

/// Drain `source`, handing each element to `on_item`.
///
/// Consumption stops at the first stream error or callback error; rows
/// accepted before the failure stay in place.
pub async fn read_stream<S, T, E, F>(source: S, mut on_item: F) -> Result<(), ModelError>
where
    S: Stream<Item = Result<T, E>>,
    E: Display,
    F: FnMut(T) -> Result<(), ModelError>,
{
    let mut source = std::pin::pin!(source);

    while let Some(item) = source.next().await {
        let item = item.map_err(|e| ModelError::Stream(e.to_string()))?;
        on_item(item)?;
    }

    Ok(())
}

/// Add one row per streamed element, with the length check enforced.
pub async fn populate_from_stream<R, S, T, E, F>(
    target: &mut R,
    source: S,
    mut transform: F,
) -> Result<(), ModelError>
where
    R: Rows + ?Sized,
    S: Stream<Item = Result<T, E>>,
    E: Display,
    F: FnMut(T) -> Row,
{
    read_stream(source, |item| {
        target.add_row(transform(item), LengthCheck::Enforce)?;
        Ok(())
    })
    .await
}
