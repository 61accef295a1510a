// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use serde_json::{json, Value};

/// Response header the transport uses to surface non-fatal dispatch errors.
pub const ERROR_HEADER: &str = "X-DATASOURCE-ERR";

/// Separator between errors in the error header.
pub const ERROR_SEPARATOR: &str = ". ";

/// Body of the liveness check.
pub fn liveness() -> Value {
    json!({ "success": true })
}

/// Aggregated results of one dispatch plus the errors that did not stop it.
///
/// Empty `results` with non-empty `errors` is a normal outcome; the
/// transport still answers with the (empty) body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchOutcome<T> {
    pub results: Vec<T>,
    pub errors: Vec<String>,
}

impl<T> DispatchOutcome<T> {
    pub fn new(results: Vec<T>, errors: Vec<String>) -> Self {
        Self { results, errors }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Value for `ERROR_HEADER`, or `None` when nothing went wrong.
    pub fn error_header(&self) -> Option<String> {
        self.has_errors()
            .then(|| self.errors.join(ERROR_SEPARATOR))
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<String>) {
        (self.results, self.errors)
    }
}

impl<T> Default for DispatchOutcome<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_header_joins_errors() {
        let outcome: DispatchOutcome<String> = DispatchOutcome::new(
            vec![],
            vec!["Unhandled targets: \"x\"".into(), "Failed to query target:y".into()],
        );
        assert_eq!(
            outcome.error_header().as_deref(),
            Some("Unhandled targets: \"x\". Failed to query target:y")
        );
    }

    #[test]
    fn test_no_header_without_errors() {
        let outcome = DispatchOutcome::new(vec![1, 2], vec![]);
        assert_eq!(outcome.error_header(), None);
        assert_eq!(outcome.into_parts(), (vec![1, 2], vec![]));
    }

    #[test]
    fn test_liveness_body() {
        assert_eq!(liveness(), json!({ "success": true }));
    }
}
