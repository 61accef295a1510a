// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::backends::register_dummy_providers;
use crate::backends::stub::{PanickingQueryProvider, StaticQueryProvider, StaticTagValueProvider};
use crate::config::{Config, RuntimeBuilder};
use crate::engine::{DispatchRequest, Dispatcher};
use crate::errors::ProviderError;
use crate::models::{
    Column, ColumnType, LengthCheck, QueryRequest, QueryResponse, Rows, SearchRequest,
    TableResponse, TagKeyRequest, TagValueRequest, TargetItem, TargetShape,
};
use crate::observability::messages::registry::TargetReplaced;
use crate::observability::CapturedLogs;
use crate::registry::{ProviderRegistry, ReplacementObserver};
use crate::traits::{Provider, ProviderKind, QueryProvider};

/// Integration tests for dispatch over the dummy and stub providers
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingObserver {
        replaced: Mutex<Vec<String>>,
    }

    impl ReplacementObserver for RecordingObserver {
        fn target_replaced(&self, event: &TargetReplaced<'_>) {
            self.replaced.lock().unwrap().push(event.to_string());
        }
    }

    /// Builds a two-column table and adds rows exactly as configured.
    struct RowShapeProvider {
        check: LengthCheck,
    }

    #[async_trait]
    impl QueryProvider for RowShapeProvider {
        fn target(&self) -> &str {
            "users"
        }

        fn shapes(&self) -> &[TargetShape] {
            &[TargetShape::Table]
        }

        async fn invoke(
            &self,
            item: &TargetItem,
            _request: &QueryRequest,
        ) -> Result<Vec<QueryResponse>, ProviderError> {
            let mut table = TableResponse::for_target(item);
            table.set_columns(vec![
                Column::new("Id", ColumnType::Number),
                Column::new("Name", ColumnType::String),
            ]);
            table.add_row(vec![json!(1), json!("ada"), json!("extra")], self.check)?;
            Ok(vec![table.into()])
        }

        fn name(&self) -> &'static str {
            "row_shape"
        }
    }

    fn demo_dispatcher() -> Dispatcher {
        let mut registry = ProviderRegistry::new();
        register_dummy_providers(&mut registry);
        Dispatcher::new(Arc::new(registry))
    }

    fn query(items: Vec<TargetItem>) -> DispatchRequest {
        DispatchRequest::Query(QueryRequest::with_targets(items))
    }

    #[tokio::test]
    async fn test_reregistration_replaces_and_notifies() {
        let observer = Arc::new(RecordingObserver::default());
        let mut registry = ProviderRegistry::with_observer(observer.clone());
        registry
            .register(Provider::tag_value(StaticTagValueProvider::new("host", &["old"])))
            .register(Provider::tag_value(StaticTagValueProvider::new("host", &["new"])));

        let outcome = Dispatcher::new(Arc::new(registry))
            .dispatch_tag_values(TagValueRequest::new("host"))
            .await;

        let texts: Vec<&str> = outcome.results.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["new"]);
        assert_eq!(
            *observer.replaced.lock().unwrap(),
            vec!["Replacing existing target:host".to_string()]
        );
    }

    #[tokio::test]
    async fn test_dummy_query_wire_format() {
        let response = demo_dispatcher()
            .dispatch(query(vec![TargetItem::new("A", "Dummy", TargetShape::TimeSeries)]))
            .await;

        assert!(response.error_header().is_none());
        let body = response.results_json().unwrap();
        let series = body.as_array().unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0]["target"], "Dummy");
        assert_eq!(series[0]["refId"], "A");
        assert_eq!(series[0]["type"], "timeserie");
        assert_eq!(series[1]["target"], "Multi-series");
        assert_eq!(series[0]["datapoints"].as_array().unwrap().len(), 2);
        assert_eq!(series[1]["datapoints"][0][0], 50);
    }

    #[tokio::test]
    async fn test_mixed_shapes_keep_request_order() {
        let mut registry = ProviderRegistry::new();
        register_dummy_providers(&mut registry);
        registry.register(Provider::query(
            StaticQueryProvider::new("slow", vec![TargetShape::TimeSeries]).with_delay(Duration::from_millis(50)),
        ));

        let outcome = Dispatcher::new(Arc::new(registry))
            .dispatch_query(QueryRequest::with_targets(vec![
                TargetItem::new("A", "slow", TargetShape::TimeSeries),
                TargetItem::new("B", "Dummy", TargetShape::Table),
                TargetItem::new("C", "Dummy", TargetShape::TimeSeries),
            ]))
            .await;

        let answered: Vec<(&str, Option<&str>)> = outcome
            .results
            .iter()
            .map(|r| (r.target(), r.ref_id()))
            .collect();
        assert_eq!(
            answered,
            vec![
                ("slow", Some("A")),
                ("Dummy", Some("B")),
                ("Dummy", Some("C")),
                ("Multi-series", Some("C")),
            ]
        );
        assert!(outcome.errors.is_empty());
    }

    #[tokio::test]
    async fn test_panicking_provider_does_not_sink_siblings() {
        let mut registry = ProviderRegistry::new();
        register_dummy_providers(&mut registry);
        registry.register(Provider::query(PanickingQueryProvider::new("boom")));

        let outcome = Dispatcher::new(Arc::new(registry))
            .dispatch_query(QueryRequest::with_targets(vec![
                TargetItem::new("A", "boom", TargetShape::TimeSeries),
                TargetItem::new("B", "Dummy", TargetShape::TimeSeries),
            ]))
            .await;

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].starts_with("Failed to query target:boom by provider:panicking_query:"));
    }

    #[tokio::test]
    async fn test_errors_accumulate_in_header_order() {
        let mut registry = ProviderRegistry::new();
        registry
            .register(Provider::query(StaticQueryProvider::new("cpu", vec![TargetShape::TimeSeries])))
            .register(Provider::query(RowShapeProvider {
                check: LengthCheck::Enforce,
            }));

        let response = Dispatcher::new(Arc::new(registry))
            .dispatch(query(vec![
                TargetItem::new("A", "users", TargetShape::Table),
                TargetItem::new("B", "cpu", TargetShape::Table),
                TargetItem::new("C", "gpu", TargetShape::TimeSeries),
                TargetItem::new("D", "cpu", TargetShape::TimeSeries),
            ]))
            .await;

        assert_eq!(
            response.error_header().as_deref(),
            Some(
                "Unhandled targets: \"gpu\". \
                 Unhandled target types: \"cpu:type:table\". \
                 Failed to query target:users by provider:row_shape: Row must contain 2 items."
            )
        );
        assert_eq!(response.results_json().unwrap().as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_row_shape_guard_can_be_bypassed() {
        let mut registry = ProviderRegistry::new();
        registry.register(Provider::query(RowShapeProvider {
            check: LengthCheck::Skip,
        }));

        let outcome = Dispatcher::new(Arc::new(registry))
            .dispatch_query(QueryRequest::with_targets(vec![TargetItem::new(
                "A",
                "users",
                TargetShape::Table,
            )]))
            .await;

        assert!(outcome.errors.is_empty());
        let QueryResponse::Table(table) = &outcome.results[0] else {
            panic!("expected a table, got {:?}", outcome.results);
        };
        assert_eq!(table.rows[0].len(), 3);
    }

    #[tokio::test]
    async fn test_search_and_tags_against_demo_config() {
        let (_, dispatcher) = RuntimeBuilder::from_config(&Config::default_demo()).unwrap();

        let names = dispatcher.dispatch_search(SearchRequest::default()).await;
        assert_eq!(serde_json::to_value(&names.results).unwrap(), json!(["Dummy"]));

        let values = dispatcher.dispatch_search(SearchRequest::new("var1")).await;
        assert_eq!(values.results.len(), 4);

        let keys = dispatcher.dispatch_tag_keys(TagKeyRequest::default()).await;
        assert_eq!(
            serde_json::to_value(&keys.results).unwrap(),
            json!([{ "type": "string", "text": "TagKey1" }])
        );

        let tag_values = dispatcher.dispatch_tag_values(TagValueRequest::new("TagKey1")).await;
        assert_eq!(
            serde_json::to_value(&tag_values.results).unwrap(),
            json!([{ "text": "TagValue1" }, { "text": "TagValue2" }])
        );
    }

    #[tokio::test]
    async fn test_annotation_json_request_end_to_end() {
        let body = r#"{
            "range": { "from": "2024-01-01T00:00:00Z", "to": "2024-01-02T00:00:00Z" },
            "annotation": { "name": "Dummy", "enable": true, "iconColor": "red", "query": "Dummy" }
        }"#;
        let request = DispatchRequest::from_json(ProviderKind::Annotation, body).unwrap();

        let response = demo_dispatcher().dispatch(request).await;
        let results = response.results_json().unwrap();

        // query and name both resolve to the same provider
        assert_eq!(results.as_array().unwrap().len(), 2);
        assert_eq!(results[0]["title"], "Dummy Annotation");
        assert_eq!(results[0]["annotation"]["iconColor"], "red");
        assert!(response.errors().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failures_logged_inside_dispatch_span() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        let mut registry = ProviderRegistry::new();
        registry.register(Provider::query(RowShapeProvider {
            check: LengthCheck::Enforce,
        }));

        Dispatcher::new(Arc::new(registry))
            .dispatch_query(QueryRequest::with_targets(vec![TargetItem::new(
                "A",
                "users",
                TargetShape::Table,
            )]))
            .await;

        let lines = logs.lines();
        let failure = lines
            .iter()
            .find(|line| line.contains("Row must contain 2 items"))
            .expect("provider failure should be logged");
        assert!(failure.contains("dispatch{"));
        assert!(failure.contains("provider_invocation{"));
        assert!(failure.contains("target_name=\"users\""));
    }
}
