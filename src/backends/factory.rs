// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::dummy::{
    DummyAnnotationProvider, DummyQueryProvider, DummySearchProvider, DummyTagKeyProvider,
    DummyTagValueProvider,
};
use crate::config::ProviderConfig;
use crate::errors::ConfigError;
use crate::traits::{Provider, ProviderKind};

/// Factory for the providers that ship with the crate.
pub struct BuiltinProviderFactory;

impl BuiltinProviderFactory {
    /// Create a provider from configuration
    ///
    /// The `implementation` field selects the provider:
    /// - "dummy" -> the sample-data provider for the entry's kind
    pub fn create_provider(config: &ProviderConfig) -> Result<Provider, ConfigError> {
        let target = config.target.as_str();

        match (config.implementation.as_str(), config.kind) {
            ("dummy", ProviderKind::Query) => Ok(Provider::query(DummyQueryProvider::with_shapes(
                target,
                config.shapes.clone(),
            ))),
            ("dummy", ProviderKind::Search) => Ok(Provider::search(DummySearchProvider::new(target))),
            ("dummy", ProviderKind::Annotation) => {
                Ok(Provider::annotation(DummyAnnotationProvider::new(target)))
            }
            ("dummy", ProviderKind::TagKey) => Ok(Provider::tag_key(DummyTagKeyProvider::new(target))),
            ("dummy", ProviderKind::TagValue) => {
                Ok(Provider::tag_value(DummyTagValueProvider::new(target)))
            }
            _ => Err(ConfigError::UnknownImplementation {
                kind: config.kind,
                target: config.target.clone(),
                implementation: config.implementation.clone(),
            }),
        }
    }

    /// Implementation names available for a provider kind
    pub fn list_available_implementations(_kind: ProviderKind) -> Vec<&'static str> {
        vec!["dummy"]
    }

    pub fn is_implementation_available(kind: ProviderKind, implementation: &str) -> bool {
        Self::list_available_implementations(kind).contains(&implementation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TargetShape;

    #[test]
    fn test_create_dummy_provider_for_every_kind() {
        for kind in ProviderKind::ALL {
            let mut config = ProviderConfig::new(kind, "Dummy");
            if kind == ProviderKind::Query {
                config = config.with_shapes(vec![TargetShape::Table]);
            }

            let provider = BuiltinProviderFactory::create_provider(&config)
                .unwrap_or_else(|e| panic!("Failed to create {} provider: {}", kind, e));

            assert_eq!(provider.kind(), kind);
            assert_eq!(provider.target(), "Dummy");
        }
    }

    #[test]
    fn test_query_provider_uses_configured_shapes() {
        let config = ProviderConfig::new(ProviderKind::Query, "users").with_shapes(vec![TargetShape::Table]);
        let provider = BuiltinProviderFactory::create_provider(&config).unwrap();

        let query = provider.as_query().unwrap();
        assert!(query.supports(TargetShape::Table));
        assert!(!query.supports(TargetShape::TimeSeries));
    }

    #[test]
    fn test_unknown_implementation() {
        let mut config = ProviderConfig::new(ProviderKind::Search, "var1");
        config.implementation = "elasticsearch".to_string();

        let err = BuiltinProviderFactory::create_provider(&config).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownImplementation { .. }));
        assert!(!BuiltinProviderFactory::is_implementation_available(
            ProviderKind::Search,
            "elasticsearch"
        ));
    }
}
