// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::BuiltinProviderFactory;
use crate::config::Config;
use crate::engine::Dispatcher;
use crate::errors::ConfigError;
use crate::registry::ProviderRegistry;

/// Builds the provider registry and dispatcher described by a configuration.
///
/// # Examples
///
/// ```
/// use simplejson_registry::config::{Config, RuntimeBuilder};
/// use simplejson_registry::traits::ProviderKind;
///
/// let (registry, _dispatcher) = RuntimeBuilder::from_config(&Config::default_demo()).unwrap();
///
/// assert!(registry.contains("Dummy", ProviderKind::Query));
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the runtime from configuration.
    ///
    /// Entries are registered in file order, so a later entry with the same
    /// kind and name replaces an earlier one.
    ///
    /// # Returns
    /// The shared registry and a dispatcher over it
    pub fn from_config(cfg: &Config) -> Result<(Arc<ProviderRegistry>, Dispatcher), ConfigError> {
        let mut registry = ProviderRegistry::new();

        for entry in &cfg.providers {
            let provider = BuiltinProviderFactory::create_provider(entry)?;
            registry.register_as(provider, entry.registered_name());
        }

        let registry = Arc::new(registry);
        let dispatcher = Dispatcher::new(Arc::clone(&registry));
        Ok((registry, dispatcher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use crate::models::{TagValueRequest, TargetShape};
    use crate::traits::ProviderKind;

    #[test]
    fn test_demo_config_registers_every_kind() {
        let (registry, _) = RuntimeBuilder::from_config(&Config::default_demo()).unwrap();

        assert_eq!(registry.len(), 5);
        for kind in ProviderKind::ALL {
            assert!(registry.has_partition(kind), "missing partition {}", kind);
        }
    }

    #[tokio::test]
    async fn test_alias_registers_under_alias() {
        let cfg = Config {
            log_level: "info".to_string(),
            providers: vec![ProviderConfig::new(ProviderKind::TagValue, "TagKey1").with_alias("host")],
        };

        let (registry, dispatcher) = RuntimeBuilder::from_config(&cfg).unwrap();
        assert!(registry.contains("host", ProviderKind::TagValue));
        assert!(!registry.contains("TagKey1", ProviderKind::TagValue));

        let outcome = dispatcher.dispatch_tag_values(TagValueRequest::new("host")).await;
        assert_eq!(outcome.results.len(), 2);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_later_entry_replaces_earlier() {
        let cfg = Config {
            log_level: "info".to_string(),
            providers: vec![
                ProviderConfig::new(ProviderKind::Query, "cpu").with_shapes(vec![TargetShape::Table]),
                ProviderConfig::new(ProviderKind::Query, "cpu").with_shapes(vec![TargetShape::TimeSeries]),
            ],
        };

        let (registry, _) = RuntimeBuilder::from_config(&cfg).unwrap();
        let provider = registry.lookup("cpu", ProviderKind::Query).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(provider.as_query().unwrap().supports(TargetShape::TimeSeries));
        assert!(!provider.as_query().unwrap().supports(TargetShape::Table));
    }

    #[test]
    fn test_unknown_implementation_fails_build() {
        let mut entry = ProviderConfig::new(ProviderKind::Search, "var1");
        entry.implementation = "nope".to_string();
        let cfg = Config {
            log_level: "info".to_string(),
            providers: vec![entry],
        };

        assert!(matches!(
            RuntimeBuilder::from_config(&cfg),
            Err(ConfigError::UnknownImplementation { .. })
        ));
    }
}
