// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::RegistryError;
use crate::observability::messages::registry::{ProviderRegistered, TargetReplaced};
use crate::observability::messages::StructuredLog;
use crate::registry::{ReplacementObserver, TracingObserver};
use crate::traits::{Provider, ProviderKind};

/// Registry mapping `(capability kind, target name)` to a provider.
///
/// Partitions are created lazily on first registration into a kind. A kind
/// that was never registered into has no partition at all, which lookups
/// treat as a miss and tag-key dispatch treats as "nothing to ask".
///
/// The registry is filled during startup and then shared read-only behind an
/// `Arc`; there is no removal and no interior locking.
///
/// # Examples
///
/// ```ignore
/// let mut registry = ProviderRegistry::new();
/// registry
///     .register(Provider::query(DummyQueryProvider::new("Dummy")))
///     .register(Provider::search(DummySearchProvider::new("var1")))
///     .register_as(Provider::tag_value(DummyTagValueProvider::new("TagKey1")), "host");
///
/// assert!(registry.lookup("Dummy", ProviderKind::Query).is_ok());
/// ```
pub struct ProviderRegistry {
    partitions: HashMap<ProviderKind, HashMap<String, Provider>>,
    observer: Arc<dyn ReplacementObserver>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    /// Create a registry that reports replacements to `observer`.
    pub fn with_observer(observer: Arc<dyn ReplacementObserver>) -> Self {
        Self {
            partitions: HashMap::new(),
            observer,
        }
    }

    /// Register a provider under its own target name.
    ///
    /// An existing provider with the same kind and name is replaced.
    pub fn register(&mut self, provider: Provider) -> &mut Self {
        let name = provider.target().to_string();
        self.insert(name, provider)
    }

    /// Register a provider under `name` instead of its own target name.
    pub fn register_as(&mut self, provider: Provider, name: impl Into<String>) -> &mut Self {
        self.insert(name.into(), provider)
    }

    fn insert(&mut self, name: String, provider: Provider) -> &mut Self {
        let kind = provider.kind();
        let partition = self.partitions.entry(kind).or_default();

        ProviderRegistered {
            kind,
            target: &name,
            provider: provider.name(),
        }
        .log();

        if let Some(previous) = partition.get(&name) {
            self.observer.target_replaced(&TargetReplaced {
                kind,
                target: &name,
                previous: previous.name(),
                replacement: provider.name(),
            });
        }

        partition.insert(name, provider);
        self
    }

    /// Find the provider registered under `(kind, name)`.
    pub fn lookup(&self, name: &str, kind: ProviderKind) -> Result<&Provider, RegistryError> {
        let partition = self
            .partitions
            .get(&kind)
            .ok_or_else(|| RegistryError::kind_not_found(kind))?;

        partition
            .get(name)
            .ok_or_else(|| RegistryError::target_not_found(kind, name))
    }

    pub fn contains(&self, name: &str, kind: ProviderKind) -> bool {
        self.lookup(name, kind).is_ok()
    }

    /// All query target names in ascending order.
    pub fn query_target_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .partitions
            .get(&ProviderKind::Query)
            .map(|partition| partition.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Every `(name, provider)` in a partition, or `None` if nothing was ever
    /// registered under `kind`.
    pub fn providers(&self, kind: ProviderKind) -> Option<impl Iterator<Item = (&str, &Provider)>> {
        self.partitions
            .get(&kind)
            .map(|partition| partition.iter().map(|(name, provider)| (name.as_str(), provider)))
    }

    pub fn has_partition(&self, kind: ProviderKind) -> bool {
        self.partitions.contains_key(&kind)
    }

    /// Total number of registered providers across all kinds.
    pub fn len(&self) -> usize {
        self.partitions.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(ProviderKind, usize)> = self
            .partitions
            .iter()
            .map(|(kind, partition)| (*kind, partition.len()))
            .collect();
        counts.sort_by_key(|(kind, _)| kind.as_str());

        f.debug_struct("ProviderRegistry")
            .field("provider_count", &self.len())
            .field("partitions", &counts)
            .finish()
    }
}
