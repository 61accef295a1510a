// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::registry::ProviderRegistry;
use crate::traits::{Provider, ProviderKind};

/// Candidates split by whether the registry knows them.
pub(crate) struct Resolution<'r, C> {
    pub handled: Vec<(C, &'r Provider)>,
    pub unhandled: Vec<String>,
}

/// Resolve each candidate's name against the `kind` partition.
///
/// Candidates with an empty name are dropped without being reported:
/// dashboards routinely send blank target slots.
pub(crate) fn resolve<'r, C, I, F>(
    registry: &'r ProviderRegistry,
    candidates: I,
    name_of: F,
    kind: ProviderKind,
) -> Resolution<'r, C>
where
    I: IntoIterator<Item = C>,
    F: Fn(&C) -> &str,
{
    let mut resolution = Resolution {
        handled: Vec::new(),
        unhandled: Vec::new(),
    };

    for candidate in candidates {
        let name = name_of(&candidate);
        if name.is_empty() {
            continue;
        }

        match registry.lookup(name, kind) {
            Ok(provider) => resolution.handled.push((candidate, provider)),
            Err(_) => resolution.unhandled.push(name.to_string()),
        }
    }

    resolution
}

/// `Unhandled targets: "a", "b"`, or `None` when every name resolved.
pub(crate) fn unhandled_targets_error(unhandled: &[String]) -> Option<String> {
    quoted_list("Unhandled targets", unhandled.iter().map(String::as_str))
}

pub(crate) fn quoted_list<'a>(label: &str, items: impl Iterator<Item = &'a str>) -> Option<String> {
    let items: Vec<&str> = items.collect();
    if items.is_empty() {
        return None;
    }
    Some(format!("{}: \"{}\"", label, items.join("\", \"")))
}
