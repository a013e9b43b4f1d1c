//! Change relay: maps source-model notifications onto owning view-models.
//!
//! Each view-model type declares one immutable adjacency list from source
//! property names to the dependent property names it must re-raise. The list
//! is iterated in declaration order; consumers may depend on firing order.

use bogholder_domain::{ChangeNotifier, Subscription};

/// Source-property to dependent-properties mapping for one view-model type.
#[derive(Debug, Clone, Copy)]
pub struct RelayMap {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl RelayMap {
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Dependent properties for `source`, in declaration order. Empty when
    /// the property is unmapped.
    pub fn dependents(&self, source: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(name, _)| *name == source)
            .map(|(_, dependents)| *dependents)
            .unwrap_or(&[])
    }
}

/// Re-raises one owner notification per dependent of `source_property`.
/// Unmapped names are suppressed silently; that is pass-through suppression,
/// not an error.
pub fn fan_out(owner: &ChangeNotifier, map: &RelayMap, source_property: &str) {
    let dependents = map.dependents(source_property);
    if dependents.is_empty() {
        tracing::trace!(property = source_property, "relay: unmapped property suppressed");
        return;
    }
    for dependent in dependents {
        owner.raise(dependent);
    }
}

/// Wires `source` to `owner` through `map`. The returned guard removes the
/// wire exactly once, on `detach()` or drop, so a detached source can no
/// longer notify through the owner.
pub fn relay_subscription(
    source: ChangeNotifier,
    owner: &ChangeNotifier,
    map: &'static RelayMap,
) -> Subscription {
    let owner = owner.clone();
    let id = source.subscribe(move |property| fan_out(&owner, map, property));
    Subscription::new(source, id)
}
