use std::collections::HashMap;

use crate::models::MapDataset;

/// Store of the last dataset rendered into each container.
///
/// Owned by the `RailwayMap` context object rather than living in module
/// state, so the embedding application controls its lifetime. Entries are
/// superseded by later renders of the same container id; there is no
/// explicit removal.
#[derive(Debug, Default)]
pub struct MapRegistry {
    entries: HashMap<String, MapDataset>,
}

impl MapRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `dataset` as the current data for `container_id`, replacing
    /// any prior entry
    pub fn record(&mut self, container_id: &str, dataset: MapDataset) {
        self.entries.insert(container_id.to_string(), dataset);
    }

    #[must_use]
    pub fn lookup(&self, container_id: &str) -> Option<&MapDataset> {
        self.entries.get(container_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MapNode;

    fn dataset(node_ids: &[&str]) -> MapDataset {
        MapDataset {
            width: 840.0,
            height: 380.0,
            nodes: node_ids
                .iter()
                .map(|id| MapNode::station(id, id, 0.0, 0.0))
                .collect(),
            links: Vec::new(),
        }
    }

    #[test]
    fn test_lookup_before_record_is_none() {
        let registry = MapRegistry::new();
        assert!(registry.lookup("map").is_none());
    }

    #[test]
    fn test_record_then_lookup() {
        let mut registry = MapRegistry::new();
        registry.record("map", dataset(&["a", "b"]));

        let stored = registry.lookup("map").expect("dataset recorded");
        assert_eq!(stored.nodes.len(), 2);
    }

    #[test]
    fn test_second_record_replaces_first() {
        let mut registry = MapRegistry::new();
        registry.record("map", dataset(&["a", "b"]));
        registry.record("map", dataset(&["c"]));

        let stored = registry.lookup("map").expect("dataset recorded");
        assert_eq!(stored.nodes.len(), 1);
        assert_eq!(stored.nodes[0].id, "c");
    }

    #[test]
    fn test_containers_are_independent() {
        let mut registry = MapRegistry::new();
        registry.record("left", dataset(&["a"]));
        registry.record("right", dataset(&["b", "c"]));

        assert_eq!(registry.lookup("left").map(|d| d.nodes.len()), Some(1));
        assert_eq!(registry.lookup("right").map(|d| d.nodes.len()), Some(2));
    }
}
