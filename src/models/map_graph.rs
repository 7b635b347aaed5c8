use indexmap::{IndexMap, IndexSet};

use super::link::TrackLink;
use super::node::MapNode;

mod pathfinding;

pub use pathfinding::Pathfinding;

/// Undirected adjacency view of a map dataset.
///
/// Every node id from the dataset appears as a key, so neighbor lookups never
/// fail for a known node. Links whose endpoints are not both present in the
/// node set are ignored, and duplicate links between the same pair collapse
/// to a single neighbor entry. Insertion order is preserved, which keeps
/// traversal order deterministic for a given dataset ordering.
#[derive(Debug, Clone, Default)]
pub struct MapGraph {
    adjacency: IndexMap<String, IndexSet<String>>,
}

impl MapGraph {
    #[must_use]
    pub fn from_dataset(nodes: &[MapNode], links: &[TrackLink]) -> Self {
        let mut adjacency: IndexMap<String, IndexSet<String>> = IndexMap::new();

        for node in nodes {
            adjacency.entry(node.id.clone()).or_default();
        }

        for link in links {
            if !adjacency.contains_key(&link.from) || !adjacency.contains_key(&link.to) {
                continue;
            }
            if let Some(neighbors) = adjacency.get_mut(&link.from) {
                neighbors.insert(link.to.clone());
            }
            if let Some(neighbors) = adjacency.get_mut(&link.to) {
                neighbors.insert(link.from.clone());
            }
        }

        Self { adjacency }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    #[must_use]
    pub fn neighbors(&self, id: &str) -> Option<&IndexSet<String>> {
        self.adjacency.get(id)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}
