use serde::{Deserialize, Serialize};

use super::link::TrackLink;
use super::node::MapNode;

/// Everything needed to draw one map: canvas size plus node and link sets.
///
/// Owned by the caller; the registry keeps a clone per container so that a
/// later section-highlight request can rebuild the graph without the caller
/// re-supplying the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDataset {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<MapNode>,
    pub links: Vec<TrackLink>,
}

impl MapDataset {
    #[must_use]
    pub fn node_by_id(&self, id: &str) -> Option<&MapNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
