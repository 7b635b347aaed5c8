mod checkbox;
mod dataset;
mod link;
pub mod map_graph;
mod node;

pub use checkbox::CheckboxItem;
pub use dataset::MapDataset;
pub use link::TrackLink;
pub use map_graph::{MapGraph, Pathfinding};
pub use node::{MapNode, NodeType};
