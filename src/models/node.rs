use serde::{Deserialize, Serialize};

/// Kind of point on the map: a passenger station or a level crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Station,
    Crossing,
}

impl NodeType {
    /// Stable string form, matching the serialized representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Station => "station",
            NodeType::Crossing => "crossing",
        }
    }
}

/// A station or crossing with its position on the schematic canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub x: f64,
    pub y: f64,
}

impl MapNode {
    #[must_use]
    pub fn station(id: &str, name: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            node_type: NodeType::Station,
            x,
            y,
        }
    }

    #[must_use]
    pub fn crossing(id: &str, name: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            node_type: NodeType::Crossing,
            x,
            y,
        }
    }

    #[must_use]
    pub fn is_station(&self) -> bool {
        matches!(self.node_type, NodeType::Station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_serializes_lowercase() {
        let node = MapNode::station("st-01", "North Gate", 80.0, 80.0);
        let json = serde_json::to_value(&node).expect("serialize node");
        assert_eq!(json["type"], "station");
        assert_eq!(json["id"], "st-01");

        let crossing = MapNode::crossing("cr-01", "Crossing No. 1", 430.0, 200.0);
        let json = serde_json::to_value(&crossing).expect("serialize crossing");
        assert_eq!(json["type"], "crossing");
    }

    #[test]
    fn test_node_type_round_trips_from_wire_shape() {
        let node: MapNode = serde_json::from_str(
            r#"{"id":"st-02","name":"Central","type":"station","x":280,"y":140}"#,
        )
        .expect("deserialize node");
        assert!(node.is_station());
        assert_eq!(node.node_type.as_str(), "station");
    }

    #[test]
    fn test_crossing_is_not_station() {
        let node = MapNode::crossing("cr-01", "Crossing No. 1", 0.0, 0.0);
        assert!(!node.is_station());
    }
}
