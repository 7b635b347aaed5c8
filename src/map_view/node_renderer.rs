use web_sys::{Document, Element};

use crate::constants::{
    CROSSING_CORNER_RADIUS, CROSSING_HALF_SIZE, CROSSING_STROKE_HALF, NODE_LABEL_OFFSET,
    STATION_RADIUS,
};
use crate::models::{MapDataset, MapNode};

use super::events::{self, NodeSelectionDetail, NODE_SELECTED_EVENT};
use super::svg;

/// Append a marker group and label per node into `nodes_group`.
///
/// Stations are circles, crossings are rounded squares with a diagonal
/// cross. Activating a node dispatches `map-node-selected` from the
/// container.
pub fn render_nodes(
    document: &Document,
    container: &Element,
    nodes_group: &Element,
    dataset: &MapDataset,
) {
    for node in &dataset.nodes {
        let Some(group) = svg::create(document, "g") else {
            continue;
        };
        svg::set_attrs(
            &group,
            &[("data-node-id", &node.id), ("class", "railway-node")],
        );
        svg::make_focusable(&group, "button");

        let container = container.clone();
        let detail = NodeSelectionDetail {
            id: node.id.clone(),
            node_type: node.node_type.as_str().to_string(),
            name: node.name.clone(),
        };
        events::on_activate(&group, move || {
            events::dispatch(&container, NODE_SELECTED_EVENT, &detail);
        });

        if node.is_station() {
            append_station_marker(document, &group, node);
        } else {
            append_crossing_marker(document, &group, node);
        }

        let _ = nodes_group.append_child(&group);

        if let Some(label) = svg::create(document, "text") {
            label.set_text_content(Some(&node.name));
            svg::set_attrs(
                &label,
                &[
                    ("x", &node.x.to_string()),
                    ("y", &(node.y + NODE_LABEL_OFFSET).to_string()),
                    ("class", "railway-node-label"),
                ],
            );
            let _ = nodes_group.append_child(&label);
        }
    }
}

fn append_station_marker(document: &Document, group: &Element, node: &MapNode) {
    let Some(circle) = svg::create(document, "circle") else {
        return;
    };
    svg::set_attrs(
        &circle,
        &[
            ("cx", &node.x.to_string()),
            ("cy", &node.y.to_string()),
            ("r", &STATION_RADIUS.to_string()),
            ("class", "railway-node-icon station"),
        ],
    );
    let _ = group.append_child(&circle);
}

fn append_crossing_marker(document: &Document, group: &Element, node: &MapNode) {
    let Some(rect) = svg::create(document, "rect") else {
        return;
    };
    let side = CROSSING_HALF_SIZE * 2.0;
    svg::set_attrs(
        &rect,
        &[
            ("x", &(node.x - CROSSING_HALF_SIZE).to_string()),
            ("y", &(node.y - CROSSING_HALF_SIZE).to_string()),
            ("width", &side.to_string()),
            ("height", &side.to_string()),
            ("rx", &CROSSING_CORNER_RADIUS.to_string()),
            ("class", "railway-node-icon crossing"),
        ],
    );
    let _ = group.append_child(&rect);

    // Two diagonal strokes forming the X
    for (x1, y1, x2, y2) in [
        (
            node.x - CROSSING_STROKE_HALF,
            node.y - CROSSING_STROKE_HALF,
            node.x + CROSSING_STROKE_HALF,
            node.y + CROSSING_STROKE_HALF,
        ),
        (
            node.x + CROSSING_STROKE_HALF,
            node.y - CROSSING_STROKE_HALF,
            node.x - CROSSING_STROKE_HALF,
            node.y + CROSSING_STROKE_HALF,
        ),
    ] {
        let Some(stroke) = svg::create(document, "line") else {
            continue;
        };
        svg::set_attrs(
            &stroke,
            &[
                ("x1", &x1.to_string()),
                ("y1", &y1.to_string()),
                ("x2", &x2.to_string()),
                ("y2", &y2.to_string()),
                ("class", "railway-crossing-line"),
            ],
        );
        let _ = group.append_child(&stroke);
    }
}
