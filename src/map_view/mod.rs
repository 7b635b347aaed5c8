use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::log;
use crate::models::{CheckboxItem, MapDataset, MapGraph, Pathfinding};
use crate::registry::MapRegistry;

mod checkbox_renderer;
mod events;
mod node_renderer;
mod style;
mod svg;
mod track_renderer;

pub use events::{
    CheckboxChangeDetail, NodeSelectionDetail, CHECKBOX_CHANGED_EVENT, NODE_SELECTED_EVENT,
};

/// Interactive schematic railway map widget.
///
/// The embedding application constructs one of these and calls the
/// operations against container element ids. The last dataset rendered per
/// container is kept in the owned registry so section highlighting can
/// rebuild the graph later. Every operation absorbs failure (missing
/// container, unknown node, no path) as a silent no-op.
#[derive(Debug, Default)]
pub struct RailwayMap {
    registry: MapRegistry,
}

impl RailwayMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn registry(&self) -> &MapRegistry {
        &self.registry
    }

    /// Build (or replace) the map inside the container and record the
    /// dataset for later highlight requests
    pub fn render(&mut self, container_id: &str, dataset: &MapDataset) {
        let Some(document) = document() else { return };
        let Some(container) = document.get_element_by_id(container_id) else {
            return;
        };

        style::ensure_style(&document);
        self.registry.record(container_id, dataset.clone());
        log!(
            "Rendering railway map into #{container_id}: {} nodes, {} links",
            dataset.nodes.len(),
            dataset.links.len()
        );

        container.set_inner_html("");

        let Some(root) = svg::create(&document, "svg") else {
            return;
        };
        svg::set_attrs(
            &root,
            &[
                ("viewBox", &format!("0 0 {} {}", dataset.width, dataset.height)),
                ("width", "100%"),
                ("height", "100%"),
            ],
        );

        let (Some(lines_group), Some(nodes_group)) =
            (svg::create(&document, "g"), svg::create(&document, "g"))
        else {
            return;
        };

        track_renderer::render_links(&document, &container, &lines_group, dataset);
        node_renderer::render_nodes(&document, &container, &nodes_group, dataset);

        let _ = root.append_child(&lines_group);
        let _ = root.append_child(&nodes_group);
        let _ = container.append_child(&root);
    }

    /// Move the "configured" marker to the given node, clearing it from any
    /// node that carried it before
    pub fn highlight_node(&self, container_id: &str, node_id: &str) {
        let Some(document) = document() else { return };
        let Some(container) = document.get_element_by_id(container_id) else {
            return;
        };

        remove_class_from_all(&container, "g.railway-node.configured", "configured");

        let selector = format!("g.railway-node[data-node-id=\"{node_id}\"]");
        if let Ok(Some(node)) = container.query_selector(&selector) {
            let _ = node.class_list().add_1("configured");
        }
    }

    /// Highlight the track segments along a shortest path between two nodes.
    ///
    /// Clears any previous section highlight first. Without a recorded
    /// dataset for the container this does nothing; with no path between the
    /// endpoints the cleared state stands.
    pub fn highlight_section(&self, container_id: &str, start_id: &str, end_id: &str) {
        let Some(dataset) = self.registry.lookup(container_id) else {
            return;
        };
        let Some(document) = document() else { return };
        let Some(container) = document.get_element_by_id(container_id) else {
            return;
        };

        remove_class_from_all(&container, "line.railway-line", "highlighted");

        let graph = MapGraph::from_dataset(&dataset.nodes, &dataset.links);
        let Some(path) = graph.shortest_path(start_id, end_id) else {
            log!("No path between {start_id} and {end_id} in #{container_id}");
            return;
        };

        for pair in path.windows(2) {
            for link in dataset
                .links
                .iter()
                .filter(|link| link.connects(&pair[0], &pair[1]))
            {
                mark_section_lines(&container, &link.from, &link.to);
            }
        }
    }

    /// Replace any existing checkbox widget in the container with one built
    /// from `items`
    pub fn render_checkbox_demo(&self, container_id: &str, items: &[CheckboxItem]) {
        let Some(document) = document() else { return };
        let Some(container) = document.get_element_by_id(container_id) else {
            return;
        };

        style::ensure_style(&document);
        checkbox_renderer::render_checkboxes(&document, &container, items);
    }
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Remove `class` from every element under `container` matching `selector`
fn remove_class_from_all(container: &Element, selector: &str, class: &str) {
    let Ok(list) = container.query_selector_all(selector) else {
        return;
    };
    for index in 0..list.length() {
        let Some(element) = list.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let _ = element.class_list().remove_1(class);
    }
}

/// Mark every rendered line stamped with this `from`/`to` pair as part of
/// the highlighted section. Duplicate links share the stamp and all get
/// marked.
fn mark_section_lines(container: &Element, from: &str, to: &str) {
    let selector = format!("line.railway-line[data-from=\"{from}\"][data-to=\"{to}\"]");
    let Ok(list) = container.query_selector_all(&selector) else {
        return;
    };
    for index in 0..list.length() {
        let Some(element) = list.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let _ = element.class_list().add_1("highlighted");
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::models::{CheckboxItem, MapDataset, MapNode, TrackLink};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_container(id: &str) -> Element {
        let document = document().expect("document");
        let container = document.create_element("div").expect("create div");
        container.set_id(id);
        document
            .body()
            .expect("body")
            .append_child(&container)
            .expect("append container");
        container
    }

    // Chain a - b - c plus one link to an unknown node
    fn chain_dataset() -> MapDataset {
        MapDataset {
            width: 600.0,
            height: 300.0,
            nodes: vec![
                MapNode::station("a", "Alpha", 50.0, 50.0),
                MapNode::crossing("b", "Bravo", 150.0, 100.0),
                MapNode::station("c", "Charlie", 250.0, 150.0),
            ],
            links: vec![
                TrackLink::new("a", "b"),
                TrackLink::new("b", "c"),
                TrackLink::new("c", "ghost"),
            ],
        }
    }

    fn count(container: &Element, selector: &str) -> u32 {
        container
            .query_selector_all(selector)
            .expect("query selector")
            .length()
    }

    #[wasm_bindgen_test]
    fn test_render_builds_svg_tree() {
        let container = mount_container("map-render");
        let mut map = RailwayMap::new();
        map.render("map-render", &chain_dataset());

        assert_eq!(count(&container, "svg"), 1);
        assert_eq!(count(&container, "g.railway-node"), 3);
        assert_eq!(count(&container, ".railway-node-label"), 3);
        // The link to the unknown node is skipped
        assert_eq!(count(&container, "line.railway-line"), 2);
    }

    #[wasm_bindgen_test]
    fn test_render_twice_replaces_tree() {
        let container = mount_container("map-rerender");
        let mut map = RailwayMap::new();
        map.render("map-rerender", &chain_dataset());

        let smaller = MapDataset {
            width: 200.0,
            height: 200.0,
            nodes: vec![MapNode::station("solo", "Solo", 100.0, 100.0)],
            links: Vec::new(),
        };
        map.render("map-rerender", &smaller);

        assert_eq!(count(&container, "svg"), 1);
        assert_eq!(count(&container, "g.railway-node"), 1);
        assert_eq!(
            map.registry().lookup("map-rerender").map(|d| d.nodes.len()),
            Some(1)
        );
    }

    #[wasm_bindgen_test]
    fn test_highlight_node_moves_configured_marker() {
        let container = mount_container("map-configured");
        let mut map = RailwayMap::new();
        map.render("map-configured", &chain_dataset());

        map.highlight_node("map-configured", "a");
        assert_eq!(count(&container, "g.railway-node.configured"), 1);

        map.highlight_node("map-configured", "b");
        assert_eq!(count(&container, "g.railway-node.configured"), 1);
        let marked = container
            .query_selector("g.railway-node.configured")
            .expect("query")
            .expect("configured node");
        assert_eq!(marked.get_attribute("data-node-id").as_deref(), Some("b"));

        // An unknown node id clears the marker without applying a new one
        map.highlight_node("map-configured", "missing");
        assert_eq!(count(&container, "g.railway-node.configured"), 0);
    }

    #[wasm_bindgen_test]
    fn test_highlight_section_marks_and_clears_lines() {
        let container = mount_container("map-section");
        let mut map = RailwayMap::new();
        map.render("map-section", &chain_dataset());

        map.highlight_section("map-section", "a", "c");
        assert_eq!(count(&container, "line.railway-line.highlighted"), 2);

        // A new request replaces the previous highlight
        map.highlight_section("map-section", "a", "b");
        assert_eq!(count(&container, "line.railway-line.highlighted"), 1);

        // No path: the cleared state stands
        map.highlight_section("map-section", "a", "ghost");
        assert_eq!(count(&container, "line.railway-line.highlighted"), 0);
    }

    #[wasm_bindgen_test]
    fn test_stylesheet_injected_once_per_document() {
        mount_container("map-style-one");
        mount_container("map-style-two");
        let mut map = RailwayMap::new();
        map.render("map-style-one", &chain_dataset());
        map.render("map-style-two", &chain_dataset());

        let document = document().expect("document");
        let styles = document
            .query_selector_all("style#railway-map-style")
            .expect("query styles");
        assert_eq!(styles.length(), 1);
    }

    #[wasm_bindgen_test]
    fn test_checkbox_demo_replaces_widget() {
        let container = mount_container("checkbox-demo");
        let map = RailwayMap::new();

        map.render_checkbox_demo(
            "checkbox-demo",
            &[
                CheckboxItem::new("one", "First", 100.0, 100.0),
                CheckboxItem::new("two", "Second", 300.0, 100.0),
            ],
        );
        assert_eq!(count(&container, "svg"), 1);
        assert_eq!(count(&container, "g.railway-checkbox"), 2);

        map.render_checkbox_demo(
            "checkbox-demo",
            &[CheckboxItem::new("three", "Third", 100.0, 100.0)],
        );
        assert_eq!(count(&container, "svg"), 1);
        assert_eq!(count(&container, "g.railway-checkbox"), 1);
    }
}
