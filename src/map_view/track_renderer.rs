use web_sys::{Document, Element};

use crate::models::MapDataset;

use super::events;
use super::svg;

/// Append one line per link into `lines_group`.
///
/// Links referencing unknown node ids are skipped. Activating a line marks
/// it as the single selected line within the container.
pub fn render_links(
    document: &Document,
    container: &Element,
    lines_group: &Element,
    dataset: &MapDataset,
) {
    for link in &dataset.links {
        let (Some(from), Some(to)) = (
            dataset.node_by_id(&link.from),
            dataset.node_by_id(&link.to),
        ) else {
            continue;
        };

        let Some(line) = svg::create(document, "line") else {
            continue;
        };
        svg::set_attrs(
            &line,
            &[
                ("x1", &from.x.to_string()),
                ("y1", &from.y.to_string()),
                ("x2", &to.x.to_string()),
                ("y2", &to.y.to_string()),
                ("data-from", &from.id),
                ("data-to", &to.id),
                ("class", "railway-line"),
            ],
        );
        svg::make_focusable(&line, "button");

        let container = container.clone();
        let line_el = line.clone();
        events::on_activate(&line, move || {
            mark_single_line(&container, &line_el);
        });

        let _ = lines_group.append_child(&line);
    }
}

/// Clear the selected marker from every line in the container and apply it
/// to `line` alone
fn mark_single_line(container: &Element, line: &Element) {
    super::remove_class_from_all(container, "line.railway-line", "selected");
    let _ = line.class_list().add_1("selected");
}
