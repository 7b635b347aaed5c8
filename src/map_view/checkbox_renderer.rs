use web_sys::{Document, Element};

use crate::constants::{
    CHECKBOX_CORNER_RADIUS, CHECKBOX_HALF_SIZE, CHECKBOX_LABEL_OFFSET, CHECKBOX_MARK_POINTS,
    CHECKBOX_VIEWBOX_HEIGHT, CHECKBOX_VIEWBOX_WIDTH,
};
use crate::models::CheckboxItem;

use super::events::{self, CheckboxChangeDetail, CHECKBOX_CHANGED_EVENT};
use super::svg;

/// Replace any existing checkbox widget in `container` with one built from
/// `items`. Each checkbox tracks its own checked state in the DOM and
/// dispatches `checkbox-selection-changed` from the container on toggle.
pub fn render_checkboxes(document: &Document, container: &Element, items: &[CheckboxItem]) {
    let Some(widget) = svg::create(document, "svg") else {
        return;
    };
    svg::set_attrs(
        &widget,
        &[
            (
                "viewBox",
                &format!("0 0 {CHECKBOX_VIEWBOX_WIDTH} {CHECKBOX_VIEWBOX_HEIGHT}"),
            ),
            ("width", "100%"),
            ("height", "100%"),
            ("class", "railway-checkbox-demo"),
        ],
    );

    if let Ok(Some(existing)) = container.query_selector("svg") {
        existing.remove();
    }
    let _ = container.append_child(&widget);

    for item in items {
        append_checkbox(document, container, &widget, item);
    }
}

fn append_checkbox(document: &Document, container: &Element, widget: &Element, item: &CheckboxItem) {
    let Some(group) = svg::create(document, "g") else {
        return;
    };
    svg::set_attrs(
        &group,
        &[
            ("transform", &format!("translate({}, {})", item.x, item.y)),
            ("class", "railway-checkbox"),
            ("aria-checked", "false"),
        ],
    );
    svg::make_focusable(&group, "checkbox");

    if let Some(frame) = svg::create(document, "rect") {
        svg::set_attrs(
            &frame,
            &[
                ("x", &(-CHECKBOX_HALF_SIZE).to_string()),
                ("y", &(-CHECKBOX_HALF_SIZE).to_string()),
                ("width", &(CHECKBOX_HALF_SIZE * 2.0).to_string()),
                ("height", &(CHECKBOX_HALF_SIZE * 2.0).to_string()),
                ("rx", &CHECKBOX_CORNER_RADIUS.to_string()),
                ("class", "checkbox-box"),
            ],
        );
        let _ = group.append_child(&frame);
    }

    if let Some(mark) = svg::create(document, "polyline") {
        svg::set_attrs(
            &mark,
            &[("points", CHECKBOX_MARK_POINTS), ("class", "checkbox-mark")],
        );
        let _ = group.append_child(&mark);
    }

    if let Some(label) = svg::create(document, "text") {
        label.set_text_content(Some(&item.label));
        let (dx, dy) = CHECKBOX_LABEL_OFFSET;
        svg::set_attrs(
            &label,
            &[
                ("x", &dx.to_string()),
                ("y", &dy.to_string()),
                ("class", "checkbox-label"),
            ],
        );
        let _ = group.append_child(&label);
    }

    let container = container.clone();
    let group_el = group.clone();
    let id = item.id.clone();
    let label_text = item.label.clone();
    events::on_activate(&group, move || {
        let was_checked = group_el
            .get_attribute("aria-checked")
            .is_some_and(|value| value == "true");
        let checked = !was_checked;

        let _ = group_el.set_attribute("aria-checked", if checked { "true" } else { "false" });
        let _ = group_el.class_list().toggle_with_force("checked", checked);

        events::dispatch(
            &container,
            CHECKBOX_CHANGED_EVENT,
            &CheckboxChangeDetail {
                id: id.clone(),
                label: label_text.clone(),
                checked,
            },
        );
    });

    let _ = widget.append_child(&group);
}
