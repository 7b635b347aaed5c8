use std::collections::HashMap;

use js_sys::Reflect;
use leptos::*;
use leptos_meta::*;
use wasm_bindgen::{prelude::*, JsCast};

use crate::map_view::{RailwayMap, CHECKBOX_CHANGED_EVENT, NODE_SELECTED_EVENT};
use crate::models::{CheckboxItem, MapDataset, MapNode, TrackLink};

const MAP_CONTAINER_ID: &str = "railway-map-container";
const CHECKBOX_CONTAINER_ID: &str = "railway-checkbox-container";

fn sample_dataset() -> MapDataset {
    MapDataset {
        width: 840.0,
        height: 380.0,
        nodes: vec![
            MapNode::station("st-01", "Northgate", 80.0, 80.0),
            MapNode::station("st-02", "Central", 280.0, 140.0),
            MapNode::crossing("cr-01", "First Crossing", 430.0, 200.0),
            MapNode::station("st-03", "South Shore", 580.0, 260.0),
            MapNode::station("st-04", "Harbour", 720.0, 320.0),
        ],
        links: vec![
            TrackLink::new("st-01", "st-02"),
            TrackLink::new("st-02", "cr-01"),
            TrackLink::new("cr-01", "st-03"),
            TrackLink::new("st-03", "st-04"),
        ],
    }
}

fn sample_checkboxes() -> Vec<CheckboxItem> {
    vec![
        CheckboxItem::new("chk-maintenance", "Maintenance check complete", 220.0, 140.0),
        CheckboxItem::new("chk-snow", "Snow patrol", 480.0, 140.0),
    ]
}

fn detail_string(detail: &JsValue, key: &str) -> Option<String> {
    Reflect::get(detail, &JsValue::from_str(key)).ok()?.as_string()
}

fn detail_bool(detail: &JsValue, key: &str) -> Option<bool> {
    Reflect::get(detail, &JsValue::from_str(key)).ok()?.as_bool()
}

/// Demo shell around the map widget: renders the sample network, offers a
/// section-highlight picker, and reflects widget events in a status line.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let map = store_value(RailwayMap::new());
    let dataset = store_value(sample_dataset());

    let node_options: Vec<(String, String)> = dataset.with_value(|data| {
        data.nodes
            .iter()
            .map(|node| (node.id.clone(), node.name.clone()))
            .collect()
    });
    let first_id = node_options
        .first()
        .map(|(id, _)| id.clone())
        .unwrap_or_default();
    let last_id = node_options
        .last()
        .map(|(id, _)| id.clone())
        .unwrap_or_default();

    let (status, set_status) = create_signal(String::new());
    let (active_station, set_active_station) = create_signal(None::<(String, String)>);
    let (note, set_note) = create_signal(String::new());
    let notes = store_value(HashMap::<String, String>::new());

    let (start_id, set_start_id) = create_signal(first_id);
    let (end_id, set_end_id) = create_signal(last_id);

    let map_ref = create_node_ref::<html::Div>();
    let checkbox_ref = create_node_ref::<html::Div>();

    // Render the map once its container is mounted, then listen for node
    // selections bubbling out of the widget
    create_effect(move |_| {
        let Some(container) = map_ref.get() else { return };

        dataset.with_value(|data| {
            map.update_value(|widget| widget.render(MAP_CONTAINER_ID, data));
        });

        let handler = Closure::wrap(Box::new(move |ev: web_sys::CustomEvent| {
            let detail = ev.detail();
            let (Some(id), Some(node_type), Some(name)) = (
                detail_string(&detail, "id"),
                detail_string(&detail, "type"),
                detail_string(&detail, "name"),
            ) else {
                return;
            };

            if node_type == "station" {
                let existing = notes.with_value(|all| all.get(&id).cloned());
                set_note.set(existing.unwrap_or_default());
                set_active_station.set(Some((id, name)));
            } else {
                set_status.set(format!("{name} selected."));
            }
        }) as Box<dyn FnMut(_)>);
        let _ = container
            .add_event_listener_with_callback(NODE_SELECTED_EVENT, handler.as_ref().unchecked_ref());
        handler.forget();
    });

    // Same for the checkbox demo container
    create_effect(move |_| {
        let Some(container) = checkbox_ref.get() else { return };

        map.with_value(|widget| {
            widget.render_checkbox_demo(CHECKBOX_CONTAINER_ID, &sample_checkboxes());
        });

        let handler = Closure::wrap(Box::new(move |ev: web_sys::CustomEvent| {
            let detail = ev.detail();
            let (Some(label), Some(checked)) = (
                detail_string(&detail, "label"),
                detail_bool(&detail, "checked"),
            ) else {
                return;
            };
            let state = if checked { "checked" } else { "cleared" };
            set_status.set(format!("{label}: {state}."));
        }) as Box<dyn FnMut(_)>);
        let _ = container.add_event_listener_with_callback(
            CHECKBOX_CHANGED_EVENT,
            handler.as_ref().unchecked_ref(),
        );
        handler.forget();
    });

    let apply_section_highlight = move |_| {
        let start = start_id.get();
        let end = end_id.get();
        if start == end {
            set_status.set("Choose two different points.".to_string());
            return;
        }
        map.with_value(|widget| widget.highlight_section(MAP_CONTAINER_ID, &start, &end));
        set_status.set("Section highlighted.".to_string());
    };

    let save_station_note = move |_| {
        let Some((id, name)) = active_station.get() else {
            return;
        };
        notes.update_value(|all| {
            all.insert(id.clone(), note.get());
        });
        map.with_value(|widget| widget.highlight_node(MAP_CONTAINER_ID, &id));
        set_active_station.set(None);
        set_status.set(format!("{name} configured."));
    };

    let start_options = node_options.clone();
    let end_options = node_options;

    view! {
        <Title text="Railway Map Demo"/>

        <div class="app" style="display: flex; flex-direction: column; gap: 16px; padding: 16px;">
            <h1>"Schematic railway map"</h1>
            <h2>"Click a station to configure it, click a line to select it"</h2>

            <div style="display: flex; gap: 8px; align-items: center;">
                <label>
                    "From "
                    <select on:change=move |ev| set_start_id.set(event_target_value(&ev))>
                        {start_options
                            .iter()
                            .map(|(id, name)| {
                                let selected = *id == start_id.get_untracked();
                                view! {
                                    <option value=id.clone() selected=selected>{name.clone()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "To "
                    <select on:change=move |ev| set_end_id.set(event_target_value(&ev))>
                        {end_options
                            .iter()
                            .map(|(id, name)| {
                                let selected = *id == end_id.get_untracked();
                                view! {
                                    <option value=id.clone() selected=selected>{name.clone()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button on:click=apply_section_highlight>"Highlight section"</button>
            </div>

            <div
                id=MAP_CONTAINER_ID
                node_ref=map_ref
                style="width: 100%; height: 480px; border-radius: 16px; overflow: hidden; box-shadow: 0 6px 18px rgba(15, 23, 42, 0.1);"
            ></div>

            <div
                id=CHECKBOX_CONTAINER_ID
                node_ref=checkbox_ref
                style="width: 100%; height: 220px; border-radius: 16px; overflow: hidden; box-shadow: 0 6px 18px rgba(15, 23, 42, 0.1);"
            ></div>

            {move || {
                active_station
                    .get()
                    .map(|(_, name)| {
                        view! {
                            <div style="border: 1px solid #cbd5e1; border-radius: 8px; padding: 12px; max-width: 420px;">
                                <h3>{format!("Configure {name}")}</h3>
                                <textarea
                                    placeholder="e.g. single-track working due to engineering"
                                    prop:value=move || note.get()
                                    on:input=move |ev| set_note.set(event_target_value(&ev))
                                ></textarea>
                                <div style="display: flex; gap: 8px;">
                                    <button on:click=save_station_note>"Save"</button>
                                    <button on:click=move |_| set_active_station.set(None)>"Close"</button>
                                </div>
                            </div>
                        }
                    })
            }}

            <p>{move || status.get()}</p>
        </div>
    }
}
