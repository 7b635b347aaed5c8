use serde::Serialize;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CustomEvent, CustomEventInit, Element};

/// Detail payload of a `map-node-selected` event
#[derive(Debug, Clone, Serialize)]
pub struct NodeSelectionDetail {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
}

/// Detail payload of a `checkbox-selection-changed` event
#[derive(Debug, Clone, Serialize)]
pub struct CheckboxChangeDetail {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

/// Name of the event emitted when a node is activated
pub const NODE_SELECTED_EVENT: &str = "map-node-selected";

/// Name of the event emitted when a demo checkbox is toggled
pub const CHECKBOX_CHANGED_EVENT: &str = "checkbox-selection-changed";

/// Dispatch a bubbling, composed `CustomEvent` from `target` with a
/// serialized detail payload. Serialization failures drop the event.
pub fn dispatch<T: Serialize>(target: &Element, event_name: &str, detail: &T) {
    let Ok(json) = serde_json::to_string(detail) else {
        return;
    };
    let Ok(detail_value) = js_sys::JSON::parse(&json) else {
        return;
    };

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail_value);

    let Ok(event) = CustomEvent::new_with_event_init_dict(event_name, &init) else {
        return;
    };
    let _ = target.dispatch_event(&event);
}

/// Wire `handler` to fire on click and on Enter/Space keydown.
///
/// The closures are leaked with `forget`; they live as long as the document,
/// which matches the lifetime of the rendered widget tree.
pub fn on_activate<F>(element: &Element, handler: F)
where
    F: Fn() + Clone + 'static,
{
    let click_handler = handler.clone();
    let click = Closure::wrap(Box::new(move |_ev: web_sys::MouseEvent| {
        click_handler();
    }) as Box<dyn FnMut(_)>);
    let _ = element.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();

    let keydown = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            handler();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = element.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();
}
