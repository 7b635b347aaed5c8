use web_sys::{Document, Element};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Create a namespaced SVG element, or `None` if the document refuses
#[must_use]
pub fn create(document: &Document, name: &str) -> Option<Element> {
    document.create_element_ns(Some(SVG_NS), name).ok()
}

/// Set a batch of attributes, ignoring individual failures
pub fn set_attrs(element: &Element, attrs: &[(&str, &str)]) {
    for (name, value) in attrs {
        let _ = element.set_attribute(name, value);
    }
}

/// Make an element activatable by keyboard as well as pointer
pub fn make_focusable(element: &Element, role: &str) {
    set_attrs(element, &[("tabindex", "0"), ("role", role)]);
}
