use serde::{Deserialize, Serialize};

/// One entry of the checkbox demo widget: label plus position inside the
/// widget's fixed viewBox. Not retained after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxItem {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl CheckboxItem {
    #[must_use]
    pub fn new(id: &str, label: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            x,
            y,
        }
    }
}
