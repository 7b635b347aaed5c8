use web_sys::Document;

use crate::constants::STYLE_ELEMENT_ID;

const WIDGET_CSS: &str = r#"
.railway-line {
  stroke: #1e40af;
  stroke-width: 6;
  stroke-linecap: round;
}

.railway-line.highlighted {
  stroke: #22c55e;
  stroke-width: 8;
}

.railway-line.selected {
  stroke: #fb923c;
  stroke-width: 8;
}

.railway-node {
  cursor: pointer;
}

.railway-node-icon.station {
  fill: #0f172a;
  stroke: #e2e8f0;
  stroke-width: 2;
}

.railway-node-icon.crossing {
  fill: #f97316;
  stroke: #fff;
  stroke-width: 2;
}

.railway-crossing-line {
  stroke: #fff;
  stroke-width: 4;
}

.railway-node.configured .railway-node-icon {
  fill: #d946ef;
  stroke: #fdf2f8;
}

.railway-node-label {
  font-family: "Inter", "Noto Sans JP", sans-serif;
  font-size: 16px;
  fill: #1f2937;
  text-anchor: middle;
  pointer-events: none;
}

.railway-checkbox-demo {
  background: #f8fafc;
}

.railway-checkbox {
  cursor: pointer;
}

.checkbox-box {
  fill: #fff;
  stroke: #1d4ed8;
  stroke-width: 2;
}

.checkbox-mark {
  fill: none;
  stroke: #1d4ed8;
  stroke-width: 3;
  stroke-linecap: round;
  stroke-linejoin: round;
  opacity: 0;
}

.checkbox-label {
  font-family: "Inter", "Noto Sans JP", sans-serif;
  font-size: 16px;
  fill: #111827;
}

.railway-checkbox.checked .checkbox-box {
  fill: #1d4ed8;
  stroke: #1d4ed8;
}

.railway-checkbox.checked .checkbox-mark {
  opacity: 1;
  stroke: #fff;
}
"#;

/// Inject the widget stylesheet once per document
pub fn ensure_style(document: &Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(WIDGET_CSS));
    let _ = head.append_child(&style);
}
