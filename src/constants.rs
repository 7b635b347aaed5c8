/// Element id of the injected widget stylesheet
pub const STYLE_ELEMENT_ID: &str = "railway-map-style";

/// Radius of a station marker circle
pub const STATION_RADIUS: f64 = 18.0;

/// Half the side length of a crossing marker square
pub const CROSSING_HALF_SIZE: f64 = 16.0;

/// Corner radius of a crossing marker square
pub const CROSSING_CORNER_RADIUS: f64 = 6.0;

/// Half-extent of the diagonal cross strokes inside a crossing marker
pub const CROSSING_STROKE_HALF: f64 = 12.0;

/// Vertical offset of a node label below the node centre
pub const NODE_LABEL_OFFSET: f64 = 36.0;

/// Fixed viewBox of the checkbox demo widget
pub const CHECKBOX_VIEWBOX_WIDTH: f64 = 800.0;
pub const CHECKBOX_VIEWBOX_HEIGHT: f64 = 240.0;

/// Half the side length of a checkbox box
pub const CHECKBOX_HALF_SIZE: f64 = 18.0;

/// Corner radius of a checkbox box
pub const CHECKBOX_CORNER_RADIUS: f64 = 8.0;

/// Check-mark polyline, relative to the checkbox centre
pub const CHECKBOX_MARK_POINTS: &str = "-8,0 -2,8 12,-10";

/// Offset of a checkbox label from the checkbox centre
pub const CHECKBOX_LABEL_OFFSET: (f64, f64) = (28.0, 6.0);
