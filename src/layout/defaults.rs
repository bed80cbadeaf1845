//! Default layout constants
//!
//! All lengths are in hundredths of a millimetre.

/// Radius of a pin hole marker (0.6mm)
pub const PIN_SIZE: f64 = 60.0;

/// Distance between neighbouring pins (2.54mm, the standard 0.1in pitch)
pub const PIN_SPACE: f64 = 254.0;

/// Base spacing unit between labels, panel and decorations (1mm)
pub const PADDING: f64 = 100.0;

/// Font size of pin labels and legend entries
pub const FONT_SIZE: f64 = 150.0;

/// Font size of the diagram title
pub const TITLE_FONT_SIZE: f64 = 200.0;

/// Inner padding between a pin label's background and its text
pub const LABEL_PADDING: f64 = 30.0;

/// Corner radius of pin label backgrounds
pub const LABEL_RADIUS: f64 = 30.0;

/// Margin between the outer pins and the panel edge
pub const PANEL_MARGIN: f64 = 4.0 * PADDING;

/// Edge length of a legend color swatch
pub const SWATCH_SIZE: f64 = FONT_SIZE;

/// Corner radius of the legend background
pub const LEGEND_RADIUS: f64 = 30.0;

/// Stroke width of the legend background
pub const LEGEND_STROKE_WIDTH: f64 = 10.0;

pub const PIN_COLOR: &str = "gold";
pub const PANEL_COLOR: &str = "#f0f0f0";
pub const LEGEND_BACKGROUND: &str = "#ffffff";
pub const LEGEND_BORDER: &str = "#cccccc";
pub const LEGEND_TEXT_COLOR: &str = "#000000";
pub const TITLE_COLOR: &str = "#000000";

/// Type used for labels without an explicit `:type` suffix
pub const DEFAULT_TYPE: &str = "default";

pub const DEFAULT_TITLE: &str = "My PCB";

/// Default grid size in pins, both directions
pub const DEFAULT_GRID_SIZE: u32 = 5;

/// Largest accepted grid size in pins, both directions
pub const MAX_GRID_SIZE: u32 = 10_000;
