//! Pin grid configuration
//!
//! A [`PinGrid`] describes one board: its size in pins, the labels attached
//! to each pin on the four sides, the pin types those labels refer to, and
//! optional front/back artwork. Every field has a default, so a partial
//! configuration merges onto the built-in one.

use glam::{DVec2, dvec2};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::defaults::{DEFAULT_GRID_SIZE, DEFAULT_TITLE, DEFAULT_TYPE, MAX_GRID_SIZE, PIN_SPACE};
use crate::errors::{ConfigError, LayoutError};
use crate::scene::Alignment;
use crate::types::finite;

/// One of the four pin rows around the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Build order of the rows
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }

    /// Direction labels on this side grow in
    pub fn alignment(self, gap: f64) -> Alignment {
        match self {
            Side::Left => Alignment::LeftOf { gap },
            Side::Right => Alignment::RightOf { gap },
            Side::Top => Alignment::Above { gap },
            Side::Bottom => Alignment::Under { gap },
        }
    }
}

/// Inward offsets of each row, in pins
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Offsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Labels of every pin position, per side.
///
/// Each pin holds a list of `"text:type"` labels; an empty list means the
/// position is unused. In JSON, `null` reads as an empty pin or row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pins {
    #[serde(deserialize_with = "nullable_row")]
    pub left: Vec<Vec<String>>,
    #[serde(deserialize_with = "nullable_row")]
    pub right: Vec<Vec<String>>,
    #[serde(deserialize_with = "nullable_row")]
    pub top: Vec<Vec<String>>,
    #[serde(deserialize_with = "nullable_row")]
    pub bottom: Vec<Vec<String>>,
}

fn nullable_row<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let row = Option::<Vec<Option<Vec<String>>>>::deserialize(deserializer)?;
    Ok(row
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

impl Pins {
    pub fn row(&self, side: Side) -> &[Vec<String>] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    fn row_mut(&mut self, side: Side) -> &mut Vec<Vec<String>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
        }
    }

    /// Every label on the board, rows in build order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        Side::ALL
            .into_iter()
            .flat_map(move |side| self.row(side).iter().flatten().map(String::as_str))
    }
}

/// Display settings of a pin type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinType {
    pub label: String,
    pub bgcolor: String,
    pub fgcolor: String,
}

impl PinType {
    pub fn new(label: &str, bgcolor: &str, fgcolor: &str) -> Self {
        Self {
            label: label.to_string(),
            bgcolor: bgcolor.to_string(),
            fgcolor: fgcolor.to_string(),
        }
    }
}

/// A pin type as written in a configuration; omitted fields keep the
/// built-in value.
#[derive(Debug, Default, Deserialize)]
struct PinTypePatch {
    label: Option<String>,
    bgcolor: Option<String>,
    fgcolor: Option<String>,
}

impl PinTypePatch {
    fn apply(self, name: &str, base: Option<PinType>) -> PinType {
        let base = base.unwrap_or_else(|| PinType::new(name, "#ffffff", "#000000"));
        PinType {
            label: self.label.unwrap_or(base.label),
            bgcolor: self.bgcolor.unwrap_or(base.bgcolor),
            fgcolor: self.fgcolor.unwrap_or(base.fgcolor),
        }
    }
}

/// The built-in pin types
pub fn builtin_types() -> IndexMap<String, PinType> {
    [
        (DEFAULT_TYPE, PinType::new("PIN", "#ffffff", "#000000")),
        ("gpio", PinType::new("GPIO", "#8c49ae", "#ffffff")),
        ("power", PinType::new("Power", "#cc322d", "#ffffff")),
        ("gnd", PinType::new("Ground", "#333333", "#ffffff")),
        ("i2c", PinType::new("I2C", "#485377", "#ffffff")),
        ("uart", PinType::new("UART", "#34CD71", "#ffffff")),
        ("spi", PinType::new("SPI", "#3399DD", "#ffffff")),
        ("analog", PinType::new("Analog", "#e38022", "#ffffff")),
    ]
    .into_iter()
    .map(|(name, ty)| (name.to_string(), ty))
    .collect()
}

fn merge_types<'de, D>(deserializer: D) -> Result<IndexMap<String, PinType>, D::Error>
where
    D: Deserializer<'de>,
{
    let patches = IndexMap::<String, PinTypePatch>::deserialize(deserializer)?;
    let mut types = builtin_types();
    for (name, patch) in patches {
        let merged = patch.apply(&name, types.get(&name).cloned());
        types.insert(name, merged);
    }
    Ok(types)
}

/// Artwork for one face of the board.
///
/// The margins move the image edges inwards from the nominal panel; negative
/// margins let the artwork extend past it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSpec {
    pub src: String,
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ImageSpec {
    pub fn has_source(&self) -> bool {
        !self.src.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub front: ImageSpec,
    pub back: ImageSpec,
}

/// A web font embedded through `@font-face`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFace {
    pub family: String,
    pub src: String,
    pub weight: Option<String>,
    pub style: Option<String>,
}

/// One parsed `"text:type"` label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSpec<'a> {
    pub text: &'a str,
    pub kind: &'a str,
}

impl<'a> LabelSpec<'a> {
    /// Split at the first `:`; anything after a second `:` is ignored.
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split(':');
        let text = parts.next().unwrap_or_default();
        let kind = parts.next().unwrap_or(DEFAULT_TYPE);
        Self { text, kind }
    }
}

/// Configuration of one pin-header diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinGrid {
    pub title: String,
    /// Number of pins along the top and bottom rows
    pub width: u32,
    /// Number of pins along the left and right rows
    pub height: u32,
    pub offsets: Offsets,
    pub pins: Pins,
    #[serde(deserialize_with = "merge_types")]
    pub types: IndexMap<String, PinType>,
    pub image: Images,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontFace>,
}

impl Default for PinGrid {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            offsets: Offsets::default(),
            pins: Pins::default(),
            types: builtin_types(),
            image: Images::default(),
            font: None,
        }
    }
}

impl PinGrid {
    /// Parse a JSON configuration, merging it onto the defaults
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Number of pin positions in a row
    pub fn pin_count(&self, side: Side) -> usize {
        match side {
            Side::Left | Side::Right => self.height as usize,
            Side::Top | Side::Bottom => self.width as usize,
        }
    }

    /// Reject configurations no layout can be built from
    pub fn validate(&self) -> Result<(), LayoutError> {
        let size = 1..=MAX_GRID_SIZE;
        if !size.contains(&self.width) || !size.contains(&self.height) {
            return Err(LayoutError::InvalidGrid {
                width: self.width,
                height: self.height,
            });
        }
        let number = |what: &'static str, value: f64| {
            finite(value).map_err(|source| LayoutError::InvalidNumber { what, source })
        };
        for offset in [self.offsets.left, self.offsets.top, self.offsets.right, self.offsets.bottom] {
            number("row offset", offset)?;
        }
        for image in [&self.image.front, &self.image.back] {
            for margin in [image.top, image.left, image.right, image.bottom] {
                number("image margin", margin)?;
            }
        }
        Ok(())
    }

    /// Pad every row with empty pins, or truncate it, to its pin count
    pub fn normalize(&mut self) {
        for side in Side::ALL {
            let expected = self.pin_count(side);
            let row = self.pins.row_mut(side);
            if row.len() > expected {
                crate::log::warn!(
                    side = side.name(),
                    found = row.len(),
                    expected,
                    "pin row is longer than the grid, truncating"
                );
                row.truncate(expected);
            } else {
                row.resize_with(expected, Vec::new);
            }
        }
    }

    /// The same board seen from the other face.
    ///
    /// Left and right rows (and their offsets) trade places, top and bottom
    /// rows run in reverse, and the front and back artwork swap.
    pub fn flipped(&self) -> Self {
        let mut flipped = self.clone();
        std::mem::swap(&mut flipped.pins.left, &mut flipped.pins.right);
        std::mem::swap(&mut flipped.offsets.left, &mut flipped.offsets.right);
        flipped.pins.top.reverse();
        flipped.pins.bottom.reverse();
        std::mem::swap(&mut flipped.image.front, &mut flipped.image.back);
        flipped
    }

    /// Center of the pin marker at `index` in a row
    pub fn pin_position(&self, side: Side, index: usize) -> DVec2 {
        let i = index as f64;
        let last_column = f64::from(self.width) - 1.0;
        let last_row = f64::from(self.height) - 1.0;
        let (x, y) = match side {
            Side::Left => (self.offsets.left, i),
            Side::Right => (last_column - self.offsets.right, i),
            Side::Top => (i, self.offsets.top),
            Side::Bottom => (i, last_row - self.offsets.bottom),
        };
        dvec2(x * PIN_SPACE, y * PIN_SPACE)
    }

    /// Look up a pin type, falling back to `default` for unknown names.
    ///
    /// Returns the name actually used alongside its settings, or `None`
    /// when neither exists.
    pub fn resolve_type<'a>(&'a self, name: &'a str) -> Option<(&'a str, &'a PinType)> {
        if let Some(ty) = self.types.get(name) {
            return Some((name, ty));
        }
        self.types.get(DEFAULT_TYPE).map(|ty| (DEFAULT_TYPE, ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let grid = PinGrid::default();
        assert_eq!(grid.title, "My PCB");
        assert_eq!((grid.width, grid.height), (5, 5));
        assert_eq!(grid.types.len(), 8);
        assert_eq!(grid.types["power"].label, "Power");
        assert!(grid.font.is_none());
    }

    #[test]
    fn partial_json_merges_onto_defaults() {
        let grid = PinGrid::from_json(
            r##"{
                "width": 2,
                "offsets": { "left": 1 },
                "types": {
                    "power": { "bgcolor": "#ff0000" },
                    "pwm": { "label": "PWM", "bgcolor": "#00ff00" }
                },
                "image": { "front": { "src": "front.png" } }
            }"##,
        )
        .unwrap();
        assert_eq!(grid.title, "My PCB");
        assert_eq!((grid.width, grid.height), (2, 5));
        assert_eq!(grid.offsets, Offsets { left: 1.0, ..Offsets::default() });
        assert_eq!(grid.types["power"], PinType::new("Power", "#ff0000", "#ffffff"));
        assert_eq!(grid.types["pwm"], PinType::new("PWM", "#00ff00", "#000000"));
        assert_eq!(grid.types.len(), 9);
        assert_eq!(grid.image.front.src, "front.png");
        assert!(!grid.image.back.has_source());
    }

    #[test]
    fn bad_json_is_a_config_error() {
        let err = PinGrid::from_json(r#"{"width": "wide"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn null_pins_and_rows_read_as_empty() {
        let grid = PinGrid::from_json(
            r#"{"width": 2, "height": 2, "pins": {"left": [null, ["5V:power"]], "top": null}}"#,
        )
        .unwrap();
        assert_eq!(grid.pins.left, vec![vec![], labels(&["5V:power"])]);
        assert!(grid.pins.top.is_empty());
        assert!(grid.pins.right.is_empty());
    }

    #[test]
    fn label_parsing() {
        assert_eq!(LabelSpec::parse("5V:power"), LabelSpec { text: "5V", kind: "power" });
        assert_eq!(LabelSpec::parse("D0"), LabelSpec { text: "D0", kind: "default" });
        assert_eq!(LabelSpec::parse("A:b:c"), LabelSpec { text: "A", kind: "b" });
    }

    #[test]
    fn normalize_pads_and_truncates() {
        let mut grid = PinGrid {
            width: 2,
            height: 3,
            ..PinGrid::default()
        };
        grid.pins.left = vec![labels(&["a"])];
        grid.pins.top = vec![labels(&["b"]), labels(&["c"]), labels(&["d"])];
        grid.normalize();
        assert_eq!(grid.pins.left, vec![labels(&["a"]), vec![], vec![]]);
        assert_eq!(grid.pins.right.len(), 3);
        assert_eq!(grid.pins.top, vec![labels(&["b"]), labels(&["c"])]);
        assert_eq!(grid.pins.bottom.len(), 2);
    }

    #[test]
    fn flip_swaps_sides_and_images() {
        let mut grid = PinGrid::default();
        grid.pins.left = vec![labels(&["L"])];
        grid.pins.right = vec![labels(&["R"])];
        grid.pins.top = vec![labels(&["1"]), labels(&["2"]), labels(&["3"])];
        grid.offsets.left = 1.0;
        grid.image.front.src = "front.png".to_string();

        let flipped = grid.flipped();
        assert_eq!(flipped.pins.left, vec![labels(&["R"])]);
        assert_eq!(flipped.pins.right, vec![labels(&["L"])]);
        assert_eq!(flipped.pins.top, vec![labels(&["3"]), labels(&["2"]), labels(&["1"])]);
        assert_eq!((flipped.offsets.left, flipped.offsets.right), (0.0, 1.0));
        assert_eq!(flipped.image.back.src, "front.png");
        assert!(!flipped.image.front.has_source());

        assert_eq!(flipped.flipped(), grid);
    }

    #[test]
    fn pin_positions() {
        let mut grid = PinGrid {
            width: 4,
            height: 3,
            ..PinGrid::default()
        };
        grid.offsets = Offsets { left: 1.0, top: 0.5, right: 1.0, bottom: 0.0 };
        assert_eq!(grid.pin_position(Side::Left, 2), dvec2(254.0, 508.0));
        assert_eq!(grid.pin_position(Side::Right, 0), dvec2(508.0, 0.0));
        assert_eq!(grid.pin_position(Side::Top, 1), dvec2(254.0, 127.0));
        assert_eq!(grid.pin_position(Side::Bottom, 3), dvec2(762.0, 508.0));
    }

    #[test]
    fn type_resolution_falls_back_to_default() {
        let mut grid = PinGrid::default();
        assert_eq!(grid.resolve_type("gpio").map(|(n, _)| n), Some("gpio"));
        assert_eq!(grid.resolve_type("pwm").map(|(n, _)| n), Some("default"));
        grid.types.shift_remove("default");
        assert_eq!(grid.resolve_type("pwm"), None);
    }

    #[test]
    fn validation() {
        assert!(PinGrid::default().validate().is_ok());
        let empty = PinGrid { width: 0, ..PinGrid::default() };
        assert_eq!(empty.validate(), Err(LayoutError::InvalidGrid { width: 0, height: 5 }));
        let huge = PinGrid { width: 4_000_000_000, ..PinGrid::default() };
        assert_eq!(
            huge.validate(),
            Err(LayoutError::InvalidGrid { width: 4_000_000_000, height: 5 })
        );
        let largest = PinGrid { height: MAX_GRID_SIZE, ..PinGrid::default() };
        assert!(largest.validate().is_ok());
        let mut nan = PinGrid::default();
        nan.offsets.top = f64::NAN;
        assert!(matches!(nan.validate(), Err(LayoutError::InvalidNumber { what: "row offset", .. })));
    }
}
