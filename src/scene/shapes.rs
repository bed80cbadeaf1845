//! Leaf primitives
//!
//! Each primitive reads its box from its own geometric attributes, so a
//! `set_attr("x", ..)` after construction moves the box with it. The one
//! exception is `Image`, whose box is fixed by its frame and clip.

use super::element::Element;
use super::{Drawable, NodeBuilder};
use crate::types::BBox;

/// Fraction of the stroke width a stroked rect grows by on each side.
///
/// SVG strokes are centered on the outline, so half of the stroke lies
/// outside the geometric rect.
pub const STROKE_EXPANSION: f64 = 0.5;

/// Estimated glyph advance as a fraction of the font size.
pub const TEXT_WIDTH_FACTOR: f64 = 0.6;

/// Font size assumed when a text node has no `font-size`
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Default `font-family` for text nodes
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// SVG stroke width when `stroke` is set without `stroke-width`
const DEFAULT_STROKE_WIDTH: f64 = 1.0;

// ============================================================================
// Circle
// ============================================================================

/// A filled circle (`<circle>`)
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    element: Element,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64, fill: &str) -> Self {
        let mut element = Element::new("circle");
        element.set("cx", cx);
        element.set("cy", cy);
        element.set("r", r);
        element.set("fill", fill);
        Self { element }
    }
}

impl Drawable for Circle {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn bounding_box(&self) -> Option<BBox> {
        let cx = self.element.number_or_zero("cx");
        let cy = self.element.number_or_zero("cy");
        let r = self.element.number_or_zero("r");
        Some(BBox::new(cx - r, cy - r, r * 2.0, r * 2.0))
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle (`<rect>`)
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    element: Element,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut element = Element::new("rect");
        element.set("x", x);
        element.set("y", y);
        element.set("width", width);
        element.set("height", height);
        Self { element }
    }

    /// A rect covering exactly the given box
    pub fn from_bbox(bbox: BBox) -> Self {
        Rect::new(bbox.x, bbox.y, bbox.width, bbox.height)
    }

    /// Width of the visible stroke, zero when unstroked
    fn stroke_width(&self) -> f64 {
        let stroked = self
            .element
            .attr("stroke")
            .and_then(|s| s.to_attr_string())
            .is_some_and(|s| !s.is_empty() && s != "none");
        if !stroked {
            return 0.0;
        }
        self.element
            .number("stroke-width")
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(DEFAULT_STROKE_WIDTH)
    }
}

impl Drawable for Rect {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn bounding_box(&self) -> Option<BBox> {
        let geometry = BBox::new(
            self.element.number_or_zero("x"),
            self.element.number_or_zero("y"),
            self.element.number_or_zero("width"),
            self.element.number_or_zero("height"),
        );
        let grow = self.stroke_width() * STROKE_EXPANSION;
        Some(geometry.inset(-grow, -grow, -grow, -grow))
    }
}

// ============================================================================
// Text
// ============================================================================

/// A single line of text (`<text>`), anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    element: Element,
    width_factor: f64,
}

impl Text {
    pub fn new(x: f64, y: f64, text: &str) -> Self {
        let mut element = Element::new("text");
        element.set("x", x);
        element.set("y", y);
        element.set("dominant-baseline", "text-before-edge");
        element.set("font-family", DEFAULT_FONT_FAMILY);
        element.set_text(text);
        Self {
            element,
            width_factor: TEXT_WIDTH_FACTOR,
        }
    }

    /// Override the glyph advance estimate for this node
    pub fn with_width_factor(mut self, factor: f64) -> Self {
        self.width_factor = factor;
        self
    }

    pub fn font_size(&self) -> f64 {
        self.element
            .number("font-size")
            .filter(|s| s.is_finite() && *s >= 0.0)
            .unwrap_or(DEFAULT_FONT_SIZE)
    }

    pub fn content(&self) -> &str {
        self.element.text().unwrap_or_default()
    }

    /// Estimated box: no glyph metrics are consulted.
    pub fn bbox(&self) -> BBox {
        let font_size = self.font_size();
        let chars = self.content().chars().count() as f64;
        BBox::new(
            self.element.number_or_zero("x"),
            self.element.number_or_zero("y"),
            chars * font_size * self.width_factor,
            font_size,
        )
    }
}

impl Drawable for Text {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn bounding_box(&self) -> Option<BBox> {
        Some(self.bbox())
    }
}

// ============================================================================
// Image
// ============================================================================

/// An embedded raster image (`<image>`); the asset itself is never measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    element: Element,
    frame: BBox,
    clip: Option<BBox>,
}

impl Image {
    pub fn new(frame: BBox, href: &str) -> Self {
        let element = Element::new("image")
            .with_attr("x", frame.x)
            .with_attr("y", frame.y)
            .with_attr("width", frame.width)
            .with_attr("height", frame.height)
            .with_attr("href", href)
            .with_attr("xlink:href", href);
        Self {
            element,
            frame,
            clip: None,
        }
    }

    /// Crop to `clip` through the `clipPath` with the given id, which the
    /// caller defines. The image keeps its size and the box shrinks to the
    /// visible part.
    pub fn clipped(mut self, clip: BBox, clip_path_id: &str) -> Self {
        self.element.set("clip-path", format!("url(#{clip_path_id})"));
        self.clip = Some(clip);
        self
    }
}

impl Drawable for Image {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn bounding_box(&self) -> Option<BBox> {
        match self.clip {
            Some(clip) => self.frame.intersection(&clip),
            None => Some(self.frame),
        }
    }
}
