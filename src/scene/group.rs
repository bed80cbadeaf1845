//! Transformable containers
//!
//! A `Group` carries an absolute translation, a quarter-turn rotation and
//! padding. Its box is recomputed from its children on every query:
//! children union, then padding, then rotation about the padded center,
//! then translation. The rendered `transform` attribute applies the same
//! two steps in the same order, so nested groups compose.

use glam::DVec2;

use super::align::{Alignment, align};
use super::document::{Document, ElementRef, XLINK_NS, SVG_NS, fmt_num};
use super::element::Element;
use super::{Drawable, NodeBuilder};
use crate::errors::LayoutError;
use crate::types::{BBox, Padding, Rotation};

/// Box of `content` after rotating about its own center and translating.
pub fn transformed_box(content: BBox, rotation: Rotation, translate: DVec2) -> BBox {
    if rotation.is_identity() && translate == DVec2::ZERO {
        return content;
    }
    let center = content.center();
    let corners = content
        .corners()
        .map(|corner| center + rotation.apply(corner - center) + translate);
    BBox::enclosing(corners).unwrap_or(content)
}

/// A `<g>` element with translation, rotation and padding
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    element: Element,
    translate: DVec2,
    rotation: Rotation,
    padding: Padding,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    pub fn new() -> Self {
        Self {
            element: Element::new("g"),
            translate: DVec2::ZERO,
            rotation: Rotation::Deg0,
            padding: Padding::ZERO,
        }
    }

    pub fn translation(&self) -> DVec2 {
        self.translate
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Set the absolute translation (not a delta)
    pub fn set_translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.translate = DVec2::new(tx, ty);
        self.element.remove("transform");
        self
    }

    /// Set the absolute rotation in degrees.
    ///
    /// Angles that are not a multiple of 90 are snapped to the nearest one.
    pub fn set_rotation(&mut self, degrees: f64) -> &mut Self {
        if degrees % 90.0 != 0.0 {
            crate::log::warn!(
                degrees,
                "group rotation must be a multiple of 90, snapping to the nearest quarter turn"
            );
        }
        self.set_quarter_turns(Rotation::from_degrees(degrees))
    }

    pub fn set_quarter_turns(&mut self, rotation: Rotation) -> &mut Self {
        self.rotation = rotation;
        self.element.remove("transform");
        self
    }

    pub fn set_padding(&mut self, padding: Padding) -> &mut Self {
        self.padding = padding;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Untransformed box: children union expanded by padding
    pub fn content_box(&self) -> Option<BBox> {
        self.element.children_box().map(|b| b.pad(&self.padding))
    }

    /// Position this group next to `reference`.
    pub fn align(&mut self, alignment: Alignment, reference: &impl Drawable) -> Result<(), LayoutError> {
        let placement = align(alignment, self.content_box(), reference.bounding_box())?;
        crate::log::debug!(
            alignment = alignment.name(),
            tx = placement.translate.x,
            ty = placement.translate.y,
            rotation = placement.rotation.degrees(),
            "aligned group"
        );
        self.set_translate(placement.translate.x, placement.translate.y);
        self.set_quarter_turns(placement.rotation);
        Ok(())
    }

    /// Translate so that the transformed box starts at `target`.
    ///
    /// Groups without a box are left untouched.
    pub fn place_at(&mut self, target: DVec2) -> &mut Self {
        if let Some(content) = self.content_box() {
            let origin = transformed_box(content, self.rotation, DVec2::ZERO).min();
            let t = target - origin;
            self.set_translate(t.x, t.y);
        }
        self
    }

    /// Move the group's box to the origin
    pub fn reframe(&mut self) -> &mut Self {
        self.place_at(DVec2::ZERO)
    }

    /// Value of the `transform` attribute, `None` for the identity transform
    pub fn transform_attr(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(2);
        if self.translate != DVec2::ZERO {
            parts.push(format!(
                "translate({},{})",
                fmt_num(self.translate.x),
                fmt_num(self.translate.y)
            ));
        }
        if !self.rotation.is_identity() {
            let angle = fmt_num(self.rotation.degrees());
            parts.push(match self.content_box() {
                Some(content) => {
                    let c = content.center();
                    format!("rotate({},{},{})", angle, fmt_num(c.x), fmt_num(c.y))
                }
                None => format!("rotate({})", angle),
            });
        }
        if parts.is_empty() { None } else { Some(parts.join(" ")) }
    }
}

impl Drawable for Group {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn bounding_box(&self) -> Option<BBox> {
        let content = self.content_box()?;
        Some(transformed_box(content, self.rotation, self.translate))
    }

    fn render(&self, doc: &mut dyn Document) -> ElementRef {
        let el = self.element.render_element(doc);
        if let Some(transform) = self.transform_attr() {
            doc.set_attribute(el, "transform", &transform);
        }
        el
    }
}

// ============================================================================
// Root
// ============================================================================

/// The `<svg>` root whose viewport tracks its content
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    element: Element,
}

impl Default for Root {
    fn default() -> Self {
        Self::new()
    }
}

impl Root {
    pub fn new() -> Self {
        let element = Element::new("svg")
            .with_attr("xmlns", SVG_NS)
            .with_attr("xmlns:xlink", XLINK_NS);
        Self { element }
    }

    /// Query the content box and rewrite `viewBox`, `width` and `height` to
    /// enclose it exactly. An empty root gets a zero viewport.
    pub fn fit(&mut self) -> BBox {
        let bbox = self.bounding_box().unwrap_or(BBox::ZERO);
        self.element.set(
            "viewBox",
            format!(
                "{} {} {} {}",
                fmt_num(bbox.x),
                fmt_num(bbox.y),
                fmt_num(bbox.width),
                fmt_num(bbox.height)
            ),
        );
        self.element.set("width", bbox.width);
        self.element.set("height", bbox.height);
        bbox
    }

    /// Parse the current `viewBox` attribute back into a box
    pub fn view_box(&self) -> Option<BBox> {
        let value = self.element.attr("viewBox")?.to_attr_string()?;
        let nums: Vec<f64> = value
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        match nums.as_slice() {
            [x, y, w, h] => Some(BBox::new(*x, *y, *w, *h)),
            _ => None,
        }
    }
}

impl Drawable for Root {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn bounding_box(&self) -> Option<BBox> {
        Some(self.element.children_box().unwrap_or(BBox::ZERO))
    }
}
