//! Building blocks of a pinout diagram
//!
//! Each function returns a node positioned in its own local space; the
//! assembler moves them into place afterwards.

use indexmap::IndexMap;

use super::config::{FontFace, LabelSpec, PinGrid, PinType};
use super::defaults::*;
use super::symmetry::reconcile;
use crate::scene::{Circle, Drawable, Element, Group, Image, NodeBuilder, Rect, Text};
use crate::types::BBox;

/// Gold marker for one pin hole
pub fn pin_marker(position: glam::DVec2) -> Circle {
    Circle::new(position.x, position.y, PIN_SIZE, PIN_COLOR)
}

/// Rounded badge with the label text, colored by its pin type.
///
/// The badge's local box starts at the origin.
pub fn pin_label(text: &str, ty: &PinType, font_family: &str) -> Group {
    let text = Text::new(LABEL_PADDING, LABEL_PADDING, text)
        .with_attr("font-family", font_family)
        .with_attr("font-size", FONT_SIZE)
        .with_attr("fill", ty.fgcolor.as_str());
    let text_box = text.bbox();
    let background = Rect::new(
        0.0,
        0.0,
        text_box.width + LABEL_PADDING * 2.0,
        text_box.height + LABEL_PADDING * 2.0,
    )
    .with_attr("fill", ty.bgcolor.as_str())
    .with_attr("rx", LABEL_RADIUS)
    .with_attr("ry", LABEL_RADIUS);

    Group::new().with_child(background).with_child(text)
}

/// Panel outline spanned by the pins plus a fixed margin
pub fn nominal_panel(grid: &PinGrid) -> BBox {
    BBox::new(
        -PANEL_MARGIN,
        -PANEL_MARGIN,
        (f64::from(grid.width) - 1.0) * PIN_SPACE + PANEL_MARGIN * 2.0,
        (f64::from(grid.height) - 1.0) * PIN_SPACE + PANEL_MARGIN * 2.0,
    )
}

/// Id of the `clipPath` that crops panel artwork to the frame
pub const PANEL_CLIP_ID: &str = "panel-frame";

/// Board background, with the front artwork when there is one.
///
/// The frame is the nominal panel grown to cover both faces' artwork, so the
/// board keeps its outline when flipped. Artwork is drawn at its margin
/// rectangle and cropped to the frame, never rescaled.
pub fn panel(grid: &PinGrid) -> Group {
    let nominal = nominal_panel(grid);
    let frame = nominal.pad(&reconcile(&grid.image.front, &grid.image.back));
    let front = &grid.image.front;

    let fill = if front.has_source() { "none" } else { PANEL_COLOR };
    let mut group = Group::new().with_child(Rect::from_bbox(frame).with_attr("fill", fill));

    if front.has_source() {
        let artwork = nominal.inset(front.top, front.right, front.bottom, front.left);
        if artwork.width > 0.0 && artwork.height > 0.0 {
            let clip = Element::new("clipPath")
                .with_attr("id", PANEL_CLIP_ID)
                .with_child(Rect::from_bbox(frame));
            group.append(Element::new("defs").with_child(clip));
            group.append(
                Image::new(artwork, &front.src)
                    .with_attr("preserveAspectRatio", "none")
                    .clipped(frame, PANEL_CLIP_ID),
            );
        } else {
            crate::log::warn!(src = %front.src, "image margins leave no area, skipping image");
        }
    }
    group
}

/// Bold, left-aligned diagram title
pub fn title(text: &str, font_family: &str) -> Group {
    let text = Text::new(0.0, 0.0, text)
        .with_attr("font-family", font_family)
        .with_attr("font-size", TITLE_FONT_SIZE)
        .with_attr("font-weight", "bold")
        .with_attr("fill", TITLE_COLOR);
    Group::new().with_child(text)
}

/// Color swatch followed by the type's display label
pub fn legend_item(label: &str, color: &str, font_family: &str) -> Group {
    let swatch = Rect::new(0.0, 0.0, SWATCH_SIZE, SWATCH_SIZE).with_attr("fill", color);
    let text = Text::new(SWATCH_SIZE + PADDING / 2.0, (SWATCH_SIZE - FONT_SIZE) / 2.0, label)
        .with_attr("font-family", font_family)
        .with_attr("font-size", FONT_SIZE)
        .with_attr("fill", LEGEND_TEXT_COLOR);
    Group::new().with_child(swatch).with_child(text)
}

/// Pin types referenced by any label, resolved and sorted by display label
pub fn used_types(grid: &PinGrid) -> Vec<(&str, &PinType)> {
    let mut used: IndexMap<&str, &PinType> = IndexMap::new();
    for raw in grid.pins.labels() {
        let spec = LabelSpec::parse(raw);
        match grid.resolve_type(spec.kind) {
            Some((name, ty)) => {
                used.entry(name).or_insert(ty);
            }
            None => {
                crate::log::warn!(kind = spec.kind, "unknown pin type and no default type, leaving it out of the legend");
            }
        }
    }
    let mut used: Vec<_> = used.into_iter().collect();
    used.sort_by(|(a_name, a), (b_name, b)| a.label.cmp(&b.label).then_with(|| a_name.cmp(b_name)));
    used
}

/// Stacked legend entries on a rounded background.
///
/// Empty when no label references a known type; an empty legend has no box.
pub fn legend(grid: &PinGrid, font_family: &str) -> Group {
    let mut group = Group::new();
    let mut y = PADDING;
    for (_, ty) in used_types(grid) {
        let mut item = legend_item(&ty.label, &ty.bgcolor, font_family);
        item.set_translate(PADDING, y);
        y += item.bounding_box().map_or(FONT_SIZE, |b| b.height) + PADDING;
        group.append(item);
    }

    if let Some(items) = group.bounding_box() {
        let background = Rect::new(
            items.x - PADDING,
            items.y - PADDING,
            items.width + PADDING * 2.0,
            items.height + PADDING * 2.0,
        )
        .with_attr("fill", LEGEND_BACKGROUND)
        .with_attr("stroke", LEGEND_BORDER)
        .with_attr("stroke-width", LEGEND_STROKE_WIDTH)
        .with_attr("rx", LEGEND_RADIUS)
        .with_attr("ry", LEGEND_RADIUS);
        group.prepend(background);
    }
    group
}

/// `<defs>` carrying the `@font-face` rule for an embedded font
pub fn font_defs(font: &FontFace) -> Element {
    let mut rule = format!("@font-face{{font-family:'{}';src:url('{}');", font.family, font.src);
    if let Some(weight) = &font.weight {
        rule.push_str(&format!("font-weight:{};", weight));
    }
    if let Some(style) = &font.style {
        rule.push_str(&format!("font-style:{};", style));
    }
    rule.push('}');

    let style = Element::new("style").with_attr("type", "text/css").with_text(rule);
    Element::new("defs").with_child(style)
}
