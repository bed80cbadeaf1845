//! Pinout layout
//!
//! Turns a [`PinGrid`] into a scene tree. Pins are placed on a fixed pitch,
//! labels are chained outwards from their pin with [`Group::align`], and
//! the panel, title and legend are arranged around the result.

pub mod components;
pub mod config;
pub mod defaults;
pub mod symmetry;

pub use config::{FontFace, ImageSpec, Images, LabelSpec, Offsets, PinGrid, PinType, Pins, Side, builtin_types};
pub use symmetry::{diff, reconcile};

use glam::dvec2;

use crate::errors::LayoutError;
use crate::scene::shapes::DEFAULT_FONT_FAMILY;
use crate::scene::{Drawable, Group, NodeBuilder, Root};
use crate::types::BBox;
use components::{font_defs, legend, panel, pin_label, pin_marker, title};
use defaults::PADDING;

/// Builds diagrams from a validated, normalized pin grid
#[derive(Debug, Clone, PartialEq)]
pub struct Assembler {
    config: PinGrid,
}

impl Assembler {
    /// Validate the configuration and fit every pin row to the grid size
    pub fn new(mut config: PinGrid) -> Result<Self, LayoutError> {
        config.validate()?;
        config.normalize();
        Ok(Self { config })
    }

    pub fn config(&self) -> &PinGrid {
        &self.config
    }

    /// Switch to the other face of the board; the next `build` is mirrored.
    pub fn flip(&mut self) -> &mut Self {
        self.config = self.config.flipped();
        self
    }

    fn font_family(&self) -> &str {
        self.config
            .font
            .as_ref()
            .map(|font| font.family.as_str())
            .filter(|family| !family.is_empty())
            .unwrap_or(DEFAULT_FONT_FAMILY)
    }

    /// Board panel for the current face
    pub fn panel(&self) -> Group {
        panel(&self.config)
    }

    /// Build the whole diagram with its viewport fitted to the content
    pub fn build(&self) -> Result<Root, LayoutError> {
        let font = self.font_family();

        let mut layout = Group::new();
        layout.append(self.panel());
        for side in Side::ALL {
            layout.append(self.pin_row(side)?);
        }
        let layout_box = layout.bounding_box().unwrap_or(BBox::ZERO);
        crate::log::debug!(%layout_box, "pin layout");

        let mut title = title(&self.config.title, font);
        let title_height = title.bounding_box().map_or(0.0, |b| b.height);
        title.place_at(dvec2(layout_box.x, layout_box.y - PADDING - title_height));

        let mut legend = legend(&self.config, font);
        legend.place_at(dvec2(layout_box.right() + PADDING * 3.0, layout_box.y));

        let mut content = Group::new();
        content.append(layout).append(title).append(legend);
        content.reframe();

        let mut root = Root::new();
        if let Some(face) = &self.config.font {
            root.append(font_defs(face));
        }
        root.append(content);
        // only read by the log when tracing is on
        let _viewport = root.fit();
        crate::log::debug!(viewport = %_viewport, "diagram fitted");
        Ok(root)
    }

    /// Markers and labels of every used pin on one side
    fn pin_row(&self, side: Side) -> Result<Group, LayoutError> {
        let font = self.font_family();
        let mut row = Group::new();

        for (index, labels) in self.config.pins.row(side).iter().enumerate() {
            if labels.is_empty() {
                continue;
            }
            let mut pin = Group::new();
            pin.append(pin_marker(self.config.pin_position(side, index)));

            for raw in labels {
                let spec = LabelSpec::parse(raw);
                let Some((_, ty)) = self.config.resolve_type(spec.kind) else {
                    crate::log::warn!(
                        label = raw.as_str(),
                        side = side.name(),
                        index,
                        "unknown pin type and no default type, skipping label"
                    );
                    continue;
                };
                // the first label keeps extra distance from the marker
                let first = pin.element().children().len() == 1;
                let gap = if first { PADDING * 3.0 } else { PADDING };

                let mut label = pin_label(spec.text, ty, font);
                if let Some(previous) = pin.element().children().last() {
                    label.align(side.alignment(gap), previous)?;
                }
                pin.append(label);
            }
            row.append(pin);
        }
        Ok(row)
    }
}
