//! Relative placement of a group next to a reference node

use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::LayoutError;
use crate::types::{BBox, Rotation, non_negative};

/// Where to put a group relative to its reference, with the gap between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alignment {
    /// To the left, centers on the same horizontal line
    LeftOf { gap: f64 },
    /// To the right, centers on the same horizontal line
    RightOf { gap: f64 },
    /// Above, turned a quarter counter-clockwise, centers on the same vertical line
    Above { gap: f64 },
    /// Below, turned a quarter counter-clockwise, centers on the same vertical line
    Under { gap: f64 },
}

impl Alignment {
    /// Parse one of `leftof`, `rightof`, `above` or `under`.
    pub fn from_name(name: &str, gap: f64) -> Result<Self, LayoutError> {
        let alignment = match name {
            "leftof" => Alignment::LeftOf { gap },
            "rightof" => Alignment::RightOf { gap },
            "above" => Alignment::Above { gap },
            "under" => Alignment::Under { gap },
            other => return Err(LayoutError::unknown_alignment(other)),
        };
        alignment.checked_gap()?;
        Ok(alignment)
    }

    pub fn gap(&self) -> f64 {
        match *self {
            Alignment::LeftOf { gap }
            | Alignment::RightOf { gap }
            | Alignment::Above { gap }
            | Alignment::Under { gap } => gap,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Alignment::LeftOf { .. } => "leftof",
            Alignment::RightOf { .. } => "rightof",
            Alignment::Above { .. } => "above",
            Alignment::Under { .. } => "under",
        }
    }

    fn checked_gap(&self) -> Result<f64, LayoutError> {
        non_negative(self.gap()).map_err(|e| LayoutError::InvalidArgument {
            argument: "gap".to_string(),
            reason: e.to_string(),
            help: Some(format!("`{}` needs a finite, non-negative gap", self.name())),
        })
    }

    fn rotation(&self) -> Rotation {
        match self {
            Alignment::LeftOf { .. } | Alignment::RightOf { .. } => Rotation::Deg0,
            Alignment::Above { .. } | Alignment::Under { .. } => Rotation::from_degrees(-90.0),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.gap())
    }
}

/// Absolute transform that realizes an alignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub translate: DVec2,
    pub rotation: Rotation,
}

/// Compute the transform placing a group whose untransformed content box is
/// `local` next to `reference`. Missing boxes count as an empty box at the
/// origin.
pub fn align(alignment: Alignment, local: Option<BBox>, reference: Option<BBox>) -> Result<Placement, LayoutError> {
    let gap = alignment.checked_gap()?;
    let local = local.unwrap_or(BBox::ZERO);
    let reference = reference.unwrap_or(BBox::ZERO);
    let r = reference.center();

    // Quarter turns swap extents, so vertical placements use the width.
    let target = match alignment {
        Alignment::LeftOf { .. } => dvec2(reference.x - gap - local.width / 2.0, r.y),
        Alignment::RightOf { .. } => dvec2(reference.right() + gap + local.width / 2.0, r.y),
        Alignment::Above { .. } => dvec2(r.x, reference.y - gap - local.width / 2.0),
        Alignment::Under { .. } => dvec2(r.x, reference.bottom() + gap + local.width / 2.0),
    };

    Ok(Placement {
        translate: target - local.center(),
        rotation: alignment.rotation(),
    })
}
