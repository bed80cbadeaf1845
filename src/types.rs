//! Geometric value types shared by the scene graph and the layout.
//!
//! Coordinates are plain `f64` user units (the layout uses hundredths of a
//! millimetre); points and offsets are `glam::DVec2`.

use std::fmt;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Check that a value is finite
#[inline]
pub fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Check that a value is finite and not negative
#[inline]
pub fn non_negative(val: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Axis-aligned bounding box, `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub const ZERO: BBox = BBox { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        BBox { x, y, width, height }
    }

    /// Box spanning two opposite corners
    pub fn from_corners(min: DVec2, max: DVec2) -> Self {
        BBox { x: min.x, y: min.y, width: max.x - min.x, height: max.y - min.y }
    }

    /// Smallest box enclosing all points, `None` for an empty iterator
    pub fn enclosing(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(BBox::from_corners(min, max))
    }

    /// Union of all boxes; `None` entries contribute nothing.
    pub fn union_all(boxes: impl IntoIterator<Item = Option<BBox>>) -> Option<BBox> {
        boxes
            .into_iter()
            .flatten()
            .reduce(|acc, b| acc.union(&b))
    }

    pub fn union(&self, other: &BBox) -> BBox {
        BBox::from_corners(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Overlap of two boxes, `None` when they do not overlap
    pub fn intersection(&self, other: &BBox) -> Option<BBox> {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        if min.x > max.x || min.y > max.y {
            None
        } else {
            Some(BBox::from_corners(min, max))
        }
    }

    /// Top-left corner
    pub fn min(&self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    /// Bottom-right corner
    pub fn max(&self) -> DVec2 {
        dvec2(self.right(), self.bottom())
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> DVec2 {
        dvec2(self.width, self.height)
    }

    /// Corners in drawing order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [DVec2; 4] {
        [
            dvec2(self.x, self.y),
            dvec2(self.right(), self.y),
            dvec2(self.right(), self.bottom()),
            dvec2(self.x, self.bottom()),
        ]
    }

    /// Grow outwards by padding on each side
    pub fn pad(&self, padding: &Padding) -> BBox {
        BBox {
            x: self.x - padding.left,
            y: self.y - padding.top,
            width: self.width + padding.left + padding.right,
            height: self.height + padding.top + padding.bottom,
        }
    }

    /// Shrink inwards by signed margins; negative margins grow the box.
    pub fn inset(&self, top: f64, right: f64, bottom: f64, left: f64) -> BBox {
        BBox {
            x: self.x + left,
            y: self.y + top,
            width: self.width - left - right,
            height: self.height - top - bottom,
        }
    }

    pub fn translate(&self, offset: DVec2) -> BBox {
        BBox { x: self.x + offset.x, y: self.y + offset.y, ..*self }
    }
}

impl fmt::Display for BBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x, self.y, self.width, self.height)
    }
}

/// Per-side padding, every side non-negative
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const ZERO: Padding = Padding { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Create a padding with validation (rejects NaN, infinite and negative sides)
    pub fn try_new(top: f64, right: f64, bottom: f64, left: f64) -> Result<Self, NumericError> {
        Ok(Padding {
            top: non_negative(top)?,
            right: non_negative(right)?,
            bottom: non_negative(bottom)?,
            left: non_negative(left)?,
        })
    }

    /// Same padding on all four sides
    pub fn uniform(value: f64) -> Result<Self, NumericError> {
        Padding::try_new(value, value, value, value)
    }

    pub fn is_zero(&self) -> bool {
        *self == Padding::ZERO
    }
}

/// Rotation restricted to quarter turns, clockwise in SVG's y-down space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Snap an angle to the nearest quarter turn and normalize it into `[0, 360)`.
    ///
    /// Non-finite angles map to no rotation.
    pub fn from_degrees(angle: f64) -> Self {
        if !angle.is_finite() {
            return Rotation::Deg0;
        }
        let quarters = (angle / 90.0).round() as i64;
        match quarters.rem_euclid(4) {
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            3 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> f64 {
        match self {
            Rotation::Deg0 => 0.0,
            Rotation::Deg90 => 90.0,
            Rotation::Deg180 => 180.0,
            Rotation::Deg270 => 270.0,
        }
    }

    pub fn is_identity(self) -> bool {
        self == Rotation::Deg0
    }

    /// Rotate an offset relative to the rotation center, without trigonometry
    pub fn apply(self, rel: DVec2) -> DVec2 {
        match self {
            Rotation::Deg0 => rel,
            Rotation::Deg90 => dvec2(-rel.y, rel.x),
            Rotation::Deg180 => dvec2(-rel.x, -rel.y),
            Rotation::Deg270 => dvec2(rel.y, -rel.x),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}
