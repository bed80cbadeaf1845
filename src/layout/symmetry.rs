//! Front/back panel reconciliation
//!
//! Artwork with negative margins extends past the nominal panel. The panel
//! frame is grown by the same amount on both builds, so the front view and
//! the flipped view of a board have identical outlines.

use super::config::ImageSpec;
use crate::types::Padding;

/// Extra room one edge needs: `0` when neither face extends past the
/// nominal panel, otherwise the gap between the two margins.
pub fn diff(front: f64, back: f64) -> f64 {
    if front >= 0.0 && back >= 0.0 {
        0.0
    } else {
        (front - back).abs()
    }
}

/// Panel padding covering both faces' artwork.
///
/// Symmetric in its arguments, so the flipped board reconciles to the same
/// padding. Non-finite margins contribute nothing.
pub fn reconcile(front: &ImageSpec, back: &ImageSpec) -> Padding {
    let edge = |f: f64, b: f64| {
        let d = diff(f, b);
        if d.is_finite() { d } else { 0.0 }
    };
    Padding {
        top: edge(front.top, back.top),
        right: edge(front.right, back.right),
        bottom: edge(front.bottom, back.bottom),
        left: edge(front.left, back.left),
    }
}
