//! Pin-header diagrams rendered as SVG.
//!
//! A [`PinGrid`] describes a board: its size in pins, the labels on each
//! side and the pin types they use. [`Assembler`] lays it out as a small
//! scene graph (see [`scene`]) whose boxes account for padding and quarter
//! turns, and the root viewport is fitted to the content.
//!
//! ```
//! let mut grid = pinout::PinGrid::default();
//! grid.pins.left = vec![vec!["5V:power".to_string()]];
//! let svg = pinout::pinout(&grid).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod errors;
pub mod layout;
pub mod log;
pub mod scene;
pub mod types;

pub use errors::{ConfigError, LayoutError};
pub use layout::{Assembler, PinGrid, Side};
pub use scene::{Document, Drawable, Node, Root, XmlDocument, render_to_string};
pub use types::{BBox, Padding, Rotation};

/// Render a pin grid to a standalone SVG document.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn pinout(grid: &PinGrid) -> Result<String, miette::Report> {
    let root = Assembler::new(grid.clone())?.build()?;
    Ok(render_to_string(&root))
}

/// Render the back face of a pin grid
pub fn pinout_flipped(grid: &PinGrid) -> Result<String, miette::Report> {
    let mut assembler = Assembler::new(grid.clone())?;
    let root = assembler.flip().build()?;
    Ok(render_to_string(&root))
}

/// Parse a JSON configuration and render it.
pub fn pinout_json(source: &str) -> Result<String, miette::Report> {
    let grid = PinGrid::from_json(source)?;
    pinout(&grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn default_grid_renders_an_empty_board() {
        let svg = pinout(&PinGrid::default()).unwrap();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r##"fill="#f0f0f0""##));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn errors_carry_diagnostic_codes() {
        let err = pinout_json(r#"{"width": 0}"#).unwrap_err();
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("pinout::layout::invalid_grid"));

        let err = pinout_json(r#"{"width": 4000000000}"#).unwrap_err();
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("pinout::layout::invalid_grid"));

        let err = pinout_json("[1, 2").unwrap_err();
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("pinout::config::json"));
    }

    #[test]
    fn flipped_output_moves_labels_to_the_other_side() {
        let mut grid = PinGrid { width: 2, height: 2, ..PinGrid::default() };
        grid.pins.left = vec![vec!["TX:uart".to_string()]];
        let front = pinout(&grid).unwrap();
        let back = pinout_flipped(&grid).unwrap();
        assert_ne!(front, back);
        assert!(back.contains(">TX</text>"));
    }
}
