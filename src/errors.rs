//! Error types with diagnostics using miette
//!
//! Layout failures are fatal for the placement or build that raised them.
//! Everything the layout can recover from is logged instead (see `crate::log`).

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Layout Errors
// ============================================================================

/// Errors raised while assembling or positioning nodes
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid argument `{argument}`: {reason}")]
    #[diagnostic(code(pinout::layout::invalid_argument))]
    InvalidArgument {
        argument: String,
        reason: String,
        #[help]
        help: Option<String>,
    },

    #[error("invalid grid size {width}x{height}")]
    #[diagnostic(
        code(pinout::layout::invalid_grid),
        help("a pin grid needs between 1 and 10000 pins in each direction")
    )]
    InvalidGrid { width: u32, height: u32 },

    #[error("invalid {what}: {source}")]
    #[diagnostic(code(pinout::layout::invalid_number))]
    InvalidNumber {
        what: &'static str,
        #[source]
        source: NumericError,
    },
}

impl LayoutError {
    /// Unknown alignment name, as accepted by `Alignment::from_name`
    pub(crate) fn unknown_alignment(name: &str) -> Self {
        LayoutError::InvalidArgument {
            argument: name.to_string(),
            reason: "unknown alignment".to_string(),
            help: Some("expected one of `leftof`, `rightof`, `above`, `under`".to_string()),
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors from reading a pin grid configuration
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("malformed pin grid configuration: {source}")]
    #[diagnostic(
        code(pinout::config::json),
        help("the configuration must be a JSON object; omitted keys take their defaults")
    )]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        ConfigError::Json { source }
    }
}
