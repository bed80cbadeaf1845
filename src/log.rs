//! Logging facade for layout diagnostics.
//!
//! Recoverable layout conditions (truncated pin rows, unknown pin types,
//! snapped rotations) are reported through `warn!`; geometry tracing goes
//! through `debug!`. With the `tracing` feature these are the `tracing`
//! macros, without it they expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __pinout_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __pinout_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__pinout_debug as debug, __pinout_warn as warn};
