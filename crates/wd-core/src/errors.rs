//! Error types for the workday calendar crates.
//!
//! A single `thiserror`-derived enum covers every failure the calendar can
//! report.  Preconditions are checked with the [`ensure!`](crate::ensure)
//! macro and unconditional failures raised with [`fail!`](crate::fail).

use thiserror::Error;

/// The top-level error type used throughout the workday crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument supplied at the configuration boundary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Whole-day stepping skipped more consecutive days than the calendar
    /// allows without reaching a working day.
    #[error("no working day within {skipped} consecutive days from {start}")]
    Unsatisfiable {
        /// Date the stepping started from.
        start: String,
        /// Number of consecutive non-working days skipped before giving up.
        skipped: u32,
    },
}

/// Shorthand `Result` type used throughout the workday crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn finite(x: f32) -> wd_core::errors::Result<f32> {
///     ensure!(x.is_finite(), "x must be finite, got {x}");
///     Ok(x)
/// }
/// assert!(finite(1.0).is_ok());
/// assert!(finite(f32::NAN).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use wd_core::{fail, errors::Error};
/// fn always_err() -> wd_core::errors::Result<()> {
///     fail!("stop hour {} precedes start hour {}", 7, 9);
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::InvalidArgument("stop hour 7 precedes start hour 9".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
