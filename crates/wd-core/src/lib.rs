//! # wd-core
//!
//! Error definitions shared by the workday calendar crates.
//!
//! The calendar arithmetic itself lives in `wd-time`; this crate only holds
//! the error hierarchy and the `ensure!` / `fail!` helper macros so that
//! every crate in the workspace reports failures the same way.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
