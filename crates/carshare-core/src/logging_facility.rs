//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Log output goes to stderr; stdout belongs to the console menus.
//!
//! # Usage
//!
//! ```rust
//! use carshare_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};

/// Target for failures that may leave stored rows inconsistent
///
/// Enabled in every profile, unlike the per-operation events.
pub const INCONSISTENCY_TARGET: &str = "carshare_core::inconsistency";
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
