//! Schema migrations
//!
//! The schema ships inside the binary and is applied on every startup; steps
//! already recorded in `schema_version` are skipped after their checksum is
//! verified.

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
