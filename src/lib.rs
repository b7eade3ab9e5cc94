//! Internal library crate behind the `perch` binary.
//!
//! Everything here exists so the binary and the integration tests can
//! share one module tree; none of it is a stable external API.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
