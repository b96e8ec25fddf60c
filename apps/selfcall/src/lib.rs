//! # Selfcall Library
//!
//! This library exposes the Selfcall command functions for testing and
//! integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export selfcall_core for convenience
pub use selfcall_core;
