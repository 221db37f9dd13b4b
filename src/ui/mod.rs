//! Terminal user interface module
//!
//! This module contains the live status line renderer.

pub mod spinner;

// Re-export main types
pub use spinner::Spinner;
