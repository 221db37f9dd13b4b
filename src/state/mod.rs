//! Session state module
//!
//! This module contains the immutable session values fixed at startup.

pub mod session;

// Re-export main types
pub use session::{Mode, Session};
