//! Background tasks module
//!
//! This module contains the event loop that drives the process.

pub mod keep_awake;

// Re-export main types
pub use keep_awake::{keep_awake_loop, LoopOutcome};
