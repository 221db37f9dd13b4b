//! Caffeine - keep your system awake from the terminal
//!
//! This library periodically launches the platform's native keep-awake
//! command while rendering a live status line, until the operator interrupts
//! it or an optional deadline expires.

pub mod config;
pub mod platform;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use platform::Platform;
pub use state::Session;
pub use tasks::{keep_awake_loop, LoopOutcome};
pub use ui::Spinner;
pub use utils::signals::shutdown_signal;
