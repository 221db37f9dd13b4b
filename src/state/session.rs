//! Session configuration and clock

use std::time::Duration;

use tokio::time::Instant;

/// Run mode, fixed for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Run until interrupted
    Indefinite,
    /// Run until interrupted or until `duration` has elapsed since `start`
    Bounded { duration: Duration, start: Instant },
}

/// Immutable session value built once at startup and handed to the event loop
#[derive(Debug, Clone, Copy)]
pub struct Session {
    mode: Mode,
}

impl Session {
    /// Create a session from the requested duration. A zero duration means
    /// indefinite mode; anything positive captures the start time now.
    pub fn new(duration: Duration) -> Self {
        let mode = if duration.is_zero() {
            Mode::Indefinite
        } else {
            Mode::Bounded { duration, start: Instant::now() }
        };
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self.mode, Mode::Bounded { .. })
    }

    /// Requested duration, if this session is bounded
    pub fn duration(&self) -> Option<Duration> {
        match self.mode {
            Mode::Indefinite => None,
            Mode::Bounded { duration, .. } => Some(duration),
        }
    }

    /// Instant at which a bounded session expires
    pub fn deadline(&self) -> Option<Instant> {
        match self.mode {
            Mode::Indefinite => None,
            Mode::Bounded { duration, start } => Some(start + duration),
        }
    }

    /// Time left before the deadline, saturating at zero
    pub fn remaining(&self) -> Option<Duration> {
        match self.mode {
            Mode::Indefinite => None,
            Mode::Bounded { duration, start } => {
                Some(duration.saturating_sub(start.elapsed()))
            }
        }
    }

    /// Time left before the deadline, rounded to the nearest whole second
    pub fn remaining_rounded(&self) -> Option<Duration> {
        self.remaining()
            .map(|remaining| Duration::from_secs(remaining.as_secs_f64().round() as u64))
    }
}
