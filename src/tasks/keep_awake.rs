//! Keep-awake event loop
//!
//! One cooperative loop multiplexing the refresh timer, the display timer,
//! the optional deadline and the interrupt signal. No busy-waiting: the loop
//! suspends until one of the four becomes ready.

use std::time::Duration;

use tokio::time::{interval_at, sleep_until, Instant};
use tracing::{debug, info};

use crate::{config::format_duration, state::Session, ui::Spinner, utils::shutdown_signal};

/// Period of the wake-lock refresh timer
pub const REFRESH_PERIOD: Duration = Duration::from_secs(30);
/// Period of the status display timer
pub const DISPLAY_PERIOD: Duration = Duration::from_secs(1);

/// Why the loop terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// Operator sent SIGINT or SIGTERM
    Interrupted,
    /// The bounded session's deadline elapsed
    DeadlineExpired,
}

/// Drive the process until an interrupt arrives or, in bounded mode, the
/// deadline elapses. Each refresh tick invokes the zero-argument keep-awake
/// action resolved at startup; each display tick recomputes the
/// remaining-time suffix. If several events are ready at once, any one of
/// them may be processed first.
pub async fn keep_awake_loop<F>(
    session: Session,
    mut keep_awake: F,
    spinner: &Spinner,
) -> LoopOutcome
where
    F: FnMut(),
{
    let start = Instant::now();
    let mut refresh = interval_at(start + REFRESH_PERIOD, REFRESH_PERIOD);
    let mut display = interval_at(start + DISPLAY_PERIOD, DISPLAY_PERIOD);

    // Armed only in bounded mode; the branch guard keeps it from ever being
    // polled otherwise.
    let deadline = sleep_until(session.deadline().unwrap_or(start));
    tokio::pin!(deadline);

    let interrupt = shutdown_signal();
    tokio::pin!(interrupt);

    match session.duration() {
        Some(duration) => info!("Keep-awake loop started, bounded to {}", format_duration(duration)),
        None => info!("Keep-awake loop started, running indefinitely"),
    }

    loop {
        tokio::select! {
            _ = &mut interrupt => {
                info!("Interrupt received, leaving keep-awake loop");
                return LoopOutcome::Interrupted;
            }
            _ = refresh.tick() => {
                debug!("Refreshing wake lock");
                keep_awake();
            }
            _ = display.tick(), if session.is_bounded() => {
                if let Some(remaining) = session.remaining_rounded() {
                    if remaining > Duration::ZERO {
                        spinner.update_text(format!(
                            "Keeping system awake... {} remaining",
                            format_duration(remaining)
                        ));
                    }
                }
            }
            _ = &mut deadline, if session.is_bounded() => {
                info!("Deadline elapsed, leaving keep-awake loop");
                return LoopOutcome::DeadlineExpired;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_bounded_session_expires_at_or_after_deadline() {
        let session = Session::new(Duration::from_secs(2));
        let spinner = Spinner::start("test");
        let started = Instant::now();

        let outcome = keep_awake_loop(session, || {}, &spinner).await;
        spinner.stop().await;

        assert_eq!(outcome, LoopOutcome::DeadlineExpired);
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_bounded_session_never_refreshes() {
        // 2s deadline fires before the first 30s refresh tick.
        let session = Session::new(Duration::from_secs(2));
        let refreshes = Cell::new(0u32);
        let spinner = Spinner::start("test");

        let outcome =
            keep_awake_loop(session, || refreshes.set(refreshes.get() + 1), &spinner).await;
        spinner.stop().await;

        assert_eq!(outcome, LoopOutcome::DeadlineExpired);
        assert_eq!(refreshes.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_dispatched_once_per_thirty_second_window() {
        // 95s run covers three full 30s windows; ticks land at 30, 60, 90.
        let session = Session::new(Duration::from_secs(95));
        let refreshes = Cell::new(0u32);
        let spinner = Spinner::start("test");

        let outcome =
            keep_awake_loop(session, || refreshes.set(refreshes.get() + 1), &spinner).await;
        spinner.stop().await;

        assert_eq!(outcome, LoopOutcome::DeadlineExpired);
        assert_eq!(refreshes.get(), 3);
    }

    #[test]
    fn test_indefinite_session_arms_no_deadline() {
        let session = Session::new(Duration::ZERO);
        assert!(session.deadline().is_none());
        assert!(!session.is_bounded());
    }
}
