//! Signal handling for shutdown

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::debug;

/// Complete on the first SIGINT or SIGTERM. Further signals before exit are
/// ignored; the first one already decides termination.
pub async fn shutdown_signal() {
    let mut signals = Signals::new([
        signal_hook::consts::SIGINT,
        signal_hook::consts::SIGTERM,
    ])
    .expect("Failed to create signal handler");

    if let Some(signal) = signals.next().await {
        debug!("Received signal: {}", signal);
    }
}
