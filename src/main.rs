//! Caffeine - keep your system awake from the terminal
//!
//! This is the main entry point for the caffeine application.

use tracing::info;

use caffeine::{
    config::{format_duration, Config},
    platform::Platform,
    state::Session,
    tasks::{keep_awake_loop, LoopOutcome},
    ui::Spinner,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `caffeine version` prints one line and exits before any timer or
    // signal setup.
    if std::env::args().nth(1).as_deref() == Some("version") {
        println!("caffeine version {} ✨", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::parse();

    // Diagnostics go to stderr; the spinner owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(format!("caffeine={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let platform = Platform::detect();
    info!("Platform resolved: {:?}", platform);

    let session = Session::new(config.duration);

    println!("Starting caffeine ☕ (Press Ctrl+C to exit)");
    match session.duration() {
        Some(duration) => println!("System will stay awake for {} ⏰", format_duration(duration)),
        None => println!("System will stay awake indefinitely 🔋"),
    }

    let spinner = Spinner::start("Keeping system awake...");
    let outcome = keep_awake_loop(session, || platform.keep_awake(), &spinner).await;
    spinner.stop().await;

    match outcome {
        LoopOutcome::Interrupted => println!("👋 Exiting caffeine..."),
        LoopOutcome::DeadlineExpired => println!("⌛ Duration expired, exiting caffeine..."),
    }

    Ok(())
}
