//! Single-line terminal spinner

use std::io::{self, Write};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Live status line: a spinning glyph followed by a text suffix, repainted in
/// place on one terminal line by a background task
pub struct Spinner {
    text_tx: watch::Sender<String>,
    render_task: JoinHandle<()>,
}

impl Spinner {
    /// Start rendering with the given initial text
    pub fn start(initial_text: impl Into<String>) -> Self {
        let (text_tx, text_rx) = watch::channel(initial_text.into());
        let render_task = tokio::spawn(render_loop(text_rx));
        Self { text_tx, render_task }
    }

    /// Replace the text shown next to the spinner glyph
    pub fn update_text(&self, text: impl Into<String>) {
        // The receiver lives in the render task, which outlives self.
        let _ = self.text_tx.send(text.into());
    }

    /// Stop rendering and clear the status line. Waits for the render task
    /// to wind down so no frame lands after the line is cleared.
    pub async fn stop(self) {
        self.render_task.abort();
        let _ = self.render_task.await;
        print!("\r\x1b[2K");
        let _ = io::stdout().flush();
    }
}

async fn render_loop(text_rx: watch::Receiver<String>) {
    let mut interval = tokio::time::interval(FRAME_INTERVAL);
    let mut frame = 0usize;
    loop {
        interval.tick().await;
        let text = text_rx.borrow().clone();
        print!("\r\x1b[2K{} {}", FRAMES[frame], text);
        let _ = io::stdout().flush();
        frame = (frame + 1) % FRAMES.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_stop_waits_for_render_task() {
        let spinner = Spinner::start("working");
        spinner.update_text("still working");
        tokio::time::sleep(Duration::from_millis(250)).await;
        // Must settle the render task before clearing the line, even while a
        // worker thread may be mid-repaint.
        spinner.stop().await;
    }
}
