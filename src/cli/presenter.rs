//! CLI presenter for output formatting

use std::sync::Mutex;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI status formatting.
///
/// Status and errors go to stderr; stdout is reserved for the transcript.
/// The spinner lives behind a mutex so pipeline stage callbacks can share
/// one presenter across threads.
pub struct Presenter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    /// Start a spinner with message
    pub fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(spinner);
        }
    }

    /// Stop the spinner; a no-op when none is running
    pub fn stop_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(spinner) = guard.take() {
                spinner.finish_and_clear();
            }
        }
    }

    /// Whether a spinner is currently running
    pub fn spinner_active(&self) -> bool {
        self.spinner
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_starts_and_stops() {
        let presenter = Presenter::new();
        assert!(!presenter.spinner_active());

        presenter.start_spinner("Transcribing...");
        assert!(presenter.spinner_active());

        presenter.stop_spinner();
        assert!(!presenter.spinner_active());
    }

    #[test]
    fn stop_without_start_is_a_noop() {
        let presenter = Presenter::new();
        presenter.stop_spinner();
        assert!(!presenter.spinner_active());
    }

    #[test]
    fn spinner_can_be_restarted() {
        let presenter = Presenter::new();
        presenter.start_spinner("Converting to mp3...");
        presenter.stop_spinner();
        presenter.start_spinner("Transcribing...");
        assert!(presenter.spinner_active());
        presenter.stop_spinner();
    }

    #[test]
    fn presenter_is_shareable_across_stage_callbacks() {
        use std::sync::Arc;

        let presenter = Arc::new(Presenter::new());
        let cb: Box<dyn Fn() + Send + Sync> = {
            let presenter = Arc::clone(&presenter);
            Box::new(move || presenter.start_spinner("Transcribing..."))
        };
        cb();
        assert!(presenter.spinner_active());
        presenter.stop_spinner();
    }
}
