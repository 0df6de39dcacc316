//! Spinner shown while a turn is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner on stderr that clears itself when dropped.
pub struct ThinkingSpinner {
    bar: ProgressBar,
}

impl ThinkingSpinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for ThinkingSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
