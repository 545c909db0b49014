use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::sync::{Mutex, PoisonError};

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes everything to stderr so it doesn't interfere with the rendered
/// alert list on stdout. Uses indicatif for the upstream pull progress bar
/// and owo-colors for warnings and errors when stderr is a terminal.
pub struct StderrProgressReporter {
    progress_bar: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
            quiet: false,
        }
    }

    /// Reporter that only prints warnings and errors
    pub fn quiet() -> Self {
        Self {
            progress_bar: Mutex::new(None),
            quiet: true,
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self
            .progress_bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            pb.set_style(style.progress_chars("=>-"));
        }
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        let mut pb_option = self
            .progress_bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(pb) = pb_option.take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        // the bar would overwrite the warning line
        if let Some(pb) = self
            .progress_bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            pb.suspend(|| {
                eprintln!(
                    "{}",
                    message.if_supports_color(Stream::Stderr, |m| m.yellow())
                )
            });
            return;
        }
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |m| m.yellow())
        );
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.red()));
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        if !self.quiet {
            eprintln!();
            eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.green()));
        }
    }
}
