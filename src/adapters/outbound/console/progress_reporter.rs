use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "   {spinner:.green} [{pos} file(s)] {msg}";

/// ConsoleProgressReporter adapter for reporting scan progress
///
/// Messages go to stdout so that operators see every warning in the same
/// stream as the summary, unless the report itself is written to stdout.
/// Per-source progress is an indicatif spinner that is suspended while a
/// message is printed and cleared on completion.
pub struct ConsoleProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
    use_stderr: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            use_stderr: false,
        }
    }

    /// Reporter that keeps stdout free for the report
    pub fn on_stderr() -> Self {
        Self {
            use_stderr: true,
            ..Self::new()
        }
    }

    fn emit(&self, message: &str) {
        if self.use_stderr {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut spinner_option = self.spinner.borrow_mut();
        if let Some(spinner) = spinner_option.as_ref() {
            return spinner.clone();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        *spinner_option = Some(spinner.clone());
        spinner
    }

    /// Prints a line without tearing the spinner
    fn print_line(&self, message: &str) {
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.suspend(|| self.emit(message)),
            None => self.emit(message),
        }
    }

    fn finish(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report(&self, message: &str) {
        self.print_line(message);
    }

    fn report_progress(&self, processed: usize, message: Option<&str>) {
        let spinner = self.get_or_create_spinner();
        spinner.set_position(processed as u64);
        if let Some(msg) = message {
            spinner.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.print_line(message);
    }

    fn report_completion(&self, message: &str) {
        self.finish();
        self.emit(message);
    }
}
