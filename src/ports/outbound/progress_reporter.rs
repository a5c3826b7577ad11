/// ProgressReporter port for reporting progress during a scan
///
/// This port abstracts progress reporting and diagnostics so the use case
/// never prints directly.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports how many sources have been processed so far
    ///
    /// # Arguments
    /// * `processed` - Sources handled so far (the total is unknown while walking)
    /// * `message` - Optional message to include, usually the current source
    fn report_progress(&self, processed: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
