use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted report is delivered.
pub trait OutputPresenter {
    /// Presents the formatted report content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;

    /// Describes where the output went, for the run summary
    fn destination(&self) -> String;
}
