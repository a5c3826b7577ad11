/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe what the scan use case needs from the
/// outside world: capture sources, report formatting, output and progress.
pub mod outbound;
