/// Formatter adapters rendering the inventory report
mod csv_formatter;
mod json_formatter;
mod markdown_formatter;

pub use csv_formatter::CsvFormatter;
pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
