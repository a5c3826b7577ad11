mod record_precedence;

pub use record_precedence::RecordPrecedence;
