mod deduplicator;
mod fuzzy_time;
mod group_labeler;
mod hostname_resolver;
mod record_extractor;
mod time_resolver;

pub use deduplicator::{DeduplicationOutcome, Deduplicator};
pub use fuzzy_time::FuzzyTimeParser;
pub use group_labeler::GroupLabeler;
pub use hostname_resolver::HostnameResolver;
pub use record_extractor::RecordExtractor;
pub use time_resolver::TimeResolver;
