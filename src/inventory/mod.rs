/// Inventory extraction domain - records, text patterns, resolution and dedup services
pub mod domain;
pub mod patterns;
pub mod policies;
pub mod services;
