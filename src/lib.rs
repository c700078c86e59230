//! LexMatch - Lawyer directory matching engine for the LexMatch marketplace
//!
//! This library turns free-text legal queries into ranked lawyer
//! recommendations. It resolves everyday vocabulary to practice areas,
//! filters the directory on client constraints and orders results by a
//! chosen key, all as pure functions over in-memory record sets.

pub mod config;
pub mod core;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use self::core::{filter_records, sort_records, KeywordMap, Matcher, RecommendResult};
pub use models::{City, Domain, FilterOptions, LawyerRecord, SortKey};
