// Core algorithm exports
pub mod filters;
pub mod keywords;
pub mod matcher;
pub mod sort;

pub use filters::{filter_records, matches_filters};
pub use keywords::KeywordMap;
pub use matcher::{Matcher, RecommendResult};
pub use sort::{compare_by_key, sort_records};
