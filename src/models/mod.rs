// Model exports
pub mod domain;
pub mod query;

pub use domain::{City, Domain, LawyerRecord, ParseCityError, ParseDomainError};
pub use query::{FilterOptions, ParseSortKeyError, SortKey};
