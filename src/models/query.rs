use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::domain::{City, Domain};

/// Attribute constraints for narrowing a record set.
///
/// Every field is optional and `None` means "no constraint on this
/// attribute". A present value always applies: `Some(0)` for
/// `min_experience` is a real constraint that happens to admit every
/// record, it is not treated as absent. All present constraints must
/// hold for a record to pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub domain: Option<Domain>,
    pub city: Option<City>,
    pub gender: Option<String>,
    #[serde(rename = "minExperience")]
    pub min_experience: Option<u8>,
    #[serde(rename = "minRating")]
    pub min_rating: Option<f64>,
    #[serde(rename = "maxFees")]
    pub max_fees: Option<f64>,
}

impl FilterOptions {
    /// True when no constraint is set, in which case filtering is the
    /// identity.
    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
            && self.city.is_none()
            && self.gender.is_none()
            && self.min_experience.is_none()
            && self.min_rating.is_none()
            && self.max_fees.is_none()
    }
}

/// Single-key orderings the directory can be listed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Highest rating first.
    Rating,
    /// Most years of practice first.
    Experience,
    /// Cheapest hearing fee first.
    FeesLow,
    /// Most expensive hearing fee first.
    FeesHigh,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Experience => "experience",
            SortKey::FeesLow => "fees-low",
            SortKey::FeesHigh => "fees-high",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unrecognized sort key: {0} (expected rating, experience, fees-low or fees-high)")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(SortKey::Rating),
            "experience" => Ok(SortKey::Experience),
            "fees-low" => Ok(SortKey::FeesLow),
            "fees-high" => Ok(SortKey::FeesHigh),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}
