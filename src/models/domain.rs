use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Legal practice area.
///
/// This is the canonical closed set used by the whole marketplace: the
/// search pipeline, the attribute filters and the seeded directory all
/// agree on these twelve values, and record matching is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "Criminal Law")]
    CriminalLaw,
    #[serde(rename = "Family Law")]
    FamilyLaw,
    #[serde(rename = "Corporate Law")]
    CorporateLaw,
    #[serde(rename = "Intellectual Property")]
    IntellectualProperty,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Tax Law")]
    TaxLaw,
    #[serde(rename = "Immigration Law")]
    ImmigrationLaw,
    #[serde(rename = "Employment Law")]
    EmploymentLaw,
    #[serde(rename = "Environmental Law")]
    EnvironmentalLaw,
    #[serde(rename = "Constitutional Law")]
    ConstitutionalLaw,
    #[serde(rename = "Consumer Protection")]
    ConsumerProtection,
    #[serde(rename = "Bankruptcy Law")]
    BankruptcyLaw,
}

impl Domain {
    /// Every practice area, in display order.
    pub const ALL: [Domain; 12] = [
        Domain::CriminalLaw,
        Domain::FamilyLaw,
        Domain::CorporateLaw,
        Domain::IntellectualProperty,
        Domain::RealEstate,
        Domain::TaxLaw,
        Domain::ImmigrationLaw,
        Domain::EmploymentLaw,
        Domain::EnvironmentalLaw,
        Domain::ConstitutionalLaw,
        Domain::ConsumerProtection,
        Domain::BankruptcyLaw,
    ];

    /// Canonical display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::CriminalLaw => "Criminal Law",
            Domain::FamilyLaw => "Family Law",
            Domain::CorporateLaw => "Corporate Law",
            Domain::IntellectualProperty => "Intellectual Property",
            Domain::RealEstate => "Real Estate",
            Domain::TaxLaw => "Tax Law",
            Domain::ImmigrationLaw => "Immigration Law",
            Domain::EmploymentLaw => "Employment Law",
            Domain::EnvironmentalLaw => "Environmental Law",
            Domain::ConstitutionalLaw => "Constitutional Law",
            Domain::ConsumerProtection => "Consumer Protection",
            Domain::BankruptcyLaw => "Bankruptcy Law",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width specifiers working in tabular CLI output
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error(
    "unrecognized practice area: {0} (expected one of: {valid})",
    valid = Domain::ALL.map(|d| d.as_str()).join(", ")
)]
pub struct ParseDomainError(pub String);

impl FromStr for Domain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .iter()
            .find(|domain| domain.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ParseDomainError(s.to_string()))
    }
}

/// City where a lawyer practises. Closed set, matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Mumbai,
    Delhi,
    Bengaluru,
    Hyderabad,
    Chennai,
    Kolkata,
    Pune,
    Ahmedabad,
    Jaipur,
    Lucknow,
}

impl City {
    /// Every supported city, in display order.
    pub const ALL: [City; 10] = [
        City::Mumbai,
        City::Delhi,
        City::Bengaluru,
        City::Hyderabad,
        City::Chennai,
        City::Kolkata,
        City::Pune,
        City::Ahmedabad,
        City::Jaipur,
        City::Lucknow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Mumbai => "Mumbai",
            City::Delhi => "Delhi",
            City::Bengaluru => "Bengaluru",
            City::Hyderabad => "Hyderabad",
            City::Chennai => "Chennai",
            City::Kolkata => "Kolkata",
            City::Pune => "Pune",
            City::Ahmedabad => "Ahmedabad",
            City::Jaipur => "Jaipur",
            City::Lucknow => "Lucknow",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error(
    "unrecognized city: {0} (expected one of: {valid})",
    valid = City::ALL.map(|c| c.as_str()).join(", ")
)]
pub struct ParseCityError(pub String);

impl FromStr for City {
    type Err = ParseCityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .iter()
            .find(|city| city.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ParseCityError(s.to_string()))
    }
}

/// One lawyer's profile, the unit the matcher filters, sorts and ranks.
///
/// The matcher never mutates records; every operation reads a slice and
/// returns a fresh ordered `Vec` of copies. Descriptive fields at the
/// bottom carry through matching unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LawyerRecord {
    pub id: String,
    #[serde(rename = "firstName")]
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[validate(length(min = 1))]
    pub last_name: String,
    pub domain: Domain,
    pub city: City,
    pub gender: String,
    /// Years of practice.
    pub experience: u8,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(rename = "feesPerHearing")]
    #[validate(range(min = 0.0))]
    pub fees_per_hearing: f64,
    #[serde(rename = "totalCases")]
    pub total_cases: u32,
    #[serde(rename = "casesWon")]
    pub cases_won: u32,
    #[serde(rename = "lawSchool", default)]
    pub law_school: Option<String>,
    #[serde(rename = "barAssociation", default)]
    pub bar_association: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(rename = "enrolledAt", default)]
    pub enrolled_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl LawyerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Fraction of cases won, or `None` for a record with no cases yet.
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_cases == 0 {
            None
        } else {
            Some(f64::from(self.cases_won) / f64::from(self.total_cases))
        }
    }

    /// Whether the won/total counters are mutually consistent.
    pub fn case_counts_consistent(&self) -> bool {
        self.cases_won <= self.total_cases
    }
}
