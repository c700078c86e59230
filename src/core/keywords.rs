use tracing::debug;

use crate::models::Domain;

/// Built-in keyword table mapping everyday legal vocabulary to practice
/// areas. Keys are lowercase; a key maps to more than one domain when
/// the term genuinely straddles practice areas (fraud is prosecuted
/// under criminal law and litigated as a consumer matter).
///
/// Multi-word keys like "intellectual property" are matched as plain
/// substrings of the query, so ordering inside the table only affects
/// the order domains come back in, never whether they match.
const DEFAULT_KEYWORDS: &[(&str, &[Domain])] = &[
    // Family
    ("divorce", &[Domain::FamilyLaw]),
    ("custody", &[Domain::FamilyLaw]),
    ("alimony", &[Domain::FamilyLaw]),
    ("adoption", &[Domain::FamilyLaw]),
    ("marriage", &[Domain::FamilyLaw]),
    ("dowry", &[Domain::FamilyLaw]),
    // Criminal
    ("theft", &[Domain::CriminalLaw]),
    ("murder", &[Domain::CriminalLaw]),
    ("bail", &[Domain::CriminalLaw]),
    ("assault", &[Domain::CriminalLaw]),
    ("fraud", &[Domain::CriminalLaw, Domain::ConsumerProtection]),
    // Corporate
    ("contract", &[Domain::CorporateLaw]),
    ("startup", &[Domain::CorporateLaw]),
    ("merger", &[Domain::CorporateLaw]),
    ("shareholder", &[Domain::CorporateLaw]),
    ("company", &[Domain::CorporateLaw]),
    // Intellectual property
    ("patent", &[Domain::IntellectualProperty]),
    ("trademark", &[Domain::IntellectualProperty]),
    ("copyright", &[Domain::IntellectualProperty]),
    ("piracy", &[Domain::IntellectualProperty]),
    ("intellectual property", &[Domain::IntellectualProperty]),
    // Real estate
    ("property", &[Domain::RealEstate]),
    ("tenant", &[Domain::RealEstate]),
    ("landlord", &[Domain::RealEstate]),
    ("eviction", &[Domain::RealEstate]),
    ("registry", &[Domain::RealEstate]),
    // Tax
    ("tax", &[Domain::TaxLaw]),
    ("gst", &[Domain::TaxLaw]),
    ("income tax", &[Domain::TaxLaw]),
    // Immigration
    ("visa", &[Domain::ImmigrationLaw]),
    ("citizenship", &[Domain::ImmigrationLaw]),
    ("deportation", &[Domain::ImmigrationLaw]),
    ("passport", &[Domain::ImmigrationLaw]),
    // Employment
    ("salary", &[Domain::EmploymentLaw]),
    ("fired", &[Domain::EmploymentLaw]),
    ("termination", &[Domain::EmploymentLaw]),
    ("workplace", &[Domain::EmploymentLaw]),
    ("harassment", &[Domain::EmploymentLaw, Domain::CriminalLaw]),
    // Environmental
    ("pollution", &[Domain::EnvironmentalLaw]),
    ("environment", &[Domain::EnvironmentalLaw]),
    ("wildlife", &[Domain::EnvironmentalLaw]),
    // Constitutional
    ("writ", &[Domain::ConstitutionalLaw]),
    ("fundamental rights", &[Domain::ConstitutionalLaw]),
    ("election", &[Domain::ConstitutionalLaw]),
    // Consumer
    ("refund", &[Domain::ConsumerProtection]),
    ("defective", &[Domain::ConsumerProtection]),
    ("consumer", &[Domain::ConsumerProtection]),
    ("warranty", &[Domain::ConsumerProtection]),
    // Bankruptcy
    ("bankruptcy", &[Domain::BankruptcyLaw]),
    ("insolvency", &[Domain::BankruptcyLaw]),
    ("debt", &[Domain::BankruptcyLaw]),
];

/// Maps free-text queries to the practice areas they mention.
///
/// Resolution is deliberately simple: lowercase the query, then check
/// each keyword for substring containment. No stemming, no fuzzy
/// matching. Unknown vocabulary resolves to the empty set and the
/// caller decides what a miss means.
#[derive(Debug, Clone)]
pub struct KeywordMap {
    entries: Vec<(String, Vec<Domain>)>,
}

impl KeywordMap {
    /// Builds a map from explicit entries. Keys are lowercased; empty
    /// keys are dropped since an empty substring would match every
    /// query.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Domain>)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(key, domains)| {
                let key = key.as_ref().trim().to_lowercase();
                if key.is_empty() {
                    None
                } else {
                    Some((key, domains))
                }
            })
            .collect();
        Self { entries }
    }

    /// Resolves a query to the union of domains for every keyword the
    /// query contains, deduplicated, in table order. Unknown or blank
    /// queries yield an empty vec.
    pub fn resolve(&self, query: &str) -> Vec<Domain> {
        let query = query.to_lowercase();
        if query.trim().is_empty() {
            return Vec::new();
        }

        let mut matched: Vec<Domain> = Vec::new();
        for (keyword, domains) in &self.entries {
            if query.contains(keyword.as_str()) {
                for &domain in domains {
                    if !matched.contains(&domain) {
                        matched.push(domain);
                    }
                }
            }
        }

        debug!(query = %query, domains = ?matched, "resolved query keywords");
        matched
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordMap {
    /// The built-in vocabulary covering all twelve practice areas.
    fn default() -> Self {
        Self::new(
            DEFAULT_KEYWORDS
                .iter()
                .map(|&(key, domains)| (key, domains.to_vec())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        let keywords = KeywordMap::default();
        assert_eq!(keywords.resolve("DIVORCE"), vec![Domain::FamilyLaw]);
        assert_eq!(keywords.resolve("Divorce lawyer"), vec![Domain::FamilyLaw]);
    }

    #[test]
    fn test_resolve_unions_multiple_keywords() {
        let keywords = KeywordMap::default();
        let domains = keywords.resolve("startup tax planning");
        assert_eq!(domains, vec![Domain::CorporateLaw, Domain::TaxLaw]);
    }

    #[test]
    fn test_resolve_deduplicates_domains() {
        let keywords = KeywordMap::default();
        // Both keywords map to the same practice area.
        let domains = keywords.resolve("divorce and custody battle");
        assert_eq!(domains, vec![Domain::FamilyLaw]);
    }

    #[test]
    fn test_ambiguous_keyword_maps_to_both_areas() {
        let keywords = KeywordMap::default();
        let domains = keywords.resolve("fraud");
        assert_eq!(
            domains,
            vec![Domain::CriminalLaw, Domain::ConsumerProtection]
        );
    }

    #[test]
    fn test_resolve_unknown_query_is_empty() {
        let keywords = KeywordMap::default();
        assert!(keywords.resolve("quantum entanglement").is_empty());
    }

    #[test]
    fn test_resolve_blank_query_is_empty() {
        let keywords = KeywordMap::default();
        assert!(keywords.resolve("").is_empty());
        assert!(keywords.resolve("   ").is_empty());
    }

    #[test]
    fn test_multi_word_keyword_matches_as_substring() {
        let keywords = KeywordMap::default();
        let domains = keywords.resolve("intellectual property dispute");
        // "intellectual property" and "property" both fire.
        assert!(domains.contains(&Domain::IntellectualProperty));
        assert!(domains.contains(&Domain::RealEstate));
    }

    #[test]
    fn test_custom_table_drops_empty_keys() {
        let keywords = KeywordMap::new(vec![
            ("", vec![Domain::TaxLaw]),
            ("  ", vec![Domain::TaxLaw]),
            ("audit", vec![Domain::TaxLaw]),
        ]);
        assert_eq!(keywords.len(), 1);
        assert!(keywords.resolve("anything at all").is_empty());
        assert_eq!(keywords.resolve("audit notice"), vec![Domain::TaxLaw]);
    }
}
