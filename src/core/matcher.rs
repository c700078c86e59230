use tracing::debug;

use crate::core::keywords::KeywordMap;
use crate::models::{Domain, LawyerRecord};

/// Result of a recommendation query.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendResult {
    /// Ranked records, at most the requested count.
    pub matches: Vec<LawyerRecord>,
    /// Practice areas the query resolved to; empty on a vocabulary miss.
    pub matched_domains: Vec<Domain>,
    /// Directory size before any narrowing, for diagnostics.
    pub total_candidates: usize,
}

/// Recommendation orchestrator - resolves a free-text query against the
/// directory and ranks the results.
///
/// # Pipeline Stages
/// 1. Keyword resolution to practice areas
/// 2. Domain filtering (skipped on a vocabulary miss)
/// 3. Ranking and truncation
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    keywords: KeywordMap,
}

impl Matcher {
    pub fn new(keywords: KeywordMap) -> Self {
        Self { keywords }
    }

    pub fn with_default_keywords() -> Self {
        Self {
            keywords: KeywordMap::default(),
        }
    }

    /// Recommend lawyers for a free-text query.
    ///
    /// When the query resolves to one or more practice areas, only
    /// lawyers in those areas are considered and they are ranked by
    /// rating with years of experience breaking ties. When nothing in
    /// the query is recognized the whole directory is ranked by rating
    /// alone, so callers always get a usable top list. Ties that
    /// neither key resolves keep directory order.
    ///
    /// # Arguments
    /// * `query` - Free-text description of the legal problem
    /// * `records` - The lawyer directory to draw from
    /// * `count` - Maximum number of recommendations to return
    pub fn recommend(
        &self,
        query: &str,
        records: &[LawyerRecord],
        count: usize,
    ) -> RecommendResult {
        let total_candidates = records.len();
        let matched_domains = self.keywords.resolve(query);

        let mut matches: Vec<LawyerRecord> = if matched_domains.is_empty() {
            records.to_vec()
        } else {
            records
                .iter()
                .filter(|record| matched_domains.contains(&record.domain))
                .cloned()
                .collect()
        };

        if matched_domains.is_empty() {
            // Fallback path: rating only, directory order on ties.
            matches.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        } else {
            matches.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| b.experience.cmp(&a.experience))
            });
        }

        matches.truncate(count);

        debug!(
            query = %query,
            matched = matched_domains.len(),
            returned = matches.len(),
            total_candidates,
            "recommendation complete"
        );

        RecommendResult {
            matches,
            matched_domains,
            total_candidates,
        }
    }
}
