//! Professional-track recommendation flow.
//!
//! The professional profile borrows a canonical group through the
//! interop table, ranks with the keyword strategy over an enlarged pool
//! (field lexicon unioned in), then filters for the field itself. When
//! the filter leaves too few books, the pool backfills in rank order.

use std::collections::HashSet;

use super::keyword_score::KeywordMatcher;
use super::keywords::field_keywords;
use super::{Recommendation, RecommendationSet};
use crate::catalog::models::BookRecord;
use crate::quiz::models::Profile;
use crate::quiz::professional::{interop_group, ProfessionalProfile};

/// Ranked-pool size relative to the requested top_n.
pub const POOL_FACTOR: usize = 2;

pub fn recommend_for_professional(
    matcher: &KeywordMatcher,
    profile: &ProfessionalProfile,
    books: &[BookRecord],
    top_n: usize,
) -> RecommendationSet {
    let group = interop_group(profile);
    let synthetic = Profile::for_group(group, profile.is_professional_synthesizer);
    let field_words = field_keywords(profile.field);

    let pool = matcher.rank(&synthetic, field_words, books, top_n * POOL_FACTOR);

    let mut kept: Vec<Recommendation> = pool
        .recommendations
        .iter()
        .filter(|rec| field_hit(rec, field_words))
        .take(top_n)
        .cloned()
        .collect();

    // Sparse fields starve the filter; backfill from the ranked pool
    // without repeating a product.
    if kept.len() < top_n / 2 {
        let mut seen: HashSet<String> = kept.iter().map(|rec| rec.product_id.clone()).collect();
        for candidate in &pool.recommendations {
            if kept.len() >= top_n {
                break;
            }
            if seen.insert(candidate.product_id.clone()) {
                kept.push(candidate.clone());
            }
        }
    }

    RecommendationSet {
        recommendations: kept,
        total_matches: pool.total_matches,
        match_distribution: pool.match_distribution,
    }
}

/// Field keywords are matched against the trusted short surfaces only.
fn field_hit(rec: &Recommendation, field_words: &[&str]) -> bool {
    let category = rec.category.as_deref().unwrap_or_default().to_lowercase();
    let title = rec.title.to_lowercase();
    let summary = rec.summary.as_deref().unwrap_or_default().to_lowercase();
    field_words
        .iter()
        .any(|kw| category.contains(kw) || title.contains(kw) || summary.contains(kw))
}
