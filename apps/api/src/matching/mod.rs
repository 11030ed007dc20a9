//! Book ranking against a resolved profile.
//!
//! Two real, divergent strategies live behind one interface: category
//! fuzzy matching and free-text keyword scoring. `AppState` carries an
//! `Arc<dyn BookMatcher>`, swapped at startup via `MATCH_STRATEGY`.

pub mod categories;
pub mod category_match;
pub mod handlers;
pub mod keyword_score;
pub mod keywords;
pub mod professional;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::catalog::models::BookRecord;
use crate::quiz::models::Profile;

pub const DEFAULT_TOP_N: usize = 20;

/// Histogram bucket for rows without a category.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// A book plus its computed fit for one profile. Recomputed per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub product_id: String,
    pub title: String,
    pub authors: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub cover_link: Option<String>,
    pub personality_match_score: f64,
}

impl Recommendation {
    fn from_scored(book: &BookRecord, score: f64) -> Self {
        Recommendation {
            product_id: book.product_id.clone().unwrap_or_default(),
            title: book.title.clone().unwrap_or_default(),
            authors: book.authors.clone(),
            category: book.category.clone(),
            summary: book.display_summary(),
            cover_link: book.cover_link.clone(),
            personality_match_score: score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub total_matches: usize,
    pub match_distribution: BTreeMap<String, usize>,
}

/// A ranking strategy. Implementations are pure over their inputs; the
/// async seam exists so a strategy may shed heavy work onto the blocking
/// pool without changing callers.
#[async_trait]
pub trait BookMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    async fn recommend(
        &self,
        profile: &Profile,
        books: &[BookRecord],
        top_n: usize,
    ) -> RecommendationSet;
}

pub(crate) struct ScoredBook<'a> {
    pub book: &'a BookRecord,
    pub score: f64,
}

/// Shared tail of both strategies: stable sort by score descending with
/// sales quantity as the tie key, histogram over the full match set,
/// then truncation to `top_n`.
pub(crate) fn assemble(mut scored: Vec<ScoredBook<'_>>, top_n: usize) -> RecommendationSet {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.book.quantity.unwrap_or(0).cmp(&a.book.quantity.unwrap_or(0)))
    });

    let mut match_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for entry in &scored {
        let bucket = entry
            .book
            .category
            .clone()
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
        *match_distribution.entry(bucket).or_default() += 1;
    }

    let total_matches = scored.len();
    let recommendations = scored
        .iter()
        .take(top_n)
        .map(|entry| Recommendation::from_scored(entry.book, entry.score))
        .collect();

    RecommendationSet {
        recommendations,
        total_matches,
        match_distribution,
    }
}
