//! Strategy A: category fuzzy matching.
//!
//! Scores a book purely from its category string against the profile's
//! target category lists. Tiers, highest wins:
//!
//! - 1.0 exact match on a synthesizer-only category (synthesizer active)
//! - 0.9 exact match on a base category
//! - 0.8 substring match, either direction, on a synthesizer-only category
//! - 0.7 substring match on a base category
//! - 0.6 alias-table match
//! - 0.1 floor, including rows with no category at all
//!
//! Only books scoring above the floor count as matches.

use async_trait::async_trait;

use super::categories::{alias_match, base_categories, synthesizer_categories};
use super::{assemble, BookMatcher, RecommendationSet, ScoredBook};
use crate::catalog::models::BookRecord;
use crate::quiz::models::{PersonalityGroup, Profile};

pub const SYNTH_EXACT_SCORE: f64 = 1.0;
pub const BASE_EXACT_SCORE: f64 = 0.9;
pub const SYNTH_SUBSTRING_SCORE: f64 = 0.8;
pub const BASE_SUBSTRING_SCORE: f64 = 0.7;
pub const ALIAS_SCORE: f64 = 0.6;
pub const FLOOR_SCORE: f64 = 0.1;

pub struct CategoryMatcher;

impl CategoryMatcher {
    /// Best tier the category reaches for this group, or the floor.
    pub fn score_category(
        category: Option<&str>,
        group: PersonalityGroup,
        is_synthesizer: bool,
    ) -> f64 {
        let Some(raw) = category else {
            return FLOOR_SCORE;
        };
        let actual = raw.to_lowercase();
        let mut best = FLOOR_SCORE;

        if is_synthesizer {
            for target in synthesizer_categories(group) {
                let target = target.to_lowercase();
                if actual == target {
                    return SYNTH_EXACT_SCORE;
                }
                if target.contains(&actual) || actual.contains(&target) {
                    best = best.max(SYNTH_SUBSTRING_SCORE);
                } else if alias_match(&actual, &target) {
                    best = best.max(ALIAS_SCORE);
                }
            }
        }

        for target in base_categories(group) {
            let target = target.to_lowercase();
            if actual == target {
                best = best.max(BASE_EXACT_SCORE);
            } else if target.contains(&actual) || actual.contains(&target) {
                best = best.max(BASE_SUBSTRING_SCORE);
            } else if alias_match(&actual, &target) {
                best = best.max(ALIAS_SCORE);
            }
        }

        best
    }
}

#[async_trait]
impl BookMatcher for CategoryMatcher {
    fn name(&self) -> &'static str {
        "category"
    }

    async fn recommend(
        &self,
        profile: &Profile,
        books: &[BookRecord],
        top_n: usize,
    ) -> RecommendationSet {
        let scored: Vec<ScoredBook<'_>> = books
            .iter()
            .filter_map(|book| {
                let score = Self::score_category(
                    book.category.as_deref(),
                    profile.primary_group,
                    profile.is_synthesizer,
                );
                (score > FLOOR_SCORE).then_some(ScoredBook { book, score })
            })
            .collect();
        assemble(scored, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::models::PersonalityGroup::*;

    fn book(id: &str, category: Option<&str>, quantity: Option<u32>) -> BookRecord {
        BookRecord {
            product_id: Some(id.to_string()),
            title: Some(format!("title {id}")),
            category: category.map(str::to_string),
            quantity,
            ..Default::default()
        }
    }

    #[test]
    fn test_base_exact_match_scores_point_nine() {
        let score = CategoryMatcher::score_category(Some("Lịch sử"), Thinker, false);
        assert_eq!(score, BASE_EXACT_SCORE);
    }

    #[test]
    fn test_synthesizer_only_category_needs_active_flag() {
        // "Tư duy hệ thống" exists only in the Thinker synthesizer list.
        let inactive = CategoryMatcher::score_category(Some("Tư duy hệ thống"), Thinker, false);
        assert_eq!(inactive, FLOOR_SCORE);
        let active = CategoryMatcher::score_category(Some("Tư duy hệ thống"), Thinker, true);
        assert_eq!(active, SYNTH_EXACT_SCORE);
    }

    #[test]
    fn test_substring_match_scores_lower_than_exact() {
        let score = CategoryMatcher::score_category(Some("Sách Lịch sử Việt Nam"), Thinker, false);
        assert_eq!(score, BASE_SUBSTRING_SCORE);
    }

    #[test]
    fn test_alias_match_scores_point_six() {
        // "psychology" reaches Connector's "Tâm lý học" via the alias table.
        let score = CategoryMatcher::score_category(Some("Psychology"), Connector, false);
        assert_eq!(score, ALIAS_SCORE);
    }

    #[test]
    fn test_unrelated_category_gets_floor() {
        let score = CategoryMatcher::score_category(Some("Bóng đá"), Connector, false);
        assert_eq!(score, FLOOR_SCORE);
    }

    #[test]
    fn test_missing_category_gets_floor_without_panicking() {
        let score = CategoryMatcher::score_category(None, Builder, true);
        assert_eq!(score, FLOOR_SCORE);
    }

    #[tokio::test]
    async fn test_recommend_keeps_only_matches() {
        let books = vec![
            book("hit", Some("Lịch sử"), Some(5)),
            book("floor", Some("Bóng đá"), Some(9000)),
            book("nocat", None, Some(9000)),
        ];
        let profile = Profile::for_group(Thinker, false);
        let set = CategoryMatcher.recommend(&profile, &books, 10).await;
        assert_eq!(set.total_matches, 1);
        assert_eq!(set.recommendations.len(), 1);
        assert_eq!(set.recommendations[0].product_id, "hit");
        assert_eq!(set.recommendations[0].personality_match_score, BASE_EXACT_SCORE);
    }

    #[tokio::test]
    async fn test_recommend_orders_ties_by_quantity() {
        let books = vec![
            book("small", Some("Lịch sử"), Some(10)),
            book("big", Some("Lịch sử"), Some(100)),
        ];
        let profile = Profile::for_group(Thinker, false);
        let set = CategoryMatcher.recommend(&profile, &books, 10).await;
        assert_eq!(set.recommendations[0].product_id, "big");
        assert_eq!(set.recommendations[1].product_id, "small");
    }

    #[tokio::test]
    async fn test_synthesizer_extends_target_list() {
        let books = vec![book("synth", Some("Triết học khoa học"), None)];
        let inactive = Profile::for_group(Thinker, false);
        let set = CategoryMatcher.recommend(&inactive, &books, 10).await;
        assert_eq!(set.total_matches, 0);

        let active = Profile::for_group(Thinker, true);
        let set = CategoryMatcher.recommend(&active, &books, 10).await;
        assert_eq!(set.total_matches, 1);
        assert_eq!(set.recommendations[0].personality_match_score, SYNTH_EXACT_SCORE);
    }
}
