//! Strategy B: free-text keyword scoring. The canonical default.
//!
//! Each keyword is matched as a case-folded substring against four text
//! surfaces in decreasing order of trust: category, title, summary,
//! content. A hit contributes `surface_weight / keyword_count`, so the
//! raw text score stays bounded regardless of lexicon size. Popularity
//! bonuses are added only for books with at least one textual hit and
//! only when the backing numeric is actually present.

use async_trait::async_trait;

use super::keywords::{group_keywords, SYNTHESIZER_KEYWORDS};
use super::{assemble, BookMatcher, RecommendationSet, ScoredBook};
use crate::catalog::models::BookRecord;
use crate::quiz::models::Profile;

pub const CATEGORY_WEIGHT: f64 = 3.0;
pub const TITLE_WEIGHT: f64 = 2.0;
pub const SUMMARY_WEIGHT: f64 = 1.0;
pub const CONTENT_WEIGHT: f64 = 0.5;

pub const SALES_BONUS_CAP: f64 = 0.2;
pub const RATING_BONUS_CAP: f64 = 0.1;
pub const REVIEW_BONUS_CAP: f64 = 0.1;
pub const SALES_SATURATION: f64 = 10_000.0;
pub const RATING_SCALE: f64 = 5.0;
pub const REVIEW_SATURATION: f64 = 1_000.0;

/// Relevance floor: books at or below this are not matches.
pub const INCLUSION_THRESHOLD: f64 = 0.05;

pub struct KeywordMatcher;

impl KeywordMatcher {
    /// Effective keyword list for a profile: the primary group's lexicon,
    /// the synthesizer extension when active, then any caller extras.
    /// Deduplicated so no term is counted twice.
    pub fn keyword_list(profile: &Profile, extra: &[&str]) -> Vec<String> {
        let mut list: Vec<String> = group_keywords(profile.primary_group)
            .iter()
            .map(|kw| kw.to_lowercase())
            .collect();
        if profile.is_synthesizer {
            list.extend(SYNTHESIZER_KEYWORDS.iter().map(|kw| kw.to_lowercase()));
        }
        list.extend(extra.iter().map(|kw| kw.to_lowercase()));
        list.sort();
        list.dedup();
        list
    }

    pub fn score_book(book: &BookRecord, keywords: &[String]) -> f64 {
        if keywords.is_empty() {
            return 0.0;
        }
        let fold = |text: &Option<String>| {
            text.as_deref().map(str::to_lowercase).unwrap_or_default()
        };
        let category = fold(&book.category);
        let title = fold(&book.title);
        let summary = fold(&book.summary);
        let content = fold(&book.content);

        let per_keyword = 1.0 / keywords.len() as f64;
        let mut score = 0.0;
        for keyword in keywords {
            if category.contains(keyword.as_str()) {
                score += CATEGORY_WEIGHT * per_keyword;
            }
            if title.contains(keyword.as_str()) {
                score += TITLE_WEIGHT * per_keyword;
            }
            if summary.contains(keyword.as_str()) {
                score += SUMMARY_WEIGHT * per_keyword;
            }
            if content.contains(keyword.as_str()) {
                score += CONTENT_WEIGHT * per_keyword;
            }
        }

        // Popularity never rescues a book with zero textual relevance, and
        // a missing numeric means no bonus, not a zero-valued one.
        if score > 0.0 {
            if let Some(quantity) = book.quantity {
                score += SALES_BONUS_CAP * (quantity as f64 / SALES_SATURATION).min(1.0);
            }
            if let Some(rating) = book.avg_rating {
                score += RATING_BONUS_CAP * (rating / RATING_SCALE);
            }
            if let Some(reviews) = book.n_review {
                score += REVIEW_BONUS_CAP * (reviews as f64 / REVIEW_SATURATION).min(1.0);
            }
        }
        score
    }

    /// Full ranking pass with extra keywords unioned in (the professional
    /// flow passes the field lexicon here).
    pub fn rank(
        &self,
        profile: &Profile,
        extra_keywords: &[&str],
        books: &[BookRecord],
        top_n: usize,
    ) -> RecommendationSet {
        let keywords = Self::keyword_list(profile, extra_keywords);
        let scored: Vec<ScoredBook<'_>> = books
            .iter()
            .filter_map(|book| {
                let score = Self::score_book(book, &keywords);
                (score > INCLUSION_THRESHOLD).then_some(ScoredBook { book, score })
            })
            .collect();
        assemble(scored, top_n)
    }
}

#[async_trait]
impl BookMatcher for KeywordMatcher {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn recommend(
        &self,
        profile: &Profile,
        books: &[BookRecord],
        top_n: usize,
    ) -> RecommendationSet {
        self.rank(profile, &[], books, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::models::PersonalityGroup::*;

    fn thinker() -> Profile {
        Profile::for_group(Thinker, false)
    }

    fn keywords() -> Vec<String> {
        KeywordMatcher::keyword_list(&thinker(), &[])
    }

    fn book_with(category: Option<&str>, title: Option<&str>, summary: Option<&str>) -> BookRecord {
        BookRecord {
            product_id: Some("1".to_string()),
            category: category.map(str::to_string),
            title: title.map(str::to_string),
            summary: summary.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_surface_weights_are_ordered_by_trust() {
        let kws = keywords();
        let n = kws.len() as f64;
        let by_category = KeywordMatcher::score_book(&book_with(Some("lịch sử"), None, None), &kws);
        let by_title = KeywordMatcher::score_book(&book_with(None, Some("lịch sử"), None), &kws);
        let by_summary = KeywordMatcher::score_book(&book_with(None, None, Some("lịch sử")), &kws);
        assert!((by_category - CATEGORY_WEIGHT / n).abs() < 1e-9);
        assert!((by_title - TITLE_WEIGHT / n).abs() < 1e-9);
        assert!((by_summary - SUMMARY_WEIGHT / n).abs() < 1e-9);
        assert!(by_category > by_title && by_title > by_summary);
    }

    #[test]
    fn test_multi_surface_hit_outscores_single_surface() {
        let kws = keywords();
        let both =
            KeywordMatcher::score_book(&book_with(Some("lịch sử"), Some("lịch sử"), None), &kws);
        let single = KeywordMatcher::score_book(&book_with(Some("lịch sử"), None, None), &kws);
        assert!(both > single);
    }

    #[test]
    fn test_bonuses_require_present_numerics() {
        let kws = keywords();
        let bare = book_with(Some("lịch sử"), None, None);
        let base = KeywordMatcher::score_book(&bare, &kws);

        let popular = BookRecord {
            quantity: Some(20_000),
            avg_rating: Some(5.0),
            n_review: Some(5_000),
            ..bare.clone()
        };
        let boosted = KeywordMatcher::score_book(&popular, &kws);
        let expected = base + SALES_BONUS_CAP + RATING_BONUS_CAP + REVIEW_BONUS_CAP;
        assert!((boosted - expected).abs() < 1e-9, "bonuses saturate at their caps");
    }

    #[test]
    fn test_popularity_alone_scores_zero() {
        let kws = keywords();
        let irrelevant = BookRecord {
            title: Some("truyện cười".to_string()),
            quantity: Some(50_000),
            avg_rating: Some(5.0),
            n_review: Some(9_999),
            ..Default::default()
        };
        assert_eq!(KeywordMatcher::score_book(&irrelevant, &kws), 0.0);
    }

    #[test]
    fn test_partial_sales_bonus_scales_linearly() {
        let kws = keywords();
        let base = KeywordMatcher::score_book(&book_with(Some("lịch sử"), None, None), &kws);
        let half = BookRecord {
            quantity: Some(5_000),
            ..book_with(Some("lịch sử"), None, None)
        };
        let boosted = KeywordMatcher::score_book(&half, &kws);
        assert!((boosted - base - SALES_BONUS_CAP * 0.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_rank_excludes_books_under_threshold() {
        // A content-only hit scores 0.5/N, which sits under the threshold
        // once the lexicon is large enough; an irrelevant book scores 0.
        let books = vec![
            BookRecord {
                product_id: Some("relevant".to_string()),
                category: Some("Khoa học - Kỹ thuật".to_string()),
                title: Some("Lịch sử triết học".to_string()),
                ..Default::default()
            },
            BookRecord {
                product_id: Some("irrelevant".to_string()),
                title: Some("truyện cười dân gian".to_string()),
                ..Default::default()
            },
        ];
        let set = KeywordMatcher.recommend(&thinker(), &books, 10).await;
        assert_eq!(set.total_matches, 1);
        assert_eq!(set.recommendations[0].product_id, "relevant");
    }

    #[tokio::test]
    async fn test_missing_category_book_can_match_and_buckets_unknown() {
        let books = vec![BookRecord {
            product_id: Some("uncategorized".to_string()),
            title: Some("Triết học nhập môn".to_string()),
            summary: Some("phân tích và tư duy logic".to_string()),
            ..Default::default()
        }];
        let set = KeywordMatcher.recommend(&thinker(), &books, 10).await;
        assert_eq!(set.total_matches, 1);
        assert_eq!(set.match_distribution[super::super::UNKNOWN_CATEGORY], 1);
    }

    #[tokio::test]
    async fn test_synthesizer_extension_widens_matches() {
        let books = vec![BookRecord {
            product_id: Some("synth".to_string()),
            title: Some("Tư duy đa tầng và giao thoa tri thức".to_string()),
            category: Some("Tạp văn".to_string()),
            ..Default::default()
        }];
        // "đa tầng"/"giao thoa" live only in the synthesizer extension;
        // title hits on two extension terms clear the threshold.
        let plain = KeywordMatcher
            .recommend(&Profile::for_group(Connector, false), &books, 10)
            .await;
        assert_eq!(plain.total_matches, 0);
        let synth = KeywordMatcher
            .recommend(&Profile::for_group(Connector, true), &books, 10)
            .await;
        assert_eq!(synth.total_matches, 1);
    }

    #[test]
    fn test_score_at_exact_threshold_is_not_a_match() {
        // One content-only hit over a ten-term list lands exactly on the
        // threshold (0.5 / 10); inclusion requires strictly above.
        let keywords: Vec<String> = (0..10).map(|i| format!("kw{i}")).collect();
        let book = BookRecord {
            content: Some("đoạn văn nhắc tới kw0 đúng một lần".to_string()),
            ..Default::default()
        };
        let score = KeywordMatcher::score_book(&book, &keywords);
        assert_eq!(score, INCLUSION_THRESHOLD);
        assert!(score <= INCLUSION_THRESHOLD, "boundary value must be excluded");
    }

    #[test]
    fn test_keyword_list_dedups_extras() {
        let profile = thinker();
        let base = KeywordMatcher::keyword_list(&profile, &[]);
        let with_duplicate = KeywordMatcher::keyword_list(&profile, &["lịch sử"]);
        assert_eq!(base.len(), with_duplicate.len());
    }
}
