use std::sync::Arc;

use crate::catalog::loader::CatalogStore;
use crate::config::Config;
use crate::matching::keyword_score::KeywordMatcher;
use crate::matching::BookMatcher;
use crate::quiz::models::QuestionBank;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is immutable after startup; the catalog
/// file itself is re-read per request through `catalog`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub questions: Arc<QuestionBank>,
    pub catalog: CatalogStore,
    /// Pluggable ranking strategy. Default: KeywordMatcher. Swap via MATCH_STRATEGY env.
    pub matcher: Arc<dyn BookMatcher>,
    /// The professional flow is defined over keyword scoring regardless
    /// of the selected default strategy.
    pub keyword: Arc<KeywordMatcher>,
}
