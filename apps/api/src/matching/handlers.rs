use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::professional::recommend_for_professional;
use super::{RecommendationSet, DEFAULT_TOP_N};
use crate::errors::AppError;
use crate::quiz::descriptions::describe_group;
use crate::quiz::handlers::{professional_analysis, AnalyzeResponse, ProfessionalAnalysisResponse};
use crate::quiz::models::{AnswerMap, PersonalityGroup};
use crate::quiz::professional::resolve_professional;
use crate::quiz::resolver::resolve_discovery;
use crate::state::AppState;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Deserialize)]
pub struct TopNQuery {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Serialize)]
pub struct RecommendResponse {
    #[serde(flatten)]
    pub analysis: AnalyzeResponse,
    #[serde(flatten)]
    pub results: RecommendationSet,
}

/// POST /api/v1/recommend
///
/// Accepts either answer shape (3 or 8), resolves the profile, re-reads
/// the catalog and ranks it with the configured strategy.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Query(query): Query<TopNQuery>,
    Json(answers): Json<AnswerMap>,
) -> Result<Json<RecommendResponse>, AppError> {
    let profile = resolve_discovery(&state.questions, &answers)?;
    let books = state.catalog.load().await?;
    let results = state.matcher.recommend(&profile, &books, query.top_n).await;
    tracing::debug!(
        profile = %profile.profile_name,
        matches = results.total_matches,
        returned = results.recommendations.len(),
        "recommendation pass complete"
    );
    let description = describe_group(profile.primary_group, profile.is_synthesizer);
    Ok(Json(RecommendResponse {
        analysis: AnalyzeResponse {
            profile,
            description,
        },
        results,
    }))
}

#[derive(Serialize)]
pub struct ProfessionalRecommendResponse {
    pub professional_analysis: ProfessionalAnalysisResponse,
    #[serde(flatten)]
    pub results: RecommendationSet,
}

/// POST /api/v1/recommend/professional
pub async fn handle_recommend_professional(
    State(state): State<AppState>,
    Query(query): Query<TopNQuery>,
    Json(answers): Json<AnswerMap>,
) -> Result<Json<ProfessionalRecommendResponse>, AppError> {
    let profile = resolve_professional(&state.questions, &answers)?;
    let books = state.catalog.load().await?;
    let results = recommend_for_professional(&state.keyword, &profile, &books, query.top_n);
    Ok(Json(ProfessionalRecommendResponse {
        professional_analysis: professional_analysis(profile),
        results,
    }))
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub discovery_questions: usize,
    pub professional_questions: usize,
    pub total_questions: usize,
    pub total_personality_groups: usize,
    pub total_books: usize,
    pub match_strategy: &'static str,
    pub journey_types: [&'static str; 2],
    pub api_version: &'static str,
}

/// GET /api/v1/stats
///
/// Diagnostics surface; a missing catalog reports zero books rather than
/// failing the call.
pub async fn handle_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let total_books = match state.catalog.load().await {
        Ok(books) => books.len(),
        Err(_) => 0,
    };
    let discovery_questions = state.questions.discovery.len();
    let professional_questions = state.questions.professional.len();
    Json(StatsResponse {
        discovery_questions,
        professional_questions,
        total_questions: discovery_questions + professional_questions,
        total_personality_groups: PersonalityGroup::ALL.len(),
        total_books,
        match_strategy: state.matcher.name(),
        journey_types: ["discovery", "professional"],
        api_version: env!("CARGO_PKG_VERSION"),
    })
}
