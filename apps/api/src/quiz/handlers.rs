use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::descriptions::{describe_field, describe_group, learning_tips, GroupDescription, LearningTips};
use super::models::{AnswerMap, PersonalityGroup, Profile};
use super::professional::{resolve_professional, ProfessionalProfile};
use super::resolver::resolve_discovery;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    #[default]
    Discovery,
    Professional,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackQuery {
    #[serde(default)]
    pub track: Track,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub description: GroupDescription,
}

#[derive(Serialize)]
pub struct ProfessionalAnalysisResponse {
    #[serde(flatten)]
    pub profile: ProfessionalProfile,
    pub field_description: &'static str,
    pub learning_recommendations: LearningTips,
}

pub(crate) fn professional_analysis(profile: ProfessionalProfile) -> ProfessionalAnalysisResponse {
    ProfessionalAnalysisResponse {
        field_description: describe_field(profile.field),
        learning_recommendations: learning_tips(
            profile.motivation,
            profile.learning_style,
            profile.presentation_preference,
        ),
        profile,
    }
}

/// GET /api/v1/questions
pub async fn handle_questions(
    State(state): State<AppState>,
    Query(query): Query<TrackQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let value = match query.track {
        Track::Discovery => serde_json::to_value(&state.questions.discovery)?,
        Track::Professional => serde_json::to_value(&state.questions.professional)?,
    };
    Ok(Json(value))
}

/// GET /api/v1/questions/:id
pub async fn handle_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<TrackQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let value = match query.track {
        Track::Discovery => state
            .questions
            .discovery_question(&id)
            .map(serde_json::to_value),
        Track::Professional => state
            .questions
            .professional_question(&id)
            .map(serde_json::to_value),
    };
    match value {
        Some(question) => Ok(Json(question?)),
        None => Err(AppError::NotFound(format!("Question {id} not found"))),
    }
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(answers): Json<AnswerMap>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let profile = resolve_discovery(&state.questions, &answers)?;
    let description = describe_group(profile.primary_group, profile.is_synthesizer);
    Ok(Json(AnalyzeResponse {
        profile,
        description,
    }))
}

/// POST /api/v1/analyze/professional
pub async fn handle_analyze_professional(
    State(state): State<AppState>,
    Json(answers): Json<AnswerMap>,
) -> Result<Json<ProfessionalAnalysisResponse>, AppError> {
    let profile = resolve_professional(&state.questions, &answers)?;
    Ok(Json(professional_analysis(profile)))
}

#[derive(Serialize)]
pub struct GroupInfo {
    pub group: &'static str,
    pub english_name: &'static str,
    pub description: GroupDescription,
}

#[derive(Serialize)]
pub struct GroupListResponse {
    pub groups: Vec<GroupInfo>,
}

/// GET /api/v1/groups
pub async fn handle_groups() -> Json<GroupListResponse> {
    let groups = PersonalityGroup::ALL
        .iter()
        .map(|group| GroupInfo {
            group: group.label(),
            english_name: group.english_name(),
            description: describe_group(*group, false),
        })
        .collect();
    Json(GroupListResponse { groups })
}
