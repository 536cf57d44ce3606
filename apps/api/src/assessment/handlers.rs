//! Axum route handlers for the Assessment API.
//!
//! Handlers only translate between JSON and the pure core in this module.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::assessment::answers::{unknown_question_ids, AnswerSet};
use crate::assessment::evaluator::evaluate;
use crate::assessment::models::{CareerArchetype, CareerMatch, Profile, Roadmap};
use crate::assessment::roadmap::build_roadmap_for;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub assessment_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub profile: Profile,
    pub matches: Vec<CareerMatch>,
    pub roadmap: Option<Roadmap>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/assessments/evaluate
///
/// Scores a completed questionnaire and returns the top matches plus a
/// roadmap for the best one.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let unknown = unknown_question_ids(&request.answers);
    if !unknown.is_empty() {
        return Err(AppError::Validation(format!(
            "unknown question ids: {}",
            unknown.join(", ")
        )));
    }

    let report = evaluate(&request.answers, &state.catalog);
    let assessment_id = Uuid::new_v4();
    info!(
        %assessment_id,
        matches = report.matches.len(),
        "Assessment completed"
    );

    Ok(Json(EvaluateResponse {
        assessment_id,
        generated_at: Utc::now(),
        profile: report.profile,
        matches: report.matches,
        roadmap: report.roadmap,
    }))
}

/// GET /api/v1/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Vec<CareerArchetype>> {
    Json(state.catalog.all().to_vec())
}

/// GET /api/v1/careers/:title/roadmap
pub async fn handle_career_roadmap(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Roadmap>, AppError> {
    let archetype = state
        .catalog
        .find(&title)
        .ok_or_else(|| AppError::NotFound(format!("Career '{title}' not found")))?;

    Ok(Json(build_roadmap_for(archetype)))
}
