use axum::{extract::State, Extension, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Explanation, Movie, RecommendRequest},
    routes::AppState,
    services::filter_candidates,
};

/// Most candidates returned in a single response
pub const MAX_RETURNED_MOVIES: usize = 5;

pub const NO_CANDIDATES_MESSAGE: &str = "No candidates found";

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub movies: Vec<Movie>,
    pub ai: Vec<Explanation>,
}

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<Value>,
) -> AppResult<Json<RecommendResponse>> {
    let prefs = RecommendRequest::from_body(body)?.into_preferences()?;

    tracing::info!(
        request_id = %request_id,
        mood = %prefs.mood,
        genres = ?prefs.genres,
        max_duration = ?prefs.max_duration,
        "Processing recommendation request"
    );

    let catalog = state.catalog.fetch().await?;
    let mut candidates = filter_candidates(catalog, &prefs);

    if candidates.is_empty() {
        tracing::info!(request_id = %request_id, "No candidates matched preferences");
        return Err(AppError::NotFound(NO_CANDIDATES_MESSAGE.to_string()));
    }

    let ai = state.explainer.generate(&candidates, &prefs).await?;

    tracing::info!(
        request_id = %request_id,
        candidate_count = candidates.len(),
        mode = state.explainer.mode_name(),
        "Recommendation completed"
    );

    candidates.truncate(MAX_RETURNED_MOVIES);

    Ok(Json(RecommendResponse {
        movies: candidates,
        ai,
    }))
}
