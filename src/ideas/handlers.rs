use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::{ApiError, ApiResult},
    state::AppState,
};

use super::dto::{CreateIdeaRequest, CreateIdeaResponse, IdeaResponse};
use super::services::{create_idea, find_idea};
use super::validation::validate;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/ideas/", get(missing_id))
        .route("/ideas/:id", get(get_idea))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/ideas/create", post(create))
}

/// POST /ideas/create
#[instrument(skip(state, payload), fields(user_id = %auth.user_id))]
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateIdeaRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateIdeaResponse>)> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    let listing = validate(payload)?;

    let idea = create_idea(
        state.ideas.as_ref(),
        state.rater.as_ref(),
        auth.user_id,
        listing,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateIdeaResponse {
            success: true,
            idea: idea.into(),
        }),
    ))
}

/// GET /ideas/:id
#[instrument(skip(state))]
pub async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<IdeaResponse>> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::validation("Idea ID is required"));
    }
    // Malformed ids cannot name a stored idea.
    let id = Uuid::parse_str(id).map_err(|_| ApiError::NotFound("Idea not found".into()))?;

    let idea = find_idea(state.ideas.as_ref(), id).await?;
    Ok(Json(IdeaResponse { idea: idea.into() }))
}

async fn missing_id() -> ApiError {
    ApiError::validation("Idea ID is required")
}
