use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, MeResponse, RegisterRequest},
        jwt::{AuthUser, JwtKeys},
        services::{authenticate, create_user, is_valid_email, normalize_email},
    },
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    if payload.name.trim().is_empty() {
        return Err(ApiError::validation("Name is required"));
    }
    if !is_valid_email(&normalize_email(&payload.email)) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::validation("Invalid email"));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::validation("Password too short"));
    }

    let user = create_user(
        state.users.as_ref(),
        &payload.name,
        &payload.email,
        &payload.twitter_url,
        &payload.password,
    )
    .await?;

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    let user = authenticate(state.users.as_ref(), &payload.email, &payload.password)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MeResponse>> {
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(MeResponse { user: user.into() }))
}
