use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{RegisterUserRequest, SearchParams};
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::membership::ensure_member;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

const SEARCH_RESULT_CAP: i64 = 20;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.user_repo.find_by_external_id(&payload.external_id).await?.is_some() {
        return Err(AppError::Conflict("User already registered".into()));
    }

    // No duplicate-phone pre-check: the unique constraint catches it and the
    // error layer translates the violation to 409.
    let user = state
        .user_repo
        .create(&payload.external_id, &payload.full_name, &payload.phone)
        .await?;

    info!("Registered user {}", user.id);

    Ok(Json(user))
}

pub async fn get_current_user(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(user)
}

pub async fn search_users(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.query.len() < 2 {
        return Err(AppError::Validation("Search query must be at least 2 characters".into()));
    }

    let users = state.user_repo.search(&params.query, SEARCH_RESULT_CAP).await?;
    Ok(Json(users))
}

pub async fn list_available_users(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ensure_member(state.group_repo.as_ref(), group_id, user.id).await?;

    let users = state.user_repo.list_not_in_group(group_id).await?;
    Ok(Json(users))
}
