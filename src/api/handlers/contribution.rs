use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::RecordContributionRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::contribution::round_amount;
use crate::domain::services::membership::ensure_member;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn record_contribution(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
    Json(payload): Json<RecordContributionRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_member(state.group_repo.as_ref(), group_id, user.id).await?;

    if payload.amount <= 0.0 {
        return Err(AppError::Validation("Contribution amount must be greater than zero".into()));
    }

    // Always attributed to the authenticated caller.
    let amount = round_amount(payload.amount);
    let contribution = state
        .group_repo
        .create_contribution(group_id, user.id, amount)
        .await?;

    info!("User {} contributed {} to group {}", user.id, amount, group_id);

    Ok(Json(contribution))
}

pub async fn list_contributions(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ensure_member(state.group_repo.as_ref(), group_id, user.id).await?;

    let contributions = state.group_repo.list_contributions(group_id).await?;
    Ok(Json(contributions))
}
