use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::ScheduleMeetingRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::membership::ensure_member;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn schedule_meeting(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
    Json(payload): Json<ScheduleMeetingRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_member(state.group_repo.as_ref(), group_id, user.id).await?;

    let meeting = state
        .group_repo
        .create_meeting(group_id, &payload.topic, payload.meeting_datetime)
        .await?;

    info!("User {} scheduled meeting {} in group {}", user.id, meeting.id, group_id);

    Ok(Json(meeting))
}

pub async fn list_meetings(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ensure_member(state.group_repo.as_ref(), group_id, user.id).await?;

    let meetings = state.group_repo.list_meetings(group_id).await?;
    Ok(Json(meetings))
}
