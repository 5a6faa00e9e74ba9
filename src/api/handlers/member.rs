use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::AddMemberRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::membership::ensure_member;
use crate::domain::services::summary::member_views;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn add_member(
    State(state): State<Arc<AppState>>,
    AuthUser(requester): AuthUser,
    Path(group_id): Path<i64>,
    Json(payload): Json<AddMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let group = state
        .group_repo
        .find_by_id(group_id)
        .await?
        .ok_or(AppError::NotFound("Group not found".into()))?;

    let target = state
        .user_repo
        .find_by_id(payload.user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if !state.group_repo.is_member(group.id, requester.id).await? {
        return Err(AppError::Forbidden("You are not a member of this group".into()));
    }

    if state.group_repo.is_member(group.id, target.id).await? {
        return Err(AppError::Conflict("User is already a member of this group".into()));
    }

    let member = state.group_repo.add_member(group.id, target.id).await?;

    info!("User {} added user {} to group {}", requester.id, target.id, group.id);

    Ok(Json(member))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let group = ensure_member(state.group_repo.as_ref(), group_id, user.id).await?;

    let members = state.group_repo.list_members(group_id).await?;
    Ok(Json(member_views(&group, members)))
}

pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    AuthUser(requester): AuthUser,
    Path((group_id, user_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let group = state
        .group_repo
        .find_by_id(group_id)
        .await?
        .ok_or(AppError::NotFound("Group not found".into()))?;

    if !state.group_repo.is_member(group_id, user_id).await? {
        return Err(AppError::NotFound("User is not a member of this group".into()));
    }

    if requester.id != group.created_by && requester.id != user_id {
        return Err(AppError::Forbidden("Only the group creator can remove other members".into()));
    }

    if user_id == group.created_by {
        return Err(AppError::InvalidOperation("The group creator cannot be removed".into()));
    }

    state.group_repo.remove_member(group_id, user_id).await?;

    info!("User {} removed user {} from group {}", requester.id, user_id, group_id);

    Ok(Json(serde_json::json!({ "status": "removed" })))
}
