use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateGroupRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::group::Group;
use crate::domain::ports::GroupRepository;
use crate::domain::services::membership::ensure_member;
use crate::domain::services::summary::{summarize, GroupSummary};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

async fn load_summary(repo: &dyn GroupRepository, group: &Group) -> Result<GroupSummary, AppError> {
    let members = repo.list_members(group.id).await?;
    let contributions = repo.list_contributions(group.id).await?;
    Ok(summarize(group, members, contributions))
}

pub async fn create_group(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.group_repo.find_by_name(&payload.name).await?.is_some() {
        return Err(AppError::Conflict("Group name already taken".into()));
    }

    let group = state
        .group_repo
        .create_with_creator(&payload.name, &payload.description, user.id)
        .await?;

    info!("User {} created group {}", user.id, group.id);

    let summary = load_summary(state.group_repo.as_ref(), &group).await?;
    Ok(Json(summary))
}

pub async fn list_my_groups(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let groups = state.group_repo.list_for_user(user.id).await?;

    let mut summaries = Vec::with_capacity(groups.len());
    for group in &groups {
        summaries.push(load_summary(state.group_repo.as_ref(), group).await?);
    }

    Ok(Json(summaries))
}

pub async fn get_group(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let group = ensure_member(state.group_repo.as_ref(), group_id, user.id).await?;

    let summary = load_summary(state.group_repo.as_ref(), &group).await?;
    Ok(Json(summary))
}

pub async fn delete_group(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(group_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let group = state
        .group_repo
        .find_by_id(group_id)
        .await?
        .ok_or(AppError::NotFound("Group not found".into()))?;

    if group.created_by != user.id {
        return Err(AppError::Forbidden("Only the group creator can delete the group".into()));
    }

    state.group_repo.delete(group_id).await?;

    info!("User {} deleted group {}", user.id, group_id);

    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
