use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{CastVoteRequest, CreatePollRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::poll::PollResults;
use crate::domain::services::membership::ensure_member;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_poll(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreatePollRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_member(state.group_repo.as_ref(), payload.group_id, user.id).await?;

    let poll = state
        .poll_repo
        .create(payload.group_id, &payload.question, user.id)
        .await?;

    info!("User {} created poll {} in group {}", user.id, poll.id, payload.group_id);

    Ok(Json(poll))
}

pub async fn cast_vote(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(poll_id): Path<i64>,
    Json(payload): Json<CastVoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let poll = state
        .poll_repo
        .find_by_id(poll_id)
        .await?
        .ok_or(AppError::NotFound("Poll not found".into()))?;

    // Historical behavior lets any authenticated user vote; the policy flag
    // tightens it to group members.
    if !state.config.open_poll_voting {
        ensure_member(state.group_repo.as_ref(), poll.group_id, user.id).await?;
    }

    if state.poll_repo.find_vote(poll.id, user.id).await?.is_some() {
        return Err(AppError::Conflict("You have already voted on this poll".into()));
    }

    let vote = state.poll_repo.create_vote(poll.id, user.id, payload.choice).await?;

    info!("User {} voted on poll {}", user.id, poll.id);

    Ok(Json(vote))
}

pub async fn poll_results(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(poll_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let poll = state
        .poll_repo
        .find_by_id(poll_id)
        .await?
        .ok_or(AppError::NotFound("Poll not found".into()))?;

    let tally = state.poll_repo.tally(poll.id).await?;
    Ok(Json(PollResults::from_tally(&poll, tally)))
}
