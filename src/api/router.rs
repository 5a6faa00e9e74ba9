use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{contribution, group, meeting, member, meta, poll, user};
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(meta::service_metadata))

        // Users
        .route("/register/", post(user::register))
        .route("/get_current_user/", get(user::get_current_user))
        .route("/users/search", get(user::search_users))

        // Groups
        .route("/groups/", post(group::create_group).get(group::list_my_groups))
        .route("/groups/{id}", get(group::get_group))
        .route("/groups/{id}/", delete(group::delete_group))

        // Membership
        .route("/groups/{id}/members/", post(member::add_member).get(member::list_members))
        .route("/groups/{id}/members/{user_id}/", delete(member::remove_member))
        .route("/groups/{id}/available-users", get(user::list_available_users))

        // Finances & meetings
        .route("/groups/{id}/contributions/", post(contribution::record_contribution).get(contribution::list_contributions))
        .route("/groups/{id}/meetings/", post(meeting::schedule_meeting).get(meeting::list_meetings))

        // Polls
        .route("/polls/", post(poll::create_poll))
        .route("/polls/{id}/votes", post(poll::cast_vote))
        .route("/polls/{id}/results", get(poll::poll_results))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
