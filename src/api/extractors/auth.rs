use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::Span;

/// Resolves the `Authorization: Bearer <credential>` header to a registered
/// User via the configured identity verifier. A verified credential that is
/// not bound to a User record still rejects: callers must register first.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Unauthorized)?;

        let credential = header_value.strip_prefix("Bearer ").unwrap_or(header_value).trim();
        if credential.is_empty() {
            return Err(AppError::Unauthorized);
        }

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let external_id = app_state.identity.verify(credential).await?;

        let user = app_state
            .user_repo
            .find_by_external_id(&external_id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("user_id", user.id);

        Ok(AuthUser(user))
    }
}
