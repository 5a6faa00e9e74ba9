use std::sync::Arc;
use crate::domain::ports::{GroupRepository, IdentityVerifier, PollRepository, UserRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub group_repo: Arc<dyn GroupRepository>,
    pub poll_repo: Arc<dyn PollRepository>,
    pub identity: Arc<dyn IdentityVerifier>,
}
