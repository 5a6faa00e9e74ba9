use crate::domain::models::group::Group;
use crate::domain::ports::GroupRepository;
use crate::error::AppError;

/// The membership authorization guard: every group-scoped operation goes
/// through here instead of re-deriving the lookup per route.
///
/// Fails `NotFound` if the group does not exist, `Forbidden` if the user has
/// no membership row, and returns the group otherwise.
pub async fn ensure_member(
    repo: &dyn GroupRepository,
    group_id: i64,
    user_id: i64,
) -> Result<Group, AppError> {
    let group = repo
        .find_by_id(group_id)
        .await?
        .ok_or(AppError::NotFound("Group not found".into()))?;

    if !repo.is_member(group_id, user_id).await? {
        return Err(AppError::Forbidden("You are not a member of this group".into()));
    }

    Ok(group)
}
