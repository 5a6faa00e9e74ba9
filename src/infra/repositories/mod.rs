pub mod sqlite_user_repo;
pub mod sqlite_group_repo;
pub mod sqlite_poll_repo;
pub mod postgres_user_repo;
pub mod postgres_group_repo;
pub mod postgres_poll_repo;
