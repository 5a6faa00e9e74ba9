pub mod membership;
pub mod summary;
