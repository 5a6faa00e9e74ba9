pub mod user;
pub mod group;
pub mod meeting;
pub mod contribution;
pub mod poll;
