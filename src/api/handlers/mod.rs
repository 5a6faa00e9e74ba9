pub mod meta;
pub mod user;
pub mod group;
pub mod member;
pub mod contribution;
pub mod meeting;
pub mod poll;
