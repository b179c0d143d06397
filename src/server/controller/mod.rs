pub mod auth;
pub mod project;
pub mod sprint;
pub mod task;
pub mod user;
