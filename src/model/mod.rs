//! Data transfer objects shared by the HTTP layer.
//!
//! These types define the JSON request and response bodies and the query strings
//! accepted by the API. Server-side domain models convert into and out of them at
//! the controller boundary.

pub mod api;
pub mod project;
pub mod sprint;
pub mod task;
pub mod user;

fn default_entries() -> u64 {
    10
}
