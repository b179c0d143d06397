//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They provide type-safe representations with business logic separated from database
//! and API concerns.

pub mod auth;
pub mod project;
pub mod sprint;
pub mod task;
pub mod user;

/// Computes the page count for a paginated listing.
///
/// # Arguments
/// - `total` - Total number of matching rows
/// - `per_page` - Page size requested by the caller
///
/// # Returns
/// - `u64` - Number of pages, `0` when `per_page` is zero
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
