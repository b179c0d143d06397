//! SeaORM entities for the taskboard schema.
//!
//! Every table carries a nullable `deleted_at` tombstone; rows with a value set
//! are considered deleted and are excluded by the repository layer.

pub mod prelude;

pub mod project;
pub mod sprint;
pub mod task;
pub mod user;
