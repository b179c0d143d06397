//! Taskboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the taskboard
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting entities with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for users, projects, sprints and tasks
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_sprint() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_all_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (manager, project) = factory::helpers::create_project_with_manager(db).await?;
//!     // Perform service operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
