//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert rows
//! directly through SeaORM and bypass the service layer, so they can set up states the
//! API would refuse (for example a user already attached to a project).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let manager = factory::user::UserFactory::new(&db)
//!     .role(UserRole::ProjectManager)
//!     .build()
//!     .await?;
//! let project = factory::create_project(&db, manager.id).await?;
//! let sprint = factory::create_sprint(&db, project.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `project` - Create project entities
//! - `sprint` - Create sprint entities
//! - `task` - Create task entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod project;
pub mod sprint;
pub mod task;
pub mod user;

pub use project::create_project;
pub use sprint::create_sprint;
pub use task::create_task;
pub use user::{create_manager, create_user};
