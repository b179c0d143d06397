//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Authorization**: Resolving the owning project of an entity and checking its manager
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling multi-step writes atomically

pub mod authorization;
pub mod password;
pub mod project;
pub mod sprint;
pub mod task;
pub mod token;
pub mod user;
pub mod validation;

#[cfg(test)]
mod test;
