//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let department = factory::create_department(&db).await?;
//!     let project = factory::create_project(&db, department.id).await?;
//!
//!     let employee = factory::employee::EmployeeFactory::new(&db)
//!         .department_id(Some(department.id))
//!         .project_ids([project.id])
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `department` - Create department entities
//! - `project` - Create project entities (requires a department)
//! - `employee` - Create employee entities and their project links
//! - `user` - Create principals and their capability grants
//! - `helpers` - ID generation and multi-entity helpers

pub mod department;
pub mod employee;
pub mod helpers;
pub mod project;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use department::create_department;
pub use employee::create_employee;
pub use project::create_project;
pub use user::create_user;
