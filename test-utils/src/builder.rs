use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Department, Project};
///
/// let test = TestBuilder::new()
///     .with_table(Department)
///     .with_table(Project)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared on the entity's relations.
    /// Tables should be added in dependency order (tables with foreign keys after
    /// their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables for principals and their capabilities.
    ///
    /// Adds `User` and `UserPermission` in dependency order.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(UserPermission)
    }

    /// Adds all tables of the company resource graph.
    ///
    /// Adds, in dependency order:
    /// - Department
    /// - Project
    /// - Employee
    /// - EmployeeProject
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_company_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_company_tables(self) -> Self {
        self.with_table(Department)
            .with_table(Project)
            .with_table(Employee)
            .with_table(EmployeeProject)
    }

    /// Adds every table used by the application.
    ///
    /// Equivalent to `with_auth_tables()` followed by `with_company_tables()`.
    pub fn with_all_tables(self) -> Self {
        self.with_auth_tables().with_company_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
