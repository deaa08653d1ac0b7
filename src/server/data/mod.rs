//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models with their relations preloaded, so nothing above this layer has to go
//! back to the database to render a response. All database queries, inserts, updates,
//! and deletes are performed through these repositories.

pub mod department;
pub mod employee;
pub mod project;
pub mod user;

#[cfg(test)]
mod test;
