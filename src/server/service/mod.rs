//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Authorization**: Requiring the principal's capability before any store access for a write
//! - **Reference checks**: Failing a write whose relation references do not exist, before
//!   anything is written
//! - **Write ordering**: Scalar fields first in one call, then associative relations
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services take configuration such as pagination limits through their constructors.

pub mod department;
pub mod employee;
pub mod project;
pub mod reference;

#[cfg(test)]
mod test;
