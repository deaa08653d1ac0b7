//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Request DTOs are turned into parameter
//! types here (normalising and validating their fields), and entity models are wrapped
//! together with their preloaded relations at the repository boundary.

pub mod department;
pub mod employee;
pub mod principal;
pub mod project;
