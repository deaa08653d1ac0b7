//! Wire-level request and response types shared by the HTTP layer.

pub mod api;
pub mod department;
pub mod employee;
pub mod patch;
pub mod project;
