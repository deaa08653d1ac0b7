//! HTTP request handlers.
//!
//! Handlers extract the authenticated `Principal`, convert DTOs to parameters, call the
//! matching service and render domain models through their output schema.

pub mod department;
pub mod employee;
pub mod project;

#[cfg(test)]
mod test;
