//! Translation between wire payloads and domain models.
//!
//! - `input` - request extractors that report decoding failures as `ValidationError` with the
//!   path of the offending field, and text normalisation shared by the parameter types
//! - `output` - response rendering built from direct fields plus a registry of named resolvers
//!
//! The per-resource modules register each domain model's output schema.

pub mod department;
pub mod employee;
pub mod input;
pub mod output;
pub mod project;
