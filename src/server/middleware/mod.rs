//! Request middleware.
//!
//! - `auth` - bearer credential authentication, attaching the resolved `Principal` to
//!   every request under `/api`

pub mod auth;

#[cfg(test)]
mod test;
