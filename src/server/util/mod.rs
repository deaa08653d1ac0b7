//! Helpers shared by the service and controller layers.

pub mod pagination;
