//! Network types and REST API helpers.

pub mod api;
pub mod types;
