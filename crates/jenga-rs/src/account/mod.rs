//! Account information endpoints.

pub mod endpoints;
pub mod models;
