//! Review submission endpoint.

pub mod handlers;
pub mod routes;
