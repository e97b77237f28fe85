//! Service provider listing, registration, and profile endpoints.

pub mod handlers;
pub mod routes;
