//! Authentication module: registration, login, and the bearer-token
//! middleware guarding authenticated routes.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
