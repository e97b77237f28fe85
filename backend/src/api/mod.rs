//! Central module for organizing the application's API endpoints.
//!
//! Marketplace endpoints live here; core authentication routes are handled
//! separately under `auth`.

pub mod common;
pub mod provider;
pub mod review;
