//! Module for core business logic services.
//!
//! These services validate input, orchestrate repository calls, and map
//! storage failures into the shared error taxonomy. Authentication logic
//! lives in `auth::service`.

pub mod provider_service;
pub mod review_service;
