//! HTTP routes for reviews.

use crate::api::review::handlers::*;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::post};

/// Creates the review router, nested under `/api/avaliacoes`.
pub fn review_router() -> Router {
    Router::new().route(
        "/",
        post(submit_review).layer(middleware::from_fn(jwt_auth)),
    )
}
