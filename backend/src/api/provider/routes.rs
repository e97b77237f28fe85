//! HTTP routes for service providers.

use crate::api::provider::handlers::*;
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

/// Creates the provider router, nested under `/api/prestadores`.
pub fn provider_router() -> Router {
    Router::new()
        .route("/", get(list_providers))
        .route(
            "/",
            post(create_provider).layer(middleware::from_fn(jwt_auth)),
        )
        .route(
            "/{id}",
            put(update_provider).layer(middleware::from_fn(jwt_auth)),
        )
        .route("/{id}/avaliacoes", get(list_provider_reviews))
}
