//! HTTP routes for authentication.

use crate::auth::handlers::*;
use axum::{Router, routing::post};

/// Creates the authentication router. Nested under `/api` by the entry
/// point, yielding `POST /api/usuarios` and `POST /api/login`.
pub fn auth_router() -> Router {
    Router::new()
        .route("/usuarios", post(register))
        .route("/login", post(login))
}
