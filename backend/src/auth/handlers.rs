//! Handler functions for authentication API endpoints.
//!
//! These parse incoming registration and login requests and delegate to
//! `auth::service` for the actual credential handling.

use crate::api::common::{ApiError, service_error_to_http};
use crate::auth::models::{LoginRequest, LoginResponse, RegisterRequest, UsuarioPublico};
use crate::auth::service::AuthService;
use crate::config::Config;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::PgPool;

/// Handle user registration request
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<PgPool>,
    Extension(config): Extension<Config>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, ResponseJson<UsuarioPublico>), ApiError> {
    let auth_service = AuthService::new(&pool, &config);

    match auth_service.register(payload).await {
        Ok(user) => Ok((StatusCode::CREATED, ResponseJson(user))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<PgPool>,
    Extension(config): Extension<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<LoginResponse>, ApiError> {
    let auth_service = AuthService::new(&pool, &config);

    match auth_service.login(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}
