//! Handler functions for review API endpoints.

use crate::api::common::{ApiError, service_error_to_http};
use crate::database::models::{Avaliacao, NovaAvaliacao};
use crate::services::review_service::ReviewService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::PgPool;

/// Submit a review for a provider as the authenticated user.
#[axum::debug_handler]
pub async fn submit_review(
    Extension(pool): Extension<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<NovaAvaliacao>,
) -> Result<(StatusCode, ResponseJson<Avaliacao>), ApiError> {
    let service = ReviewService::new(&pool);

    match service.submit(claims.sub, payload).await {
        Ok(review) => Ok((StatusCode::CREATED, ResponseJson(review))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
