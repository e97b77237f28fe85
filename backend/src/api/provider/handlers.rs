//! Handler functions for service provider API endpoints.

use crate::api::common::{ApiError, service_error_to_http};
use crate::database::models::{
    AtualizaPrestador, AvaliacaoComCliente, CadastroPrestador, Prestador,
};
use crate::repositories::provider_repository::ProviderFilter;
use crate::services::provider_service::ProviderService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::Json as ResponseJson,
};
use serde::Deserialize;
use sqlx::PgPool;

/// Search parameters accepted by the provider listing.
#[derive(Debug, Deserialize)]
pub struct ProviderQuery {
    pub q: Option<String>,
    pub categoria: Option<String>,
    pub cidade: Option<String>,
    pub destaque: Option<bool>,
}

impl From<ProviderQuery> for ProviderFilter {
    fn from(query: ProviderQuery) -> Self {
        ProviderFilter {
            q: query.q,
            categoria: query.categoria,
            cidade: query.cidade,
            destaque: query.destaque.unwrap_or(false),
        }
    }
}

/// List providers, optionally filtered by text, category, city, or featured.
#[axum::debug_handler]
pub async fn list_providers(
    Extension(pool): Extension<PgPool>,
    Query(query): Query<ProviderQuery>,
) -> Result<ResponseJson<Vec<Prestador>>, ApiError> {
    let service = ProviderService::new(&pool);

    match service.list(query.into()).await {
        Ok(providers) => Ok(ResponseJson(providers)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Register a provider listing owned by the authenticated user.
#[axum::debug_handler]
pub async fn create_provider(
    Extension(pool): Extension<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CadastroPrestador>,
) -> Result<(StatusCode, ResponseJson<Prestador>), ApiError> {
    let service = ProviderService::new(&pool);

    match service.create(claims.sub, payload).await {
        Ok(prestador) => Ok((StatusCode::CREATED, ResponseJson(prestador))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Update a provider's description and price. Owner only.
#[axum::debug_handler]
pub async fn update_provider(
    Extension(pool): Extension<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<AtualizaPrestador>,
) -> Result<ResponseJson<Prestador>, ApiError> {
    let service = ProviderService::new(&pool);

    match service.update_profile(claims.sub, id, payload).await {
        Ok(prestador) => Ok(ResponseJson(prestador)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// List a provider's reviews, newest first.
#[axum::debug_handler]
pub async fn list_provider_reviews(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<Vec<AvaliacaoComCliente>>, ApiError> {
    let service = ProviderService::new(&pool);

    match service.reviews(id).await {
        Ok(reviews) => Ok(ResponseJson(reviews)),
        Err(error) => Err(service_error_to_http(error)),
    }
}
