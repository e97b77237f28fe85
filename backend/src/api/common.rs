//! Error handling utilities for API responses.
//!
//! Converts service-layer errors into HTTP status codes plus a JSON error
//! body. Storage and internal failures are logged server-side and surface
//! as an opaque 500; authentication failures stay deliberately generic.

use crate::errors::ServiceError;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

/// Maps a `ServiceError` to its HTTP representation.
pub fn service_error_to_http(error: ServiceError) -> ApiError {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "Credenciais inválidas".to_string(),
        ),
        ServiceError::PermissionDenied { message } => (StatusCode::FORBIDDEN, message),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            format!("{entity} '{identifier}' não encontrado"),
        ),
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::CONFLICT,
            format!("{entity} '{identifier}' já cadastrado"),
        ),
        ServiceError::Database { source } => {
            tracing::error!(error = %source, "database failure");
            (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno".to_string())
        }
        ServiceError::Internal { message } => {
            tracing::error!(error = %message, "internal failure");
            (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno".to_string())
        }
    };

    (status, Json(ErrorBody { error: message }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let (status, body) = service_error_to_http(ServiceError::validation("nome é obrigatório"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "nome é obrigatório");
    }

    #[test]
    fn invalid_credentials_map_to_generic_401() {
        // Unknown user and wrong password share this variant; the body must
        // not reveal which factor failed.
        let (status, body) = service_error_to_http(ServiceError::InvalidCredentials);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Credenciais inválidas");
    }

    #[test]
    fn duplicate_email_maps_to_409() {
        let (status, _) =
            service_error_to_http(ServiceError::already_exists("Usuário", "ana@x.com"));
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn storage_failures_are_opaque_500s() {
        let (status, body) = service_error_to_http(ServiceError::Database {
            source: sqlx::Error::PoolClosed,
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Erro interno");
    }

    #[test]
    fn not_found_and_permission_denied() {
        let (status, _) = service_error_to_http(ServiceError::not_found("Prestador", "9"));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = service_error_to_http(ServiceError::permission_denied("não é o dono"));
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
