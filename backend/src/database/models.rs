//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database, plus the request DTOs that create or update those rows.
//! Wire field names stay in Portuguese, matching the public API contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::errors::{ServiceError, ServiceResult};

/// A registered user. `senha_hash` only ever holds bcrypt output; the
/// plaintext secret is never persisted and never serialized in a response.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha_hash: String,
    pub telefone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert DTO for `usuarios`. Built by the auth service after hashing.
#[derive(Debug, Clone)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub senha_hash: String,
    pub telefone: Option<String>,
}

/// A service provider listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Prestador {
    pub id: i64,
    pub usuario_id: i64,
    pub nome: String,
    pub servico: String,
    pub categoria: String,
    pub descricao: Option<String>,
    pub cidade: String,
    pub telefone: Option<String>,
    pub preco: Option<String>,
    pub nota_media: f64,
    pub total_avaliacoes: i64,
    pub disponivel: bool,
    pub destaque: bool,
    pub created_at: DateTime<Utc>,
}

/// Provider registration payload. Fields are optional at the serde level so
/// a missing field surfaces as a 400 validation error, not a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CadastroPrestador {
    pub nome: Option<String>,
    pub servico: Option<String>,
    pub categoria: Option<String>,
    pub descricao: Option<String>,
    pub cidade: Option<String>,
    pub telefone: Option<String>,
    pub preco: Option<String>,
}

/// Validated provider registration, ready for insertion.
#[derive(Debug, Clone)]
pub struct PrestadorValidado {
    pub nome: String,
    pub servico: String,
    pub categoria: String,
    pub descricao: Option<String>,
    pub cidade: String,
    pub telefone: Option<String>,
    pub preco: Option<String>,
}

impl CadastroPrestador {
    pub fn validated(self) -> ServiceResult<PrestadorValidado> {
        Ok(PrestadorValidado {
            nome: required(self.nome, "nome")?,
            servico: required(self.servico, "servico")?,
            categoria: required(self.categoria, "categoria")?,
            descricao: self.descricao,
            cidade: required(self.cidade, "cidade")?,
            telefone: self.telefone,
            preco: self.preco,
        })
    }
}

/// Profile update payload: the two fields the provider profile page edits.
#[derive(Debug, Clone, Deserialize)]
pub struct AtualizaPrestador {
    pub descricao: Option<String>,
    pub preco: Option<String>,
}

/// A review left by a user for a provider.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Avaliacao {
    pub id: i64,
    pub prestador_id: i64,
    pub usuario_id: i64,
    pub nota: i32,
    pub comentario: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Review row joined with the reviewer's display name for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AvaliacaoComCliente {
    pub id: i64,
    pub prestador_id: i64,
    pub nota: i32,
    pub comentario: Option<String>,
    pub cliente_nome: String,
    pub created_at: DateTime<Utc>,
}

/// Review submission payload. The rating select in the UI offers 1-5 only;
/// the same bounds are enforced here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NovaAvaliacao {
    pub prestador_id: Option<i64>,
    #[validate(range(min = 1, max = 5, message = "nota deve estar entre 1 e 5"))]
    pub nota: Option<i32>,
    pub comentario: Option<String>,
}

/// Validated review submission.
#[derive(Debug, Clone)]
pub struct AvaliacaoValidada {
    pub prestador_id: i64,
    pub nota: i32,
    pub comentario: Option<String>,
}

impl NovaAvaliacao {
    pub fn validated(self) -> ServiceResult<AvaliacaoValidada> {
        if let Err(errors) = self.validate() {
            return Err(ServiceError::validation(flatten_errors(&errors)));
        }

        let prestador_id = self
            .prestador_id
            .ok_or_else(|| ServiceError::validation("prestador_id é obrigatório"))?;
        let nota = self
            .nota
            .ok_or_else(|| ServiceError::validation("nota é obrigatória"))?;

        Ok(AvaliacaoValidada {
            prestador_id,
            nota,
            comentario: self.comentario,
        })
    }
}

/// Presence check shared by the request DTOs: a field counts as missing when
/// absent or blank.
pub fn required(value: Option<String>, field: &str) -> ServiceResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServiceError::validation(format!("{field} é obrigatório"))),
    }
}

pub fn flatten_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error.message.as_ref().unwrap_or(&"Invalid value".into())
                )
            })
        })
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_missing_and_blank() {
        assert!(required(None, "nome").is_err());
        assert!(required(Some("   ".to_string()), "nome").is_err());
        assert_eq!(required(Some("Ana".to_string()), "nome").unwrap(), "Ana");
    }

    #[test]
    fn review_rating_out_of_bounds_is_validation_error() {
        let review = NovaAvaliacao {
            prestador_id: Some(1),
            nota: Some(6),
            comentario: None,
        };
        assert!(matches!(
            review.validated(),
            Err(ServiceError::Validation { .. })
        ));

        let review = NovaAvaliacao {
            prestador_id: Some(1),
            nota: Some(0),
            comentario: None,
        };
        assert!(review.validated().is_err());
    }

    #[test]
    fn review_requires_provider_and_rating() {
        let review = NovaAvaliacao {
            prestador_id: None,
            nota: Some(5),
            comentario: None,
        };
        assert!(review.validated().is_err());

        let review = NovaAvaliacao {
            prestador_id: Some(1),
            nota: None,
            comentario: Some("ótimo serviço".to_string()),
        };
        assert!(review.validated().is_err());
    }

    #[test]
    fn valid_review_passes() {
        let review = NovaAvaliacao {
            prestador_id: Some(7),
            nota: Some(4),
            comentario: Some("bom atendimento".to_string()),
        };
        let valid = review.validated().unwrap();
        assert_eq!(valid.prestador_id, 7);
        assert_eq!(valid.nota, 4);
    }
}
