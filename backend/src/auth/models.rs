//! Data structures for authentication requests and responses.
//!
//! Request fields are optional at the serde level so a missing field maps to
//! a 400 validation error instead of a body-decode rejection. Presence is
//! the only rule enforced here; there is no format or strength validation.

use serde::{Deserialize, Serialize};

use crate::database::models::required;
use crate::errors::ServiceResult;

/// Registration request payload
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub telefone: Option<String>,
}

/// Registration payload with all required fields present.
#[derive(Debug)]
pub struct ValidRegistration {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub telefone: Option<String>,
}

impl RegisterRequest {
    pub fn validated(self) -> ServiceResult<ValidRegistration> {
        Ok(ValidRegistration {
            nome: required(self.nome, "nome")?,
            email: required(self.email, "email")?,
            senha: required(self.senha, "senha")?,
            telefone: self.telefone,
        })
    }
}

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug)]
pub struct ValidLogin {
    pub email: String,
    pub senha: String,
}

impl LoginRequest {
    pub fn validated(self) -> ServiceResult<ValidLogin> {
        Ok(ValidLogin {
            email: required(self.email, "email")?,
            senha: required(self.senha, "senha")?,
        })
    }
}

/// The public subset of a user record. The password hash never leaves the
/// service layer.
#[derive(Debug, Serialize)]
pub struct UsuarioPublico {
    pub id: i64,
    pub nome: String,
    pub email: String,
}

/// Login response: the signed token plus the public user record.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UsuarioPublico,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;

    #[test]
    fn registration_requires_all_three_fields() {
        for (nome, email, senha) in [
            (None, Some("a@x.com"), Some("s")),
            (Some("Ana"), None, Some("s")),
            (Some("Ana"), Some("a@x.com"), None),
        ] {
            let request = RegisterRequest {
                nome: nome.map(String::from),
                email: email.map(String::from),
                senha: senha.map(String::from),
                telefone: None,
            };
            assert!(matches!(
                request.validated(),
                Err(ServiceError::Validation { .. })
            ));
        }
    }

    #[test]
    fn registration_accepts_optional_phone() {
        let request = RegisterRequest {
            nome: Some("Ana".to_string()),
            email: Some("ana@x.com".to_string()),
            senha: Some("s3nha123".to_string()),
            telefone: None,
        };
        let valid = request.validated().unwrap();
        assert_eq!(valid.nome, "Ana");
        assert!(valid.telefone.is_none());
    }

    #[test]
    fn login_requires_email_and_password() {
        let request = LoginRequest {
            email: Some("ana@x.com".to_string()),
            senha: None,
        };
        assert!(request.validated().is_err());

        let request = LoginRequest {
            email: None,
            senha: Some("s3nha123".to_string()),
        };
        assert!(request.validated().is_err());
    }
}
