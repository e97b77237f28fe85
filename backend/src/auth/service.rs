//! Core business logic for the authentication system.

use crate::auth::models::{
    LoginRequest, LoginResponse, RegisterRequest, UsuarioPublico, ValidRegistration,
};
use crate::config::Config;
use crate::database::models::NovoUsuario;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::{hash_password, verify_password};
use sqlx::PgPool;

/// Authentication service for registration and login.
pub struct AuthService<'a> {
    pool: &'a PgPool,
    jwt_utils: JwtUtils,
}

impl<'a> AuthService<'a> {
    pub fn new(pool: &'a PgPool, config: &Config) -> Self {
        AuthService {
            pool,
            jwt_utils: JwtUtils::new(config),
        }
    }

    /// Registers a new user: hash the password, insert the row, return the
    /// public subset of the created record.
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UsuarioPublico> {
        let ValidRegistration {
            nome,
            email,
            senha,
            telefone,
        } = request.validated()?;

        let senha_hash = hash_password(&senha)?;

        let repo = UserRepository::new(self.pool);
        let user = repo
            .create_user(NovoUsuario {
                nome,
                email: email.clone(),
                senha_hash,
                telefone,
            })
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e {
                    if db.is_unique_violation() {
                        return ServiceError::already_exists("Usuário", email.as_str());
                    }
                }
                e.into()
            })?;

        tracing::info!(user_id = user.id, "user registered");

        Ok(UsuarioPublico {
            id: user.id,
            nome: user.nome,
            email: user.email,
        })
    }

    /// Authenticates a user and issues a signed token.
    ///
    /// Unknown email and wrong password both collapse into the same
    /// `InvalidCredentials` error so the caller cannot probe which emails
    /// are registered. Login never writes.
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let login = request.validated()?;

        let repo = UserRepository::new(self.pool);
        let user = repo
            .find_by_email(&login.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !verify_password(&login.senha, &user.senha_hash)? {
            return Err(ServiceError::InvalidCredentials);
        }

        let token = self.jwt_utils.generate_token(user.id, &user.email)?;

        tracing::info!(user_id = user.id, "user logged in");

        Ok(LoginResponse {
            token,
            user: UsuarioPublico {
                id: user.id,
                nome: user.nome,
                email: user.email,
            },
        })
    }
}
