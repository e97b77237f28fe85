//! Database repository for user records.
//!
//! Registration inserts here; login only reads. No update or delete path
//! exists for user rows.

use crate::database::models::{NovoUsuario, Usuario};
use sqlx::PgPool;

pub struct UserRepository<'a> {
    /// Shared Postgres connection pool
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user row. A duplicate email surfaces as a database
    /// unique-violation error for the caller to classify.
    pub async fn create_user(&self, user: NovoUsuario) -> Result<Usuario, sqlx::Error> {
        sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nome, email, senha_hash, telefone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, email, senha_hash, telefone, created_at
            "#,
        )
        .bind(user.nome)
        .bind(user.email)
        .bind(user.senha_hash)
        .bind(user.telefone)
        .fetch_one(self.pool)
        .await
    }

    /// Looks up a user by email, the login identifier.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, sqlx::Error> {
        sqlx::query_as::<_, Usuario>(
            r#"
            SELECT id, nome, email, senha_hash, telefone, created_at
            FROM usuarios
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
    }
}
