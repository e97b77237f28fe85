//! Database repository for service provider listings.

use crate::database::models::{Prestador, PrestadorValidado};
use sqlx::PgPool;

/// Search filters for the provider listing. All are optional and combine
/// with AND semantics.
#[derive(Debug, Default, Clone)]
pub struct ProviderFilter {
    /// Matches name, service, or description, case-insensitive.
    pub q: Option<String>,
    /// Exact category, case-insensitive.
    pub categoria: Option<String>,
    /// Location substring, case-insensitive.
    pub cidade: Option<String>,
    /// Featured providers only.
    pub destaque: bool,
}

pub struct ProviderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProviderRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        usuario_id: i64,
        prestador: PrestadorValidado,
    ) -> Result<Prestador, sqlx::Error> {
        sqlx::query_as::<_, Prestador>(
            r#"
            INSERT INTO prestadores
                (usuario_id, nome, servico, categoria, descricao, cidade, telefone, preco)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(usuario_id)
        .bind(prestador.nome)
        .bind(prestador.servico)
        .bind(prestador.categoria)
        .bind(prestador.descricao)
        .bind(prestador.cidade)
        .bind(prestador.telefone)
        .bind(prestador.preco)
        .fetch_one(self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Prestador>, sqlx::Error> {
        sqlx::query_as::<_, Prestador>("SELECT * FROM prestadores WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await
    }

    /// Lists providers matching the filter, featured ones first, then best
    /// rated. NULL-checked binds keep the statement fully parameterized
    /// while every filter stays optional.
    pub async fn list(&self, filter: &ProviderFilter) -> Result<Vec<Prestador>, sqlx::Error> {
        sqlx::query_as::<_, Prestador>(
            r#"
            SELECT * FROM prestadores
            WHERE ($1::text IS NULL
                   OR nome ILIKE '%' || $1 || '%'
                   OR servico ILIKE '%' || $1 || '%'
                   OR descricao ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR LOWER(categoria) = LOWER($2))
              AND ($3::text IS NULL OR cidade ILIKE '%' || $3 || '%')
              AND (NOT $4 OR destaque)
            ORDER BY destaque DESC, nota_media DESC, id
            "#,
        )
        .bind(&filter.q)
        .bind(&filter.categoria)
        .bind(&filter.cidade)
        .bind(filter.destaque)
        .fetch_all(self.pool)
        .await
    }

    /// Updates the profile fields a provider may edit: description and price.
    pub async fn update_profile(
        &self,
        id: i64,
        descricao: Option<String>,
        preco: Option<String>,
    ) -> Result<Prestador, sqlx::Error> {
        sqlx::query_as::<_, Prestador>(
            r#"
            UPDATE prestadores
            SET descricao = COALESCE($2, descricao),
                preco = COALESCE($3, preco)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(descricao)
        .bind(preco)
        .fetch_one(self.pool)
        .await
    }
}
