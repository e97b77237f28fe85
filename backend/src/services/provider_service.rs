//! Service provider business logic.

use crate::database::models::{
    AtualizaPrestador, AvaliacaoComCliente, CadastroPrestador, Prestador,
};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::provider_repository::{ProviderFilter, ProviderRepository};
use crate::repositories::review_repository::ReviewRepository;
use sqlx::PgPool;

pub struct ProviderService<'a> {
    pool: &'a PgPool,
}

impl<'a> ProviderService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Lists providers matching the search filter.
    pub async fn list(&self, filter: ProviderFilter) -> ServiceResult<Vec<Prestador>> {
        let repo = ProviderRepository::new(self.pool);
        Ok(repo.list(&filter).await?)
    }

    /// Registers a provider listing owned by the authenticated user.
    pub async fn create(
        &self,
        usuario_id: i64,
        cadastro: CadastroPrestador,
    ) -> ServiceResult<Prestador> {
        let prestador = cadastro.validated()?;
        let repo = ProviderRepository::new(self.pool);
        Ok(repo.create(usuario_id, prestador).await?)
    }

    /// Updates a provider's description and price. Only the owner may edit.
    pub async fn update_profile(
        &self,
        usuario_id: i64,
        id: i64,
        update: AtualizaPrestador,
    ) -> ServiceResult<Prestador> {
        let repo = ProviderRepository::new(self.pool);

        let prestador = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prestador", id.to_string()))?;

        if prestador.usuario_id != usuario_id {
            return Err(ServiceError::permission_denied(
                "Apenas o dono do perfil pode editá-lo",
            ));
        }

        Ok(repo
            .update_profile(id, update.descricao, update.preco)
            .await?)
    }

    /// Lists a provider's reviews, newest first.
    pub async fn reviews(&self, id: i64) -> ServiceResult<Vec<AvaliacaoComCliente>> {
        let repo = ProviderRepository::new(self.pool);
        if repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Prestador", id.to_string()));
        }

        let reviews = ReviewRepository::new(self.pool);
        Ok(reviews.list_for_provider(id).await?)
    }
}
