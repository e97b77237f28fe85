//! Review submission business logic.

use crate::database::models::{Avaliacao, NovaAvaliacao};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::review_repository::ReviewRepository;
use sqlx::PgPool;

pub struct ReviewService<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Records a review from the authenticated user and updates the
    /// provider's running average rating.
    pub async fn submit(&self, usuario_id: i64, review: NovaAvaliacao) -> ServiceResult<Avaliacao> {
        let review = review.validated()?;
        let prestador_id = review.prestador_id;

        let repo = ReviewRepository::new(self.pool);
        repo.add_review(usuario_id, review)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prestador", prestador_id.to_string()))
    }
}
