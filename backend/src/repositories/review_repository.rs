//! Database repository for provider reviews.
//!
//! Submitting a review also moves the provider's running average. Both writes
//! happen in one transaction with the provider row locked, so concurrent
//! submissions cannot lose an update.

use crate::database::models::{Avaliacao, AvaliacaoComCliente, AvaliacaoValidada};
use sqlx::PgPool;

pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a review and folds its rating into the provider's average.
    ///
    /// Returns `Ok(None)` when the provider does not exist.
    pub async fn add_review(
        &self,
        usuario_id: i64,
        review: AvaliacaoValidada,
    ) -> Result<Option<Avaliacao>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let provider: Option<(f64, i64)> = sqlx::query_as(
            "SELECT nota_media, total_avaliacoes FROM prestadores WHERE id = $1 FOR UPDATE",
        )
        .bind(review.prestador_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((nota_media, total_avaliacoes)) = provider else {
            return Ok(None);
        };

        let created = sqlx::query_as::<_, Avaliacao>(
            r#"
            INSERT INTO avaliacoes (prestador_id, usuario_id, nota, comentario)
            VALUES ($1, $2, $3, $4)
            RETURNING id, prestador_id, usuario_id, nota, comentario, created_at
            "#,
        )
        .bind(review.prestador_id)
        .bind(usuario_id)
        .bind(review.nota)
        .bind(&review.comentario)
        .fetch_one(&mut *tx)
        .await?;

        let (nova_media, novo_total) = next_average(nota_media, total_avaliacoes, review.nota);

        sqlx::query("UPDATE prestadores SET nota_media = $1, total_avaliacoes = $2 WHERE id = $3")
            .bind(nova_media)
            .bind(novo_total)
            .bind(review.prestador_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(created))
    }

    /// Reviews for one provider, newest first, with the reviewer's name.
    pub async fn list_for_provider(
        &self,
        prestador_id: i64,
    ) -> Result<Vec<AvaliacaoComCliente>, sqlx::Error> {
        sqlx::query_as::<_, AvaliacaoComCliente>(
            r#"
            SELECT a.id, a.prestador_id, a.nota, a.comentario,
                   u.nome AS cliente_nome, a.created_at
            FROM avaliacoes a
            JOIN usuarios u ON u.id = a.usuario_id
            WHERE a.prestador_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(prestador_id)
        .fetch_all(self.pool)
        .await
    }
}

/// Folds one new rating into a running average.
fn next_average(media: f64, total: i64, nota: i32) -> (f64, i64) {
    let novo_total = total + 1;
    let nova_media = (media * total as f64 + f64::from(nota)) / novo_total as f64;
    (nova_media, novo_total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_review_sets_the_average() {
        let (media, total) = next_average(0.0, 0, 4);
        assert_eq!(media, 4.0);
        assert_eq!(total, 1);
    }

    #[test]
    fn average_is_the_mean_of_all_ratings() {
        let (media, total) = next_average(0.0, 0, 5);
        let (media, total) = next_average(media, total, 3);
        let (media, total) = next_average(media, total, 4);
        assert_eq!(total, 3);
        assert!((media - 4.0).abs() < 1e-9);
    }

    #[test]
    fn average_stays_within_rating_bounds() {
        let mut media = 0.0;
        let mut total = 0;
        for nota in [1, 5, 5, 5, 2, 3] {
            (media, total) = next_average(media, total, nota);
            assert!((1.0..=5.0).contains(&media));
        }
        assert_eq!(total, 6);
        assert!((media - 21.0 / 6.0).abs() < 1e-9);
    }
}
