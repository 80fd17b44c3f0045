//! Repository for the `nps` table.

use sqlx::PgPool;
use trackco_core::types::DbId;

use crate::models::nps::{CreateNps, Nps};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, widget_id, answer, rating, created_at, updated_at";

/// Provides CRUD operations for NPS responses.
pub struct NpsRepo;

impl NpsRepo {
    /// Insert a response under `widget_id`, returning the created row.
    ///
    /// Fails with a foreign-key violation if the widget does not exist.
    pub async fn create(
        pool: &PgPool,
        widget_id: DbId,
        input: &CreateNps,
    ) -> Result<Nps, sqlx::Error> {
        let query = format!(
            "INSERT INTO nps (widget_id, answer, rating) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Nps>(&query)
            .bind(widget_id)
            .bind(&input.answer)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a response by ID, scoped to its parent widget.
    pub async fn find_for_widget(
        pool: &PgPool,
        widget_id: DbId,
        id: DbId,
    ) -> Result<Option<Nps>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM nps WHERE widget_id = $1 AND id = $2");
        sqlx::query_as::<_, Nps>(&query)
            .bind(widget_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all responses for a widget, ordered by ID.
    pub async fn list_by_widget(pool: &PgPool, widget_id: DbId) -> Result<Vec<Nps>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM nps WHERE widget_id = $1 ORDER BY id");
        sqlx::query_as::<_, Nps>(&query)
            .bind(widget_id)
            .fetch_all(pool)
            .await
    }

    /// List responses for any of the given widgets, ordered by ID.
    pub async fn list_by_widgets(
        pool: &PgPool,
        widget_ids: &[DbId],
    ) -> Result<Vec<Nps>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM nps WHERE widget_id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Nps>(&query)
            .bind(widget_ids)
            .fetch_all(pool)
            .await
    }
}
