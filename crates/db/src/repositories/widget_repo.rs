//! Repository for the `widgets` table.

use std::collections::HashMap;

use sqlx::PgPool;
use trackco_core::types::DbId;
use trackco_core::widget::{non_empty, DEFAULT_WIDGET_COLOR};

use crate::models::nps::Nps;
use crate::models::widget::{CreateWidget, UpdateWidget, Widget, WidgetWithNps};
use crate::repositories::NpsRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, link, question, color, created_at, updated_at";

/// Provides CRUD operations for widgets.
pub struct WidgetRepo;

impl WidgetRepo {
    /// Insert a new widget with the default color, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWidget) -> Result<Widget, sqlx::Error> {
        let query = format!(
            "INSERT INTO widgets (title, link, question, color) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(&input.title)
            .bind(&input.link)
            .bind(&input.question)
            .bind(DEFAULT_WIDGET_COLOR)
            .fetch_one(pool)
            .await
    }

    /// Find a widget by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Widget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM widgets WHERE id = $1");
        sqlx::query_as::<_, Widget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a widget by its ID and load its NPS responses.
    pub async fn find_with_nps(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WidgetWithNps>, sqlx::Error> {
        let Some(widget) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let nps = NpsRepo::list_by_widget(pool, id).await?;
        Ok(Some(WidgetWithNps::new(widget, nps)))
    }

    /// Whether a widget with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM widgets WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// List all widgets ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Widget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM widgets ORDER BY id");
        sqlx::query_as::<_, Widget>(&query).fetch_all(pool).await
    }

    /// List all widgets with their NPS responses.
    ///
    /// Issues two queries (widgets, then every child row in one `ANY` lookup)
    /// and groups the children in memory.
    pub async fn list_with_nps(pool: &PgPool) -> Result<Vec<WidgetWithNps>, sqlx::Error> {
        let widgets = Self::list(pool).await?;
        if widgets.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = widgets.iter().map(|w| w.id).collect();
        let mut by_widget: HashMap<DbId, Vec<Nps>> = HashMap::new();
        for nps in NpsRepo::list_by_widgets(pool, &ids).await? {
            by_widget.entry(nps.widget_id).or_default().push(nps);
        }

        Ok(widgets
            .into_iter()
            .map(|widget| {
                let nps = by_widget.remove(&widget.id).unwrap_or_default();
                WidgetWithNps::new(widget, nps)
            })
            .collect())
    }

    /// Update a widget. Only fields that are present and non-empty are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWidget,
    ) -> Result<Option<Widget>, sqlx::Error> {
        let query = format!(
            "UPDATE widgets SET \
                title = COALESCE($2, title), \
                link = COALESCE($3, link), \
                question = COALESCE($4, question), \
                color = COALESCE($5, color) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(id)
            .bind(non_empty(input.title.as_deref()))
            .bind(non_empty(input.link.as_deref()))
            .bind(non_empty(input.question.as_deref()))
            .bind(non_empty(input.color.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a widget. Its NPS responses are removed by `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM widgets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
