//! Handlers for NPS responses, nested under widgets:
//! `/widgets/{widget_id}/nps[/{nps_id}]`.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use trackco_core::error::CoreError;
use trackco_core::types::DbId;
use trackco_db::models::nps::{CreateNps, Nps};
use trackco_db::repositories::{NpsRepo, WidgetRepo};

use crate::error::{AppResult, StoreContext};
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

/// POST /widgets/{widget_id}/nps
///
/// Returns 404 when the widget does not exist, including when it is removed
/// between the existence check and the insert.
pub async fn create(
    State(state): State<AppState>,
    PathParam(widget_id): PathParam<DbId>,
    JsonBody(input): JsonBody<CreateNps>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(widget_id, "Creating a new NPS record");
    let operation = || format!("creating a new NPS for widget ID {widget_id}");

    let exists = WidgetRepo::exists(&state.pool, widget_id)
        .await
        .during(operation)?;
    if !exists {
        return Err(CoreError::widget_not_found(widget_id).into());
    }

    let nps = match NpsRepo::create(&state.pool, widget_id, &input).await {
        Err(sqlx::Error::Database(err)) if err.is_foreign_key_violation() => {
            return Err(CoreError::widget_not_found(widget_id).into());
        }
        other => other.during(operation)?,
    };

    tracing::info!(widget_id, nps_id = nps.id, "NPS record created");
    let location = format!("/widgets/{widget_id}/nps/{}", nps.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(nps)))
}

/// GET /widgets/{widget_id}/nps/{nps_id}
///
/// The record must belong to the widget in the path.
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam((widget_id, nps_id)): PathParam<(DbId, DbId)>,
) -> AppResult<Json<Nps>> {
    tracing::info!(widget_id, nps_id, "Getting NPS record");
    let nps = NpsRepo::find_for_widget(&state.pool, widget_id, nps_id)
        .await
        .during(|| format!("fetching NPS record with ID {nps_id} for widget ID {widget_id}"))?
        .ok_or(CoreError::nps_not_found(nps_id))?;
    Ok(Json(nps))
}
