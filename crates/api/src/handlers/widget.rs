//! Handlers for the `/widgets` resource.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use trackco_core::error::CoreError;
use trackco_core::types::DbId;
use trackco_db::models::widget::{CreateWidget, UpdateWidget, WidgetWithNps};
use trackco_db::repositories::{NpsRepo, WidgetRepo};

use crate::error::{AppResult, StoreContext};
use crate::extract::{JsonBody, PathParam};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /widgets
///
/// List every widget with its NPS responses.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WidgetWithNps>>> {
    tracing::info!("Getting all widgets with corresponding NPS records");
    let widgets = WidgetRepo::list_with_nps(&state.pool)
        .await
        .during(|| "fetching widgets with NPS records".into())?;
    Ok(Json(widgets))
}

/// GET /widgets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<WidgetWithNps>> {
    tracing::info!(widget_id = id, "Getting widget with corresponding NPS records");
    let widget = WidgetRepo::find_with_nps(&state.pool, id)
        .await
        .during(|| format!("fetching widget with ID {id} with NPS records"))?
        .ok_or(CoreError::widget_not_found(id))?;
    Ok(Json(widget))
}

/// POST /widgets
///
/// New widgets always get the default color; any `color` in the body is ignored.
/// Responds with a `Location` header pointing at the created widget.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateWidget>,
) -> AppResult<impl IntoResponse> {
    tracing::info!("Creating a new widget");
    let widget = WidgetRepo::create(&state.pool, &input)
        .await
        .during(|| "creating a new widget".into())?;

    tracing::info!(widget_id = widget.id, "Widget created");
    let location = format!("/widgets/{}", widget.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(WidgetWithNps::new(widget, Vec::new())),
    ))
}

/// PUT /widgets/{id}
///
/// Partial update: only fields that are present and non-empty overwrite the
/// stored values.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateWidget>,
) -> AppResult<Json<WidgetWithNps>> {
    tracing::info!(widget_id = id, "Updating widget");
    let operation = || format!("updating widget with ID {id}");

    let widget = WidgetRepo::update(&state.pool, id, &input)
        .await
        .during(operation)?
        .ok_or(CoreError::widget_not_found(id))?;
    let nps = NpsRepo::list_by_widget(&state.pool, id)
        .await
        .during(operation)?;

    Ok(Json(WidgetWithNps::new(widget, nps)))
}

/// DELETE /widgets/{id}
///
/// Removes the widget together with its NPS responses.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    tracing::info!(widget_id = id, "Deleting widget");
    let deleted = WidgetRepo::delete(&state.pool, id)
        .await
        .during(|| format!("deleting widget with ID {id}"))?;

    if !deleted {
        return Err(CoreError::widget_not_found(id).into());
    }
    Ok(Json(MessageResponse::new("Widget deleted successfully")))
}
