//! Route definitions for widgets and their NPS responses.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{nps, widget};
use crate::state::AppState;

/// Routes mounted at `/widgets`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// GET    /{id}                 -> get_by_id
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// POST   /{id}/nps             -> nps::create
/// GET    /{id}/nps/{nps_id}    -> nps::get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(widget::list).post(widget::create))
        .route(
            "/{id}",
            get(widget::get_by_id)
                .put(widget::update)
                .delete(widget::delete),
        )
        .route("/{id}/nps", post(nps::create))
        .route("/{id}/nps/{nps_id}", get(nps::get_by_id))
}
