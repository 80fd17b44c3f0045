pub mod health;
pub mod widget;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /widgets                                list, create
/// /widgets/{id}                           get, update, delete
/// /widgets/{id}/nps                       create NPS record
/// /widgets/{id}/nps/{nps_id}              get NPS record
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/widgets", widget::router())
}
