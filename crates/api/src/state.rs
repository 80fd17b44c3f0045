/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally. Requests share
/// nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trackco_db::DbPool,
}
