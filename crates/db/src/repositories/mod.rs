//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod nps_repo;
pub mod widget_repo;

pub use nps_repo::NpsRepo;
pub use widget_repo::WidgetRepo;
