//! Domain primitives shared by the database and API crates.
//!
//! Nothing in here performs I/O: it holds the id/timestamp aliases, the
//! domain error type, and the widget rules that both layers agree on.

pub mod error;
pub mod types;
pub mod widget;
