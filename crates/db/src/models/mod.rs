//! Row models and request DTOs, one module per table.

pub mod nps;
pub mod widget;
