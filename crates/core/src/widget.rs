//! Widget domain rules.
//!
//! A widget is a feedback-collection unit (title, link, prompt question and
//! display color) that owns a list of NPS responses.

/// Display color assigned to every newly created widget.
pub const DEFAULT_WIDGET_COLOR: &str = "#e5e7eb";

/// Entity name used in not-found errors for widgets.
pub const WIDGET_ENTITY: &str = "Widget";

/// Entity name used in not-found errors for NPS records.
pub const NPS_ENTITY: &str = "NPS record";

/// Treat an empty string the same as an absent value.
///
/// Partial updates only overwrite a stored field when the caller supplied a
/// non-empty replacement, so `Some("")` collapses to `None`.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
