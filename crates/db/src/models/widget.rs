//! Widget entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackco_core::types::{DbId, Timestamp};

use crate::models::nps::Nps;

/// A row from the `widgets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Widget {
    pub id: DbId,
    pub title: String,
    pub link: String,
    pub question: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A widget together with all of its NPS responses.
///
/// Serializes as the widget's own fields plus an `nps` array.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetWithNps {
    #[serde(flatten)]
    pub widget: Widget,
    pub nps: Vec<Nps>,
}

impl WidgetWithNps {
    pub fn new(widget: Widget, nps: Vec<Nps>) -> Self {
        Self { widget, nps }
    }
}

/// DTO for creating a new widget. Color is not accepted; new widgets always
/// start with the default color.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWidget {
    pub title: String,
    pub link: String,
    pub question: String,
}

/// DTO for updating an existing widget.
///
/// All fields optional. Absent and empty-string fields leave the stored
/// value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWidget {
    pub title: Option<String>,
    pub link: Option<String>,
    pub question: Option<String>,
    pub color: Option<String>,
}
