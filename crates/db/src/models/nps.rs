//! NPS (Net Promoter Score) response model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackco_core::types::{DbId, Timestamp};

/// A row from the `nps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Nps {
    pub id: DbId,
    pub widget_id: DbId,
    pub answer: String,
    pub rating: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a response. The parent widget comes from the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNps {
    pub answer: String,
    pub rating: i32,
}
