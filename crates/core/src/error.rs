use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

impl CoreError {
    /// Shorthand for a missing widget.
    pub fn widget_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: crate::widget::WIDGET_ENTITY,
            id,
        }
    }

    /// Shorthand for a missing NPS record.
    pub fn nps_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: crate::widget::NPS_ENTITY,
            id,
        }
    }
}
