use sea_orm::{DbErr, EntityTrait};
use thiserror::Error;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }
}

/// Converts a validated creation payload into the row to insert.
///
/// Every column is assigned explicitly; nothing is copied over from
/// untyped request data.
pub trait ToActiveModel<E>
where
    E: EntityTrait,
{
    fn into_active_model(self) -> E::ActiveModel;
}
