use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request input the service cannot interpret, e.g. a non-numeric id.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
    #[error("Pizza service unavailable: {0}")]
    Upstream(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(entity.to_string()) }

    /// Message suitable for a response body: validation failures without their prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Model(models::errors::ModelError::Validation(msg)) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
