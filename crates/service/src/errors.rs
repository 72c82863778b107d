use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("employee not found with id {0}")]
    NotFound(i32),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 1003,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Db(e.to_string())
    }
}
