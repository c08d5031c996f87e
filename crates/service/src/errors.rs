use models::errors::ModelError;
use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    /// 所有存储层失败（包括经由 models 返回的）都落到这里。
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl ServiceError {
    /// `ServiceError::not_found("Item")` displays as `Item not found`.
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn is_not_found(&self) -> bool { matches!(self, ServiceError::NotFound(_)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Db(db) => ServiceError::Db(db),
        }
    }
}

impl From<TransactionError<ServiceError>> for ServiceError {
    fn from(e: TransactionError<ServiceError>) -> Self {
        match e {
            TransactionError::Connection(db) => ServiceError::Db(db),
            TransactionError::Transaction(inner) => inner,
        }
    }
}
