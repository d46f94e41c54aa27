use thiserror::Error;

use crate::service::error::ErrorCode;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Already exists")]
    AlreadyExists,
}

impl DataLayerError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::AlreadyExists => ErrorCode::KMC_0009,
        }
    }
}
