use kmc_crypto::CryptoError;
use strum::{AsRefStr, Display};
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::provider::signer::error::SignerError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),
    #[error("Config validation error `{0}`")]
    ConfigValidationError(#[from] ConfigValidationError),
    #[error("Signer error `{0}`")]
    SignerError(#[from] SignerError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] DataLayerError),
}

/// Rejections of gateway input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing field `{0}`")]
    MissingField(&'static str),
    #[error("No pending verification for certNum `{0}`")]
    UnknownCertNum(String),
    #[error("certNum `{0}` was already used")]
    CertNumAlreadyUsed(String),
    #[error("Verification for certNum `{0}` expired")]
    VerificationExpired(String),
    #[error("Result integrity check failed")]
    IntegrityCheckFailed,
    #[error("Malformed verification result: {0}")]
    MalformedResult(String),
    #[error("Gateway rejected the token: {code} ({message})")]
    GatewayRejected { code: String, message: String },
    #[error("Identity not verified, result `{0}`")]
    IdentityNotVerified(String),
    #[error("No accepted callback for certNum `{0}`")]
    CallbackNotValidated(String),
    #[error("Result belongs to certNum `{actual}`, expected `{expected}`")]
    CertNumMismatch { expected: String, actual: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    KMC_0000,
    KMC_0001,
    KMC_0002,
    KMC_0003,
    KMC_0004,
    KMC_0005,
    KMC_0006,
    KMC_0007,
    KMC_0008,
    KMC_0009,
    KMC_0010,
    KMC_0011,
    KMC_0012,
    KMC_0013,
    KMC_0014,
    KMC_0015,
    KMC_0016,
    KMC_0017,
    KMC_0018,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::KMC_0000 => "Unmapped error code",
            ErrorCode::KMC_0001 => "Configuration error",
            ErrorCode::KMC_0002 => "Missing request field",
            ErrorCode::KMC_0003 => "Invalid request field",
            ErrorCode::KMC_0004 => "Text not representable in EUC-KR",
            ErrorCode::KMC_0005 => "Malformed ciphertext",
            ErrorCode::KMC_0006 => "Missing callback field",
            ErrorCode::KMC_0007 => "Unknown certNum",
            ErrorCode::KMC_0008 => "certNum already used",
            ErrorCode::KMC_0009 => "Pending verification already exists",
            ErrorCode::KMC_0010 => "Verification expired",
            ErrorCode::KMC_0011 => "Result integrity check failed",
            ErrorCode::KMC_0012 => "Malformed verification result",
            ErrorCode::KMC_0013 => "Gateway rejected the token",
            ErrorCode::KMC_0014 => "Identity not verified",
            ErrorCode::KMC_0015 => "Response mapping error",
            ErrorCode::KMC_0016 => "General input validation error",
            ErrorCode::KMC_0017 => "Callback not validated",
            ErrorCode::KMC_0018 => "Result certNum mismatch",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::ConfigValidationError(_) => ErrorCode::KMC_0001,
            ServiceError::SignerError(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::KMC_0015,
        }
    }
}

impl SignerError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SignerError::MissingField(_) => ErrorCode::KMC_0002,
            SignerError::DelimiterInField(_) | SignerError::InvalidField { .. } => {
                ErrorCode::KMC_0003
            }
            SignerError::Encoding(_) | SignerError::Crypto(CryptoError::Encoding(_)) => {
                ErrorCode::KMC_0004
            }
            SignerError::Crypto(
                CryptoError::InvalidKeyLength(_) | CryptoError::InvalidIvLength(_),
            ) => ErrorCode::KMC_0001,
            SignerError::Crypto(CryptoError::UnalignedData(_) | CryptoError::InvalidHex(_)) => {
                ErrorCode::KMC_0005
            }
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField(_) => ErrorCode::KMC_0006,
            ValidationError::UnknownCertNum(_) => ErrorCode::KMC_0007,
            ValidationError::CertNumAlreadyUsed(_) => ErrorCode::KMC_0008,
            ValidationError::VerificationExpired(_) => ErrorCode::KMC_0010,
            ValidationError::IntegrityCheckFailed => ErrorCode::KMC_0011,
            ValidationError::MalformedResult(_) => ErrorCode::KMC_0012,
            ValidationError::GatewayRejected { .. } => ErrorCode::KMC_0013,
            ValidationError::IdentityNotVerified(_) => ErrorCode::KMC_0014,
            ValidationError::CallbackNotValidated(_) => ErrorCode::KMC_0017,
            ValidationError::CertNumMismatch { .. } => ErrorCode::KMC_0018,
        }
    }
}
