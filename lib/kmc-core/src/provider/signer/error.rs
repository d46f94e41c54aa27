use kmc_crypto::{CryptoError, EncodingError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),
    #[error("Field `{0}` contains the record delimiter")]
    DelimiterInField(&'static str),
    #[error("Invalid field `{field}`: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
    #[error("Crypto error: `{0}`")]
    Crypto(#[from] CryptoError),
    #[error("Encoding error: `{0}`")]
    Encoding(#[from] EncodingError),
}
