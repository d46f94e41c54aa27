//! Cryptographic building blocks of the KMC identity-verification gateway.
//!
//! The gateway expects records encoded in EUC-KR, encrypted with the SEED
//! block cipher in CBC mode and rendered as uppercase hexadecimal.

use thiserror::Error;

pub mod codec;
pub mod encoding;
pub mod hash;
pub mod padding;
pub mod seed;
pub mod seed_cbc;
pub mod utilities;

pub use encoding::{EncodingError, EucKrEncoder, RecordEncoder};
pub use padding::BlockPadding;
pub use seed::Seed;
pub use seed_cbc::SeedCbc;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key length: expected 16 bytes, got {0}")]
    InvalidKeyLength(usize),
    #[error("Invalid IV length: expected 16 bytes, got {0}")]
    InvalidIvLength(usize),
    #[error("Data length {0} is not a multiple of the block size")]
    UnalignedData(usize),
    #[error("Invalid hex input: `{0}`")]
    InvalidHex(String),
    #[error("Encoding error: `{0}`")]
    Encoding(#[from] EncodingError),
}
