//! Token signer: turns verification requests into `tr_cert` and opens the
//! gateway's encrypted responses.

use std::sync::Arc;

use kmc_crypto::hash::kmc_hash_hex;
use kmc_crypto::padding::unpad;
use kmc_crypto::{BlockPadding, RecordEncoder, SeedCbc, codec};

use self::error::SignerError;
use self::record::{DELIMITER, assemble_record};
use crate::config::core_config::TokenEnvelopeType;
use crate::model::verification::{CipherToken, EXTEND_VAR, VerificationRequest};

pub mod error;
pub mod record;


#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TokenSigner: Send + Sync {
    fn sign(&self, request: &VerificationRequest) -> Result<CipherToken, SignerError>;

    /// Decrypts a hex token produced by the gateway into text.
    fn decrypt(&self, ciphertext: &str) -> Result<String, SignerError>;
}

#[derive(Debug, Default, Clone)]
pub struct SignerOptions {
    pub padding: BlockPadding,
    pub envelope: TokenEnvelopeType,
    pub header_prefix: Option<String>,
}

pub struct KmcTokenSigner {
    cipher: SeedCbc,
    encoder: Arc<dyn RecordEncoder>,
    options: SignerOptions,
}

impl KmcTokenSigner {
    pub fn new(
        key: &[u8],
        iv: &[u8],
        encoder: Arc<dyn RecordEncoder>,
        options: SignerOptions,
    ) -> Result<Self, SignerError> {
        Ok(Self {
            cipher: SeedCbc::new(key, iv)?,
            encoder,
            options,
        })
    }

    fn encrypt_text(&self, text: &str) -> Result<String, SignerError> {
        let encoded = self.encoder.encode(text)?;
        let ciphertext = self.cipher.encrypt_padded(&encoded, self.options.padding);
        let hex = codec::encode_upper(&ciphertext);

        Ok(match &self.options.header_prefix {
            Some(prefix) => format!("{prefix}{hex}"),
            None => hex,
        })
    }
}

impl TokenSigner for KmcTokenSigner {
    fn sign(&self, request: &VerificationRequest) -> Result<CipherToken, SignerError> {
        let record = assemble_record(request)?;
        let record_token = self.encrypt_text(&record)?;

        let token = match self.options.envelope {
            TokenEnvelopeType::Plain => record_token,
            TokenEnvelopeType::Integrity => {
                let digest = kmc_hash_hex(record_token.as_bytes());
                self.encrypt_text(&format!(
                    "{record_token}{DELIMITER}{digest}{DELIMITER}{EXTEND_VAR}"
                ))?
            }
        };

        Ok(token.into())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, SignerError> {
        let ciphertext = ciphertext.trim();
        let hex = self
            .options
            .header_prefix
            .as_deref()
            .and_then(|prefix| ciphertext.strip_prefix(prefix))
            .unwrap_or(ciphertext);

        let plaintext = self.cipher.decrypt(&codec::decode(hex)?)?;
        let text = self.encoder.decode(unpad(&plaintext))?;

        Ok(text.trim().to_owned())
    }
}
