//! KMC identity-verification request signing and callback validation.

use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use config::validator::{derive_key_material, validate_core_config};
use kmc_crypto::EucKrEncoder;
use provider::signer::{KmcTokenSigner, SignerOptions};
use repository::pending_verification_repository::PendingVerificationRepository;
use secrecy::ExposeSecret;
use service::verification::VerificationService;

pub mod config;
pub mod data_layer;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct KmcCore {
    pub verification_service: VerificationService,
    pub config: Arc<CoreConfig>,
}

impl KmcCore {
    pub fn new(
        config: CoreConfig,
        pending_verification_repository: Arc<dyn PendingVerificationRepository>,
    ) -> Result<Self, ConfigValidationError> {
        validate_core_config(&config)?;

        let key = derive_key_material(&config.secret_key, "secretKey")?;
        let iv = derive_key_material(&config.iv, "iv")?;

        let signer = KmcTokenSigner::new(
            key.expose_secret(),
            iv.expose_secret(),
            Arc::new(EucKrEncoder),
            SignerOptions {
                padding: config.padding.into(),
                envelope: config.envelope,
                header_prefix: config.header_prefix.to_owned(),
            },
        )
        .map_err(|err| ConfigValidationError::InvalidValue {
            field: "secretKey",
            reason: err.to_string(),
        })?;

        let config = Arc::new(config);

        Ok(Self {
            verification_service: VerificationService::new(
                Arc::new(signer),
                pending_verification_repository,
                config.to_owned(),
            ),
            config,
        })
    }
}
