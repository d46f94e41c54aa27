use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::signer::TokenSigner;
use crate::repository::pending_verification_repository::PendingVerificationRepository;

pub mod dto;
pub mod mapper;
pub mod service;
pub mod validator;

#[derive(Clone)]
pub struct VerificationService {
    signer: Arc<dyn TokenSigner>,
    pending_verification_repository: Arc<dyn PendingVerificationRepository>,
    config: Arc<CoreConfig>,
}

impl VerificationService {
    pub(crate) fn new(
        signer: Arc<dyn TokenSigner>,
        pending_verification_repository: Arc<dyn PendingVerificationRepository>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            signer,
            pending_verification_repository,
            config,
        }
    }
}
