use time::OffsetDateTime;

use super::error::DataLayerError;
use crate::model::verification::{ConsumeOutcome, PendingVerification};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PendingVerificationRepository: Send + Sync {
    async fn create_pending_verification(
        &self,
        request: PendingVerification,
    ) -> Result<(), DataLayerError>;

    async fn get_pending_verification(
        &self,
        cert_num: &str,
    ) -> Result<Option<PendingVerification>, DataLayerError>;

    /// Checks and invalidates `cert_num` in one step, at most one caller
    /// ever observes `Consumed` for a given certNum.
    async fn consume_pending_verification(
        &self,
        cert_num: &str,
        now: OffsetDateTime,
    ) -> Result<ConsumeOutcome, DataLayerError>;

    async fn delete_expired_pending_verifications(
        &self,
        now: OffsetDateTime,
    ) -> Result<usize, DataLayerError>;
}
