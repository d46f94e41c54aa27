use std::collections::HashMap;

use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;

use crate::model::verification::{ConsumeOutcome, PendingVerification};
use crate::repository::error::DataLayerError;
use crate::repository::pending_verification_repository::PendingVerificationRepository;


/// How long a consumed entry outlives its expiration before it is purged.
pub const CONSUMED_RETENTION: Duration = Duration::hours(24);

/// Pending verifications keyed by certNum.
///
/// Consumed entries stay behind for [`CONSUMED_RETENTION`] past expiration so
/// that a replayed certNum is reported as such instead of as unknown.
#[derive(Debug, Default)]
pub struct InMemoryPendingVerificationRepository {
    entries: Mutex<HashMap<String, PendingVerification>>,
}

#[async_trait::async_trait]
impl PendingVerificationRepository for InMemoryPendingVerificationRepository {
    async fn create_pending_verification(
        &self,
        request: PendingVerification,
    ) -> Result<(), DataLayerError> {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(&request.cert_num) {
            return Err(DataLayerError::AlreadyExists);
        }
        entries.insert(request.cert_num.clone(), request);
        Ok(())
    }

    async fn get_pending_verification(
        &self,
        cert_num: &str,
    ) -> Result<Option<PendingVerification>, DataLayerError> {
        Ok(self.entries.lock().await.get(cert_num).cloned())
    }

    async fn consume_pending_verification(
        &self,
        cert_num: &str,
        now: OffsetDateTime,
    ) -> Result<ConsumeOutcome, DataLayerError> {
        let mut entries = self.entries.lock().await;
        let Some(entry) = entries.get_mut(cert_num) else {
            return Ok(ConsumeOutcome::NotFound);
        };

        if entry.consumed_date.is_some() {
            return Ok(ConsumeOutcome::AlreadyConsumed);
        }
        if entry.is_expired(now) {
            return Ok(ConsumeOutcome::Expired);
        }

        entry.consumed_date = Some(now);
        Ok(ConsumeOutcome::Consumed(entry.clone()))
    }

    async fn delete_expired_pending_verifications(
        &self,
        now: OffsetDateTime,
    ) -> Result<usize, DataLayerError> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| match entry.consumed_date {
            Some(_) => now < entry.expiration_date + CONSUMED_RETENTION,
            None => !entry.is_expired(now),
        });
        Ok(before - entries.len())
    }
}
