use time::OffsetDateTime;

use super::VerificationService;
use super::dto::{
    DecryptResultRequestDTO, GatewayFormDTO, RequestVerificationDTO, ValidatedCallbackDTO,
    VerificationRequestResponseDTO, VerificationResultDTO,
};
use super::mapper::{format_gateway_date, generate_cert_num, parse_verification_result};
use super::validator::{
    CallbackFields, validate_callback_fields, validate_gateway_result_code,
    validate_result_integrity,
};
use crate::model::verification::{
    CipherToken, ConsumeOutcome, PendingVerification, VerificationCallback, VerificationRequest,
};
use crate::provider::signer::record::DELIMITER;
use crate::service::error::{ServiceError, ValidationError};

impl VerificationService {
    /// Builds `tr_cert` for a fully specified request.
    ///
    /// Pure and deterministic: equal requests yield equal tokens.
    #[tracing::instrument(level = "debug", skip_all, fields(cert_num = %request.cert_num), err(Debug))]
    pub fn sign_request(&self, request: &VerificationRequest) -> Result<CipherToken, ServiceError> {
        Ok(self.signer.sign(request)?)
    }

    /// Starts a verification: issues a certNum, signs the request and
    /// remembers it until the callback arrives.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn request_verification(
        &self,
        request: RequestVerificationDTO,
    ) -> Result<VerificationRequestResponseDTO, ServiceError> {
        let now = OffsetDateTime::now_utc();
        let date = format_gateway_date(now)?;
        let cert_num = generate_cert_num(&date);

        let verification_request = VerificationRequest {
            cp_id: self.config.cp_id.to_owned(),
            url_code: self.config.url_code.to_owned(),
            cert_num: cert_num.to_owned(),
            date,
            cert_method: request
                .cert_method
                .or_else(|| self.config.cert_method.to_owned()),
            plus_info: request.plus_info.to_owned(),
        };
        let token = self.signer.sign(&verification_request)?;

        self.pending_verification_repository
            .create_pending_verification(PendingVerification {
                cert_num: cert_num.to_owned(),
                created_date: now,
                expiration_date: now + self.config.session_lifetime,
                plus_info: request.plus_info,
                consumed_date: None,
            })
            .await?;

        tracing::info!(%cert_num, "Verification requested");

        Ok(VerificationRequestResponseDTO {
            auth_url: self.config.auth_url.to_owned(),
            cert_num,
            params: GatewayFormDTO {
                tr_cert: token.into_inner(),
                tr_url: self.config.callback_url.to_owned(),
                tr_ver: self.config.tr_ver.to_owned(),
                tr_add: self.config.tr_add.to_owned(),
            },
        })
    }

    /// Accepts a gateway callback once: the certNum must belong to a live
    /// request that has not been answered yet.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn validate_callback(
        &self,
        callback: VerificationCallback,
    ) -> Result<ValidatedCallbackDTO, ServiceError> {
        let CallbackFields {
            api_token,
            cert_num,
        } = validate_callback_fields(callback).inspect_err(|error| {
            tracing::warn!(%error, "Callback rejected");
        })?;

        let outcome = self
            .pending_verification_repository
            .consume_pending_verification(&cert_num, OffsetDateTime::now_utc())
            .await?;

        let pending = match outcome {
            ConsumeOutcome::Consumed(pending) => pending,
            ConsumeOutcome::NotFound => {
                return Err(rejected(ValidationError::UnknownCertNum(cert_num)));
            }
            ConsumeOutcome::AlreadyConsumed => {
                return Err(rejected(ValidationError::CertNumAlreadyUsed(cert_num)));
            }
            ConsumeOutcome::Expired => {
                return Err(rejected(ValidationError::VerificationExpired(cert_num)));
            }
        };

        tracing::info!(%cert_num, "Callback accepted");

        Ok(ValidatedCallbackDTO {
            api_token,
            cert_num,
            plus_info: pending.plus_info,
        })
    }

    /// Opens the gateway's `rec_cert`: `encPara/digest/extendVar`, where the
    /// digest covers `encPara` and `encPara` holds the identity record.
    ///
    /// Only results for a certNum whose callback was accepted and whose
    /// session is still live are returned.
    #[tracing::instrument(level = "debug", skip_all, fields(cert_num = %request.cert_num), err(Debug))]
    pub async fn decrypt_result(
        &self,
        request: DecryptResultRequestDTO,
    ) -> Result<VerificationResultDTO, ServiceError> {
        validate_gateway_result_code(request.result_code.as_deref())?;
        self.validate_result_session(&request.cert_num).await?;

        let envelope = self.signer.decrypt(&request.rec_cert)?;
        let mut parts = envelope.split(DELIMITER);
        let (Some(payload), Some(digest)) = (parts.next(), parts.next()) else {
            return Err(ValidationError::MalformedResult("missing digest".to_owned()).into());
        };
        validate_result_integrity(payload, digest)?;

        let record = self.signer.decrypt(payload)?;
        let result = parse_verification_result(&record, |value| self.signer.decrypt(value))?;

        if result.cert_num != request.cert_num {
            return Err(rejected(ValidationError::CertNumMismatch {
                expected: request.cert_num,
                actual: result.cert_num,
            }));
        }
        if !result.is_verified() {
            return Err(ValidationError::IdentityNotVerified(result.result).into());
        }

        tracing::info!(cert_num = %result.cert_num, "Verification result decrypted");

        Ok(result.into())
    }

    async fn validate_result_session(&self, cert_num: &str) -> Result<(), ServiceError> {
        if cert_num.trim().is_empty() {
            return Err(ValidationError::MissingField("certNum").into());
        }

        let pending = self
            .pending_verification_repository
            .get_pending_verification(cert_num)
            .await?
            .ok_or_else(|| rejected(ValidationError::UnknownCertNum(cert_num.to_owned())))?;

        if pending.consumed_date.is_none() {
            return Err(rejected(ValidationError::CallbackNotValidated(
                cert_num.to_owned(),
            )));
        }
        if pending.is_expired(OffsetDateTime::now_utc()) {
            return Err(rejected(ValidationError::VerificationExpired(
                cert_num.to_owned(),
            )));
        }

        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn purge_expired(&self) -> Result<usize, ServiceError> {
        let deleted = self
            .pending_verification_repository
            .delete_expired_pending_verifications(OffsetDateTime::now_utc())
            .await?;

        if deleted > 0 {
            tracing::debug!(deleted, "Expired pending verifications removed");
        }

        Ok(deleted)
    }
}

fn rejected(error: ValidationError) -> ServiceError {
    tracing::warn!(%error, "Gateway input rejected");
    error.into()
}
