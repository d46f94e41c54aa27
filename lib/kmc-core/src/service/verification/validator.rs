use std::str::FromStr;

use kmc_crypto::hash::kmc_hash_hex;

use crate::model::verification::{GatewayResultCode, VerificationCallback};
use crate::service::error::ValidationError;

pub(super) struct CallbackFields {
    pub api_token: String,
    pub cert_num: String,
}

pub(super) fn validate_callback_fields(
    callback: VerificationCallback,
) -> Result<CallbackFields, ValidationError> {
    let cert_num = required(callback.cert_num, "certNum")?;
    let api_token = required(callback.api_token, "apiToken")?;

    Ok(CallbackFields {
        api_token,
        cert_num,
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// An absent code means the caller did not forward one.
pub(super) fn validate_gateway_result_code(code: Option<&str>) -> Result<(), ValidationError> {
    let Some(code) = code.map(str::trim).filter(|code| !code.is_empty()) else {
        return Ok(());
    };

    match GatewayResultCode::from_str(code) {
        Ok(GatewayResultCode::Success) => Ok(()),
        Ok(rejection) => Err(ValidationError::GatewayRejected {
            code: code.to_owned(),
            message: rejection.description().to_owned(),
        }),
        Err(_) => Err(ValidationError::GatewayRejected {
            code: code.to_owned(),
            message: "Unknown result code".to_owned(),
        }),
    }
}

pub(super) fn validate_result_integrity(
    payload: &str,
    digest: &str,
) -> Result<(), ValidationError> {
    if !kmc_hash_hex(payload.as_bytes()).eq_ignore_ascii_case(digest.trim()) {
        return Err(ValidationError::IntegrityCheckFailed);
    }
    Ok(())
}
