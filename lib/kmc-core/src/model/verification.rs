use std::fmt;

use strum::{Display, EnumString};
use time::OffsetDateTime;

/// Fixed filler closing every record sent to the gateway.
pub const EXTEND_VAR: &str = "0000000000000000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest {
    pub cp_id: String,
    pub url_code: String,
    pub cert_num: String,
    pub date: String,
    pub cert_method: Option<String>,
    pub plus_info: Option<String>,
}

/// Callback fields as received from the gateway, absent values included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationCallback {
    pub api_token: Option<String>,
    pub cert_num: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingVerification {
    pub cert_num: String,
    pub created_date: OffsetDateTime,
    pub expiration_date: OffsetDateTime,
    pub plus_info: Option<String>,
    pub consumed_date: Option<OffsetDateTime>,
}

impl PendingVerification {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expiration_date
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsumeOutcome {
    Consumed(PendingVerification),
    NotFound,
    AlreadyConsumed,
    Expired,
}

/// Hexadecimal ciphertext sent to the gateway as `tr_cert`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CipherToken(String);

impl CipherToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for CipherToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CipherToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity attributes decrypted from the gateway's `rec_cert`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    pub cert_num: String,
    pub date: String,
    pub ci: String,
    pub phone_no: String,
    pub phone_corp: String,
    pub birth_day: String,
    pub gender: String,
    pub nation: String,
    pub name: String,
    pub result: String,
    pub cert_method: String,
    pub ip: String,
    pub reserved: [String; 4],
    pub plus_info: String,
    pub di: String,
}

impl VerificationResult {
    pub fn is_verified(&self) -> bool {
        self.result == "Y"
    }
}

/// Result code returned by the gateway's token API alongside `rec_cert`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum GatewayResultCode {
    #[strum(serialize = "APR01")]
    Success,
    #[strum(serialize = "APR02")]
    TokenExpired,
    #[strum(serialize = "APR03")]
    TokenMissing,
    #[strum(serialize = "APR04")]
    InvalidRequestDate,
    #[strum(serialize = "APR05")]
    InvalidTokenLength,
    #[strum(serialize = "APR06")]
    RetryLimitExceeded,
}

impl GatewayResultCode {
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::TokenExpired => "Token expired (30 minutes)",
            Self::TokenMissing => "Token not found",
            Self::InvalidRequestDate => "Invalid request date length",
            Self::InvalidTokenLength => "Invalid token length",
            Self::RetryLimitExceeded => "Retry limit exceeded (3 attempts)",
        }
    }
}
