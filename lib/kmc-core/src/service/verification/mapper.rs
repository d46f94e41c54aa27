use kmc_crypto::utilities::generate_numeric;
use time::macros::{format_description, offset};
use time::{OffsetDateTime, UtcOffset};

use crate::model::verification::VerificationResult;
use crate::provider::signer::error::SignerError;
use crate::provider::signer::record::DELIMITER;
use crate::service::error::{ServiceError, ValidationError};

/// The gateway reads request dates as Korea Standard Time.
const GATEWAY_OFFSET: UtcOffset = offset!(+9);

const CERT_NUM_RANDOM_DIGITS: usize = 6;

const RESULT_FIELDS: usize = 18;

pub(super) fn format_gateway_date(now: OffsetDateTime) -> Result<String, ServiceError> {
    now.to_offset(GATEWAY_OFFSET)
        .format(format_description!(
            "[year][month][day][hour][minute][second]"
        ))
        .map_err(|err| ServiceError::MappingError(err.to_string()))
}

/// Request date followed by six random digits.
pub(super) fn generate_cert_num(date: &str) -> String {
    format!("{date}{}", generate_numeric(CERT_NUM_RANDOM_DIGITS))
}

/// Splits the decrypted result record into its 18 positional fields.
/// CI and DI arrive encrypted once more and are opened with `decrypt`.
pub(super) fn parse_verification_result(
    record: &str,
    decrypt: impl Fn(&str) -> Result<String, SignerError>,
) -> Result<VerificationResult, ValidationError> {
    let fields: Vec<&str> = record.split(DELIMITER).collect();
    if fields.len() < RESULT_FIELDS {
        return Err(ValidationError::MalformedResult(format!(
            "expected {RESULT_FIELDS} fields, got {}",
            fields.len()
        )));
    }

    let open = |value: &str, name: &str| -> Result<String, ValidationError> {
        if value.is_empty() {
            return Ok(String::new());
        }
        decrypt(value).map_err(|err| {
            ValidationError::MalformedResult(format!("cannot decrypt {name}: {err}"))
        })
    };

    let field = |index: usize| fields[index].to_owned();

    Ok(VerificationResult {
        cert_num: field(0),
        date: field(1),
        ci: open(fields[2], "CI")?,
        phone_no: field(3),
        phone_corp: field(4),
        birth_day: field(5),
        gender: field(6),
        nation: field(7),
        name: field(8),
        result: field(9),
        cert_method: field(10),
        ip: field(11),
        reserved: [field(12), field(13), field(14), field(15)],
        plus_info: field(16),
        di: open(fields[17], "DI")?,
    })
}
