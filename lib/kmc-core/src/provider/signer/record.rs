use super::error::SignerError;
use crate::config::validator::is_digits;
use crate::model::verification::{EXTEND_VAR, VerificationRequest};

pub const DELIMITER: &str = "/";

const RESERVED_FIELDS: usize = 6;

/// Lays out a request as the gateway's positional record:
/// `cpId/urlCode/certNum/date/certMethod/<6 reserved>/plusInfo/extendVar`.
///
/// Absent optional fields leave empty segments, so every delimiter stays in
/// place.
pub fn assemble_record(request: &VerificationRequest) -> Result<String, SignerError> {
    let cp_id = required(&request.cp_id, "cpId")?;
    let url_code = required(&request.url_code, "urlCode")?;
    let cert_num = required(&request.cert_num, "certNum")?;
    let date = required(&request.date, "date")?;

    if !is_digits(url_code, 6) {
        return Err(SignerError::InvalidField {
            field: "urlCode",
            reason: "expected 6 digits",
        });
    }
    if !is_digits(date, 14) {
        return Err(SignerError::InvalidField {
            field: "date",
            reason: "expected YYYYMMDDHHmmss",
        });
    }

    let cert_method = optional(request.cert_method.as_deref(), "certMethod")?;
    let plus_info = optional(request.plus_info.as_deref(), "plusInfo")?;

    let mut fields = Vec::with_capacity(7 + RESERVED_FIELDS);
    fields.extend([cp_id, url_code, cert_num, date, cert_method]);
    fields.extend([""; RESERVED_FIELDS]);
    fields.extend([plus_info, EXTEND_VAR]);

    Ok(fields.join(DELIMITER))
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, SignerError> {
    if value.trim().is_empty() {
        return Err(SignerError::MissingField(field));
    }
    optional(Some(value), field)
}

fn optional<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, SignerError> {
    let value = value.unwrap_or_default();
    if value.contains(DELIMITER) {
        return Err(SignerError::DelimiterInField(field));
    }
    Ok(value)
}
