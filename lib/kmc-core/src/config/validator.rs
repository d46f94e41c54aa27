use secrecy::{ExposeSecret, SecretSlice, SecretString};
use url::Url;

use super::ConfigValidationError;
use super::core_config::CoreConfig;

pub const KEY_MATERIAL_LENGTH: usize = 16;

/// Startup checks, every failure here is fatal.
pub fn validate_core_config(config: &CoreConfig) -> Result<(), ConfigValidationError> {
    validate_not_blank(&config.cp_id, "cpId")?;
    validate_not_blank(&config.url_code, "urlCode")?;
    if !is_digits(&config.url_code, 6) {
        return Err(ConfigValidationError::InvalidValue {
            field: "urlCode",
            reason: "expected 6 digits".to_string(),
        });
    }

    derive_key_material(&config.secret_key, "secretKey")?;
    derive_key_material(&config.iv, "iv")?;

    validate_url(&config.callback_url, "callbackUrl")?;
    validate_url(&config.auth_url, "authUrl")?;

    if !config.session_lifetime.is_positive() {
        return Err(ConfigValidationError::InvalidValue {
            field: "sessionLifetime",
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}

/// Takes the first 16 bytes of the UTF-8 form of a configured secret.
pub fn derive_key_material(
    secret: &SecretString,
    field: &'static str,
) -> Result<SecretSlice<u8>, ConfigValidationError> {
    let bytes = secret.expose_secret().as_bytes();
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ConfigValidationError::MissingField(field));
    }
    if bytes.len() < KEY_MATERIAL_LENGTH {
        return Err(ConfigValidationError::KeyMaterialTooShort {
            field,
            length: bytes.len(),
        });
    }

    Ok(bytes[..KEY_MATERIAL_LENGTH].to_vec().into())
}

fn validate_not_blank(value: &str, field: &'static str) -> Result<(), ConfigValidationError> {
    if value.trim().is_empty() {
        return Err(ConfigValidationError::MissingField(field));
    }
    Ok(())
}

fn validate_url(value: &str, field: &'static str) -> Result<(), ConfigValidationError> {
    validate_not_blank(value, field)?;
    Url::parse(value).map_err(|err| ConfigValidationError::InvalidValue {
        field,
        reason: err.to_string(),
    })?;
    Ok(())
}

pub(crate) fn is_digits(value: &str, length: usize) -> bool {
    value.len() == length && value.bytes().all(|b| b.is_ascii_digit())
}
