use thiserror::Error;

pub mod core_config;
pub mod validator;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("Missing required config entry `{0}`")]
    MissingField(&'static str),
    #[error("Config entry `{field}` must be at least 16 bytes long, got {length}")]
    KeyMaterialTooShort { field: &'static str, length: usize },
    #[error("Invalid config entry `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
