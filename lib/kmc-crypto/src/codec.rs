use crate::CryptoError;

/// Renders bytes as uppercase hexadecimal, two characters per byte.
pub fn encode_upper(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Parses hexadecimal in either case.
pub fn decode(value: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(value.trim()).map_err(|err| CryptoError::InvalidHex(err.to_string()))
}
