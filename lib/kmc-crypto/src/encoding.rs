use encoding_rs::EUC_KR;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Character `{character}` at position {position} has no EUC-KR representation")]
    Unmappable { character: char, position: usize },
    #[error("Bytes are not valid EUC-KR")]
    Malformed,
}

/// Converts record text to the byte form the gateway expects.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait RecordEncoder: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError>;

    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EucKrEncoder;

impl RecordEncoder for EucKrEncoder {
    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        let (bytes, _, had_errors) = EUC_KR.encode(text);
        if had_errors {
            return Err(first_unmappable(text));
        }
        Ok(bytes.into_owned())
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        EUC_KR
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or(EncodingError::Malformed)
    }
}

fn first_unmappable(text: &str) -> EncodingError {
    let mut buffer = [0u8; 4];
    text.chars()
        .enumerate()
        .find(|(_, character)| {
            let (_, _, had_errors) = EUC_KR.encode(character.encode_utf8(&mut buffer));
            had_errors
        })
        .map(|(position, character)| EncodingError::Unmappable {
            character,
            position,
        })
        .unwrap_or(EncodingError::Malformed)
}
