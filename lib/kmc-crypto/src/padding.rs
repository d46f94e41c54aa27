use crate::seed::BLOCK_SIZE;

/// How a record is extended to the SEED block boundary before encryption.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BlockPadding {
    /// Zero bytes up to the next block boundary, aligned input is left as is.
    /// This is the framing the gateway currently accepts.
    #[default]
    Zero,
    /// Bytes carrying the pad length up to the next block boundary, aligned
    /// input is left as is like with zero padding.
    Pkcs7,
}

impl BlockPadding {
    pub fn padded_len(self, len: usize) -> usize {
        len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
    }

    /// Extends `data` to [`Self::padded_len`].
    pub fn pad(self, data: &[u8]) -> Vec<u8> {
        let padded_len = self.padded_len(data.len());
        let fill = match self {
            Self::Zero => 0,
            // at most BLOCK_SIZE - 1
            Self::Pkcs7 => (padded_len - data.len()) as u8,
        };

        let mut padded = Vec::with_capacity(padded_len);
        padded.extend_from_slice(data);
        padded.resize(padded_len, fill);
        padded
    }
}

/// Removes block padding from decrypted data.
///
/// Gateway responses are not consistent about their framing, so a valid
/// PKCS#7 trailer is removed when present and trailing zero bytes otherwise.
pub fn unpad(data: &[u8]) -> &[u8] {
    if let Some(&last) = data.last() {
        let pad_len = last as usize;
        if (1..=BLOCK_SIZE).contains(&pad_len)
            && pad_len <= data.len()
            && data[data.len() - pad_len..].iter().all(|byte| *byte == last)
        {
            return &data[..data.len() - pad_len];
        }
    }

    let end = data
        .iter()
        .rposition(|byte| *byte != 0)
        .map_or(0, |position| position + 1);
    &data[..end]
}
