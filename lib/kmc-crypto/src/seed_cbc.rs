use cbc::cipher::block_padding::{NoPadding, ZeroPadding};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use secrecy::{ExposeSecret, SecretSlice};

use crate::padding::BlockPadding;
use crate::seed::{BLOCK_SIZE, KEY_SIZE, Seed};
use crate::CryptoError;

type SeedCbcEncryptor = cbc::Encryptor<Seed>;
type SeedCbcDecryptor = cbc::Decryptor<Seed>;

/// SEED in cipher-block-chaining mode under a fixed key and IV.
///
/// Holds no mutable state: every call starts a fresh chain from the IV, so a
/// single instance may be shared between threads.
pub struct SeedCbc {
    key: SecretSlice<u8>,
    iv: SecretSlice<u8>,
}

impl SeedCbc {
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength(key.len()));
        }
        if iv.len() != BLOCK_SIZE {
            return Err(CryptoError::InvalidIvLength(iv.len()));
        }

        Ok(Self {
            key: key.to_vec().into(),
            iv: iv.to_vec().into(),
        })
    }

    /// Pads `plaintext` to the block boundary and encrypts it.
    ///
    /// Neither framing adds a block to aligned input, so both produce
    /// ciphertext of the same length.
    pub fn encrypt_padded(&self, plaintext: &[u8], padding: BlockPadding) -> Vec<u8> {
        match padding {
            BlockPadding::Zero => self
                .encryptor()
                .encrypt_padded_vec_mut::<ZeroPadding>(plaintext),
            BlockPadding::Pkcs7 => self
                .encryptor()
                .encrypt_padded_vec_mut::<NoPadding>(&padding.pad(plaintext)),
        }
    }

    /// Encrypts already aligned data, the output has the same length.
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_alignment(data)?;
        Ok(self.encryptor().encrypt_padded_vec_mut::<NoPadding>(data))
    }

    /// Decrypts aligned ciphertext without touching any padding.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_alignment(ciphertext)?;
        self.decryptor()
            .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
            .map_err(|_| CryptoError::UnalignedData(ciphertext.len()))
    }

    // key and IV lengths are checked in `new`
    fn encryptor(&self) -> SeedCbcEncryptor {
        SeedCbcEncryptor::new(
            self.key.expose_secret().into(),
            self.iv.expose_secret().into(),
        )
    }

    fn decryptor(&self) -> SeedCbcDecryptor {
        SeedCbcDecryptor::new(
            self.key.expose_secret().into(),
            self.iv.expose_secret().into(),
        )
    }
}

fn check_alignment(data: &[u8]) -> Result<(), CryptoError> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::UnalignedData(data.len()));
    }
    Ok(())
}
