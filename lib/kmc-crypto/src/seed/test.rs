use cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use rstest::rstest;

use super::*;

#[rstest]
#[case(
    "00000000000000000000000000000000",
    "000102030405060708090A0B0C0D0E0F",
    "5EBAC6E0054E166819AFF1CC6D346CDB"
)]
#[case(
    "000102030405060708090A0B0C0D0E0F",
    "00000000000000000000000000000000",
    "C11F22F20140505084483597E4370F43"
)]
fn test_known_answer(#[case] key: &str, #[case] plaintext: &str, #[case] ciphertext: &str) {
    let key: [u8; KEY_SIZE] = hex::decode(key).unwrap().try_into().unwrap();
    let plaintext: [u8; BLOCK_SIZE] = hex::decode(plaintext).unwrap().try_into().unwrap();

    let seed = Seed::from_key(&key);
    let encrypted = seed.encrypt_raw(&plaintext);

    assert_eq!(hex::encode_upper(encrypted), ciphertext);
    assert_eq!(seed.decrypt_raw(&encrypted), plaintext);
}

#[test]
fn test_first_round_keys_of_zero_key() {
    let seed = Seed::from_key(&[0u8; KEY_SIZE]);

    assert_eq!(
        &seed.round_keys[..4],
        &[0x7c8f8c7e, 0xc737a22c, 0xff276cdb, 0xa7ca684a]
    );
}

#[test]
fn test_cipher_trait_matches_raw_block_functions() {
    let key = *b"4261358467855134";
    let seed = Seed::new(&key.into());

    let mut block = (*b"MMST1001/015001/").into();
    seed.encrypt_block(&mut block);
    assert_eq!(
        block.as_slice(),
        Seed::from_key(&key).encrypt_raw(b"MMST1001/015001/")
    );

    seed.decrypt_block(&mut block);
    assert_eq!(block.as_slice(), b"MMST1001/015001/");
}
