//! SEED block cipher (KISA, RFC 4269).
//!
//! 128-bit block, 128-bit key, 16 Feistel rounds. The cipher plugs into the
//! RustCrypto `cipher` traits so block modes such as `cbc` can drive it.

use cipher::consts::U16;
use cipher::{BlockCipher, Key, KeyInit, KeySizeUser};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const KEY_SIZE: usize = 16;
pub const BLOCK_SIZE: usize = 16;

const ROUNDS: usize = 16;

const S1: [u8; 256] = [
    0xa9, 0x85, 0xd6, 0xd3, 0x54, 0x1d, 0xac, 0x25, 0x5d, 0x43, 0x18, 0x1e, 0x51, 0xfc, 0xca, 0x63,
    0x28, 0x44, 0x20, 0x9d, 0xe0, 0xe2, 0xc8, 0x17, 0xa5, 0x8f, 0x03, 0x7b, 0xbb, 0x13, 0xd2, 0xee,
    0x70, 0x8c, 0x3f, 0xa8, 0x32, 0xdd, 0xf6, 0x74, 0xec, 0x95, 0x0b, 0x57, 0x5c, 0x5b, 0xbd, 0x01,
    0x24, 0x1c, 0x73, 0x98, 0x10, 0xcc, 0xf2, 0xd9, 0x2c, 0xe7, 0x72, 0x83, 0x9b, 0xd1, 0x86, 0xc9,
    0x60, 0x50, 0xa3, 0xeb, 0x0d, 0xb6, 0x9e, 0x4f, 0xb7, 0x5a, 0xc6, 0x78, 0xa6, 0x12, 0xaf, 0xd5,
    0x61, 0xc3, 0xb4, 0x41, 0x52, 0x7d, 0x8d, 0x08, 0x1f, 0x99, 0x00, 0x19, 0x04, 0x53, 0xf7, 0xe1,
    0xfd, 0x76, 0x2f, 0x27, 0xb0, 0x8b, 0x0e, 0xab, 0xa2, 0x6e, 0x93, 0x4d, 0x69, 0x7c, 0x09, 0x0a,
    0xbf, 0xef, 0xf3, 0xc5, 0x87, 0x14, 0xfe, 0x64, 0xde, 0x2e, 0x4b, 0x1a, 0x06, 0x21, 0x6b, 0x66,
    0x02, 0xf5, 0x92, 0x8a, 0x0c, 0xb3, 0x7e, 0xd0, 0x7a, 0x47, 0x96, 0xe5, 0x26, 0x80, 0xad, 0xdf,
    0xa1, 0x30, 0x37, 0xae, 0x36, 0x15, 0x22, 0x38, 0xf4, 0xa7, 0x45, 0x4c, 0x81, 0xe9, 0x84, 0x97,
    0x35, 0xcb, 0xce, 0x3c, 0x71, 0x11, 0xc7, 0x89, 0x75, 0xfb, 0xda, 0xf8, 0x94, 0x59, 0x82, 0xc4,
    0xff, 0x49, 0x39, 0x67, 0xc0, 0xcf, 0xd7, 0xb8, 0x0f, 0x8e, 0x42, 0x23, 0x91, 0x6c, 0xdb, 0xa4,
    0x34, 0xf1, 0x48, 0xc2, 0x6f, 0x3d, 0x2d, 0x40, 0xbe, 0x3e, 0xbc, 0xc1, 0xaa, 0xba, 0x4e, 0x55,
    0x3b, 0xdc, 0x68, 0x7f, 0x9c, 0xd8, 0x4a, 0x56, 0x77, 0xa0, 0xed, 0x46, 0xb5, 0x2b, 0x65, 0xfa,
    0xe3, 0xb9, 0xb1, 0x9f, 0x5e, 0xf9, 0xe6, 0xb2, 0x31, 0xea, 0x6d, 0x5f, 0xe4, 0xf0, 0xcd, 0x88,
    0x16, 0x3a, 0x58, 0xd4, 0x62, 0x29, 0x07, 0x33, 0xe8, 0x1b, 0x05, 0x79, 0x90, 0x6a, 0x2a, 0x9a,
];

const S2: [u8; 256] = [
    0x38, 0xe8, 0x2d, 0xa6, 0xcf, 0xde, 0xb3, 0xb8, 0xaf, 0x60, 0x55, 0xc7, 0x44, 0x6f, 0x6b, 0x5b,
    0xc3, 0x62, 0x33, 0xb5, 0x29, 0xa0, 0xe2, 0xa7, 0xd3, 0x91, 0x11, 0x06, 0x1c, 0xbc, 0x36, 0x4b,
    0xef, 0x88, 0x6c, 0xa8, 0x17, 0xc4, 0x16, 0xf4, 0xc2, 0x45, 0xe1, 0xd6, 0x3f, 0x3d, 0x8e, 0x98,
    0x28, 0x4e, 0xf6, 0x3e, 0xa5, 0xf9, 0x0d, 0xdf, 0xd8, 0x2b, 0x66, 0x7a, 0x27, 0x2f, 0xf1, 0x72,
    0x42, 0xd4, 0x41, 0xc0, 0x73, 0x67, 0xac, 0x8b, 0xf7, 0xad, 0x80, 0x1f, 0xca, 0x2c, 0xaa, 0x34,
    0xd2, 0x0b, 0xee, 0xe9, 0x5d, 0x94, 0x18, 0xf8, 0x57, 0xae, 0x08, 0xc5, 0x13, 0xcd, 0x86, 0xb9,
    0xff, 0x7d, 0xc1, 0x31, 0xf5, 0x8a, 0x6a, 0xb1, 0xd1, 0x20, 0xd7, 0x02, 0x22, 0x04, 0x68, 0x71,
    0x07, 0xdb, 0x9d, 0x99, 0x61, 0xbe, 0xe6, 0x59, 0xdd, 0x51, 0x90, 0xdc, 0x9a, 0xa3, 0xab, 0xd0,
    0x81, 0x0f, 0x47, 0x1a, 0xe3, 0xec, 0x8d, 0xbf, 0x96, 0x7b, 0x5c, 0xa2, 0xa1, 0x63, 0x23, 0x4d,
    0xc8, 0x9e, 0x9c, 0x3a, 0x0c, 0x2e, 0xba, 0x6e, 0x9f, 0x5a, 0xf2, 0x92, 0xf3, 0x49, 0x78, 0xcc,
    0x15, 0xfb, 0x70, 0x75, 0x7f, 0x35, 0x10, 0x03, 0x64, 0x6d, 0xc6, 0x74, 0xd5, 0xb4, 0xea, 0x09,
    0x76, 0x19, 0xfe, 0x40, 0x12, 0xe0, 0xbd, 0x05, 0xfa, 0x01, 0xf0, 0x2a, 0x5e, 0xa9, 0x56, 0x43,
    0x85, 0x14, 0x89, 0x9b, 0xb0, 0xe5, 0x48, 0x79, 0x97, 0xfc, 0x1e, 0x82, 0x21, 0x8c, 0x1b, 0x5f,
    0x77, 0x54, 0xb2, 0x1d, 0x25, 0x4f, 0x00, 0x46, 0xed, 0x58, 0x52, 0xeb, 0x7e, 0xda, 0xc9, 0xfd,
    0x30, 0x95, 0x65, 0x3c, 0xb6, 0xe4, 0xbb, 0x7c, 0x0e, 0x50, 0x39, 0x26, 0x32, 0x84, 0x69, 0x93,
    0x37, 0xe7, 0x24, 0xa4, 0xcb, 0x53, 0x0a, 0x87, 0xd9, 0x4c, 0x83, 0x8f, 0xce, 0x3b, 0x4a, 0xb7,
];

// G function lookup tables: each S-box output masked into the four bytes of a word
static SS0: [u32; 256] = expand_sbox(&S1, [0x3f, 0xcf, 0xf3, 0xfc]);
static SS1: [u32; 256] = expand_sbox(&S2, [0xfc, 0x3f, 0xcf, 0xf3]);
static SS2: [u32; 256] = expand_sbox(&S1, [0xf3, 0xfc, 0x3f, 0xcf]);
static SS3: [u32; 256] = expand_sbox(&S2, [0xcf, 0xf3, 0xfc, 0x3f]);

const KC: [u32; ROUNDS] = [
    0x9e3779b9, 0x3c6ef373, 0x78dde6e6, 0xf1bbcdcc, 0xe3779b99, 0xc6ef3733, 0x8dde6e67, 0x1bbcdccf,
    0x3779b99e, 0x6ef3733c, 0xdde6e678, 0xbbcdccf1, 0x779b99e3, 0xef3733c6, 0xde6e678d, 0xbcdccf1b,
];

const fn expand_sbox(sbox: &[u8; 256], masks: [u8; 4]) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let s = sbox[i];
        table[i] = u32::from_be_bytes([s & masks[0], s & masks[1], s & masks[2], s & masks[3]]);
        i += 1;
    }
    table
}

fn g(x: u32) -> u32 {
    let [b3, b2, b1, b0] = x.to_be_bytes();
    SS0[b0 as usize] ^ SS1[b1 as usize] ^ SS2[b2 as usize] ^ SS3[b3 as usize]
}

fn round_function(k0: u32, k1: u32, r0: u32, r1: u32) -> (u32, u32) {
    let mut t0 = r0 ^ k0;
    let mut t1 = r1 ^ k1;
    t1 = g(t1 ^ t0);
    t0 = g(t0.wrapping_add(t1));
    t1 = g(t1.wrapping_add(t0));
    t0 = t0.wrapping_add(t1);
    (t0, t1)
}

fn word(bytes: &[u8; 16], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn words_to_block(words: [u32; 4]) -> [u8; 16] {
    let mut block = [0u8; 16];
    for (chunk, word) in block.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    block
}

#[derive(Clone)]
pub struct Seed {
    round_keys: [u32; 2 * ROUNDS],
}

impl Seed {
    pub fn from_key(key: &[u8; KEY_SIZE]) -> Self {
        let (mut a, mut b, mut c, mut d) = (word(key, 0), word(key, 4), word(key, 8), word(key, 12));

        let mut round_keys = [0u32; 2 * ROUNDS];
        for (round, kc) in KC.iter().enumerate() {
            round_keys[2 * round] = g(a.wrapping_add(c).wrapping_sub(*kc));
            round_keys[2 * round + 1] = g(b.wrapping_sub(d).wrapping_add(*kc));

            if round % 2 == 0 {
                let ab = (((a as u64) << 32) | b as u64).rotate_right(8);
                a = (ab >> 32) as u32;
                b = ab as u32;
            } else {
                let cd = (((c as u64) << 32) | d as u64).rotate_left(8);
                c = (cd >> 32) as u32;
                d = cd as u32;
            }
        }

        Self { round_keys }
    }

    fn encrypt_raw(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let (mut l0, mut l1, mut r0, mut r1) =
            (word(block, 0), word(block, 4), word(block, 8), word(block, 12));

        for (round, keys) in self.round_keys.chunks_exact(2).enumerate() {
            let (t0, t1) = round_function(keys[0], keys[1], r0, r1);
            l0 ^= t0;
            l1 ^= t1;
            // the last round has no swap
            if round < ROUNDS - 1 {
                (l0, l1, r0, r1) = (r0, r1, l0, l1);
            }
        }

        words_to_block([l0, l1, r0, r1])
    }

    fn decrypt_raw(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let (mut l0, mut l1, mut r0, mut r1) =
            (word(block, 0), word(block, 4), word(block, 8), word(block, 12));

        for (round, keys) in self.round_keys.chunks_exact(2).enumerate().rev() {
            let (t0, t1) = round_function(keys[0], keys[1], r0, r1);
            l0 ^= t0;
            l1 ^= t1;
            if round > 0 {
                (l0, l1, r0, r1) = (r0, r1, l0, l1);
            }
        }

        words_to_block([l0, l1, r0, r1])
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed { .. }")
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

impl ZeroizeOnDrop for Seed {}

impl KeySizeUser for Seed {
    type KeySize = U16;
}

impl KeyInit for Seed {
    fn new(key: &Key<Self>) -> Self {
        let key: [u8; KEY_SIZE] = key.clone().into();
        Self::from_key(&key)
    }
}

impl BlockCipher for Seed {}

cipher::impl_simple_block_encdec!(
    Seed, U16, seed, block,
    encrypt: {
        let input: [u8; BLOCK_SIZE] = block.clone_in().into();
        block.get_out().copy_from_slice(&seed.encrypt_raw(&input));
    }
    decrypt: {
        let input: [u8; BLOCK_SIZE] = block.clone_in().into();
        block.get_out().copy_from_slice(&seed.decrypt_raw(&input));
    }
);

#[cfg(test)]
mod test;
