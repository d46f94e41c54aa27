use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub fn generate_numeric(length: usize) -> String {
    let rng = &mut get_rng();
    std::iter::repeat_with(|| rng.gen_range('0'..='9'))
        .take(length)
        .collect()
}

pub fn get_rng() -> impl RngCore + CryptoRng {
    ChaCha20Rng::from_entropy()
}
