pub mod misc;
pub mod verification;
