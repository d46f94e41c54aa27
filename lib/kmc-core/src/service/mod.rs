pub mod error;
pub mod verification;
