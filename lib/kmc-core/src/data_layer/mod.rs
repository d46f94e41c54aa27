//! In-process storage backing the repository traits.

pub mod pending_verification;
