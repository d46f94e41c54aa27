pub mod error;
pub mod pending_verification_repository;
