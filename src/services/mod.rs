pub mod hash_service;
pub mod normalizer;

pub use hash_service::{HashService, VerifyOutcome};
pub use normalizer::{NormalizationRule, Normalizer};
