use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::interceptors::{AppError, AppResult};
use crate::models::{HashVersion, StoredHash, GENERATION_COST};
use crate::services::Normalizer;
use crate::utils::{is_format_error, PasswordHasher, MAX_PASSWORD_BYTES};

/// Result of checking a password against a stored hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Match,
    NoMatch,
    /// Nothing structurally valid was left after normalization
    InvalidFormat,
}

/// Generates and verifies `{bcrypt}` stored hashes
pub struct HashService<H: PasswordHasher> {
    hasher: H,
    version: HashVersion,
    normalizer: Normalizer,
}

impl<H: PasswordHasher> HashService<H> {
    pub fn new(hasher: H, config: &AppConfig) -> Self {
        let normalizer = if config.strict_marker {
            Normalizer::strict()
        } else {
            Normalizer::lenient()
        };

        Self {
            hasher,
            version: config.hash_version,
            normalizer,
        }
    }

    /// Hash a plaintext at cost 10 and return it tagged with `{bcrypt}`
    pub fn generate(&self, password: &str) -> AppResult<String> {
        if password.len() > MAX_PASSWORD_BYTES {
            warn!(
                bytes = password.len(),
                "Password longer than {} bytes, bcrypt ignores the rest", MAX_PASSWORD_BYTES
            );
        }

        let encoded = self.hasher.hash(password, GENERATION_COST, self.version)?;

        // Round-trip through the model so a malformed primitive output never escapes
        let stored = StoredHash::parse(&encoded).map_err(|e| {
            AppError::InternalError(format!("bcrypt produced a non-canonical hash: {}", e))
        })?;

        debug!(version = %stored.version, cost = stored.cost, "Generated bcrypt hash");
        Ok(stored.tagged())
    }

    /// Clean up `raw_hash`, then check `password` against it
    pub fn verify(&self, password: &str, raw_hash: &str) -> AppResult<VerifyOutcome> {
        let payload = self.normalizer.normalize(raw_hash);

        let stored = match payload.parse::<StoredHash>() {
            Ok(stored) => stored,
            Err(e) => {
                debug!(reason = %e, "Stored hash rejected after normalization");
                return Ok(VerifyOutcome::InvalidFormat);
            }
        };

        match self.hasher.verify(password, &payload) {
            Ok(true) => {
                if stored.needs_upgrade() {
                    info!(
                        cost = stored.cost,
                        "Hash cost differs from {}, re-encoding is recommended", GENERATION_COST
                    );
                }
                Ok(VerifyOutcome::Match)
            }
            Ok(false) => Ok(VerifyOutcome::NoMatch),
            Err(e) if is_format_error(&e) => {
                debug!(reason = %e, "bcrypt rejected the stored hash");
                Ok(VerifyOutcome::InvalidFormat)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::utils::{Bcrypt, MockPasswordHasher};

    const SPRING_SAMPLE: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

    fn service(hasher: MockPasswordHasher) -> HashService<MockPasswordHasher> {
        HashService::new(hasher, &AppConfig::default())
    }

    #[test]
    fn generate_tags_primitive_output() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .with(eq("secret"), eq(GENERATION_COST), eq(HashVersion::TwoA))
            .times(1)
            .returning(|_, _, _| Ok(SPRING_SAMPLE.to_string()));

        let tagged = service(hasher).generate("secret").unwrap();
        assert_eq!(tagged, format!("{{bcrypt}}{}", SPRING_SAMPLE));
    }

    #[test]
    fn generate_uses_configured_version() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .with(eq("secret"), eq(GENERATION_COST), eq(HashVersion::TwoY))
            .returning(|_, _, _| Ok(SPRING_SAMPLE.replacen("$2a$", "$2y$", 1)));

        let config = AppConfig {
            hash_version: HashVersion::TwoY,
            ..AppConfig::default()
        };
        let tagged = HashService::new(hasher, &config).generate("secret").unwrap();
        assert!(tagged.starts_with("{bcrypt}$2y$10$"));
    }

    #[test]
    fn generate_surfaces_primitive_failure() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_, _, _| Err(bcrypt::BcryptError::CostNotAllowed(10)));

        let err = service(hasher).generate("secret").unwrap_err();
        assert!(matches!(err, AppError::HashError(_)));
    }

    #[test]
    fn verify_passes_normalized_payload_to_primitive() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify()
            .with(eq("secret"), eq(SPRING_SAMPLE))
            .times(1)
            .returning(|_, _| Ok(true));

        let raw = format!(" '{{bcrypt}}{}'\n", SPRING_SAMPLE);
        assert_eq!(service(hasher).verify("secret", &raw).unwrap(), VerifyOutcome::Match);
    }

    #[test]
    fn verify_reports_mismatch() {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().returning(|_, _| Ok(false));

        assert_eq!(
            service(hasher).verify("other", SPRING_SAMPLE).unwrap(),
            VerifyOutcome::NoMatch
        );
    }

    #[test]
    fn verify_never_calls_primitive_on_garbage() {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().never();

        assert_eq!(
            service(hasher).verify("secret", "not-a-hash").unwrap(),
            VerifyOutcome::InvalidFormat
        );
    }

    #[test]
    fn verify_maps_primitive_format_errors_to_invalid_format() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify()
            .returning(|_, _| Err(bcrypt::BcryptError::InvalidHash("bad".to_string())));

        assert_eq!(
            service(hasher).verify("secret", SPRING_SAMPLE).unwrap(),
            VerifyOutcome::InvalidFormat
        );
    }

    #[test]
    fn verify_surfaces_other_primitive_errors() {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().returning(|_, _| {
            Err(bcrypt::BcryptError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "boom",
            )))
        });

        let err = service(hasher).verify("secret", SPRING_SAMPLE).unwrap_err();
        assert!(matches!(err, AppError::HashError(_)));
    }

    #[test]
    fn strict_config_rejects_leading_noise() {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().never();

        let config = AppConfig {
            strict_marker: true,
            ..AppConfig::default()
        };
        let raw = format!("prefix-noise{}", SPRING_SAMPLE);
        assert_eq!(
            HashService::new(hasher, &config).verify("secret", &raw).unwrap(),
            VerifyOutcome::InvalidFormat
        );
    }

    #[test]
    fn round_trip_with_real_bcrypt() {
        let service = HashService::new(Bcrypt, &AppConfig::default());

        let first = service.generate("same_password").unwrap();
        let second = service.generate("same_password").unwrap();

        assert!(first.starts_with("{bcrypt}$2a$10$"));
        assert_eq!(first.len(), "{bcrypt}".len() + 60);
        assert_ne!(first, second);

        assert_eq!(service.verify("same_password", &first).unwrap(), VerifyOutcome::Match);
        assert_eq!(service.verify("same_password", &second).unwrap(), VerifyOutcome::Match);
        assert_eq!(service.verify("other_password", &first).unwrap(), VerifyOutcome::NoMatch);
    }

    #[test]
    fn empty_password_round_trips() {
        let service = HashService::new(Bcrypt, &AppConfig::default());
        let tagged = service.generate("").unwrap();

        assert_eq!(service.verify("", &tagged).unwrap(), VerifyOutcome::Match);
    }

    #[test]
    fn long_password_is_truncated_to_72_bytes() {
        let service = HashService::new(Bcrypt, &AppConfig::default());
        let password = "correct horse battery staple ".repeat(4);
        assert!(password.len() >= 100);

        let tagged = service.generate(&password).unwrap();

        assert_eq!(service.verify(&password, &tagged).unwrap(), VerifyOutcome::Match);
        assert_eq!(
            service.verify(&password[..MAX_PASSWORD_BYTES], &tagged).unwrap(),
            VerifyOutcome::Match
        );
        assert_eq!(
            service.verify(&password[..MAX_PASSWORD_BYTES - 1], &tagged).unwrap(),
            VerifyOutcome::NoMatch
        );
    }

    #[test]
    fn match_on_cheaper_hash_still_matches() {
        let cheap = SPRING_SAMPLE.replacen("$10$", "$04$", 1);
        let stored: StoredHash = cheap.parse().unwrap();
        assert!(stored.needs_upgrade());

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify()
            .with(eq("secret"), eq(cheap.clone()))
            .times(1)
            .returning(|_, _| Ok(true));

        assert_eq!(service(hasher).verify("secret", &cheap).unwrap(), VerifyOutcome::Match);
    }

    #[test]
    fn cheaper_hash_from_real_bcrypt_matches() {
        let cheap = bcrypt::hash("secret", 4).unwrap();
        let service = HashService::new(Bcrypt, &AppConfig::default());

        assert!(cheap.parse::<StoredHash>().unwrap().needs_upgrade());
        assert_eq!(service.verify("secret", &cheap).unwrap(), VerifyOutcome::Match);
        assert_eq!(service.verify("public", &cheap).unwrap(), VerifyOutcome::NoMatch);
    }
}
