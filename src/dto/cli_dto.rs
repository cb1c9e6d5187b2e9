use clap::Parser;

/// Hash password with bcrypt (Spring-compatible).
///
/// Prints `{bcrypt}<hash>`, the format Spring's `DelegatingPasswordEncoder` stores.
#[derive(Parser, Debug, Clone)]
#[command(name = "hash_password", version)]
pub struct HashArgs {
    /// Plain password to hash
    #[arg(long)]
    pub password: String,

    /// Override the log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Verify password against bcrypt hash.
///
/// Prints the plain password on match, `mismatch` otherwise. Accepts hashes
/// with or without the `{bcrypt}` prefix, quoted or wrapped over lines.
#[derive(Parser, Debug, Clone)]
#[command(name = "verify_password", version)]
pub struct VerifyArgs {
    /// Plain password to verify
    #[arg(long)]
    pub password: String,

    /// Stored bcrypt hash
    #[arg(long = "hash")]
    pub bcrypt_hash: String,

    /// Override the log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}
