use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tag a Spring `DelegatingPasswordEncoder` puts in front of bcrypt hashes
pub const BCRYPT_TAG: &str = "{bcrypt}";

/// Marker every bcrypt payload starts with
pub const VERSION_MARKER: &str = "$2";

/// Cost used for every generated hash (Spring's default strength)
pub const GENERATION_COST: u32 = 10;

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

pub const SALT_LEN: usize = 22;
pub const DIGEST_LEN: usize = 31;

/// `$2a$10$` + salt + digest
pub const ENCODED_LEN: usize = 7 + SALT_LEN + DIGEST_LEN;

/// bcrypt version marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashVersion {
    #[default]
    #[serde(rename = "2a")]
    TwoA,
    #[serde(rename = "2b")]
    TwoB,
    #[serde(rename = "2y")]
    TwoY,
}

impl HashVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashVersion::TwoA => "2a",
            HashVersion::TwoB => "2b",
            HashVersion::TwoY => "2y",
        }
    }
}

impl fmt::Display for HashVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashVersion {
    type Err = HashFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2a" => Ok(HashVersion::TwoA),
            "2b" => Ok(HashVersion::TwoB),
            "2y" => Ok(HashVersion::TwoY),
            other => Err(HashFormatError::Version(other.to_string())),
        }
    }
}

impl From<HashVersion> for bcrypt::Version {
    fn from(version: HashVersion) -> Self {
        match version {
            HashVersion::TwoA => bcrypt::Version::TwoA,
            HashVersion::TwoB => bcrypt::Version::TwoB,
            HashVersion::TwoY => bcrypt::Version::TwoY,
        }
    }
}

/// Why a payload is not a canonical bcrypt encoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashFormatError {
    #[error("expected 60 characters, got {0}")]
    Length(usize),

    #[error("unsupported version marker `{0}`")]
    Version(String),

    #[error("malformed cost field `{0}`")]
    Cost(String),

    #[error("cost {0} outside 4..=31")]
    CostOutOfRange(u32),

    #[error("missing `$` separator at position {0}")]
    Separator(usize),

    #[error("character `{0}` is not in the bcrypt base-64 alphabet")]
    Alphabet(char),
}

/// A parsed bcrypt payload (no tag, no surrounding noise)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredHash {
    pub version: HashVersion,
    pub cost: u32,
    pub salt: String,
    pub digest: String,
}

impl StoredHash {
    /// Strictly parse a canonical `$2?$cc$<53 chars>` payload.
    pub fn parse(payload: &str) -> Result<Self, HashFormatError> {
        if let Some(bad) = payload.chars().find(|c| !c.is_ascii()) {
            return Err(HashFormatError::Alphabet(bad));
        }
        if payload.len() != ENCODED_LEN {
            return Err(HashFormatError::Length(payload.len()));
        }

        let bytes = payload.as_bytes();
        for pos in [0, 3, 6] {
            if bytes[pos] != b'$' {
                return Err(HashFormatError::Separator(pos));
            }
        }

        let version: HashVersion = payload[1..3].parse()?;

        let cost_field = &payload[4..6];
        if !cost_field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HashFormatError::Cost(cost_field.to_string()));
        }
        let cost: u32 = cost_field
            .parse()
            .map_err(|_| HashFormatError::Cost(cost_field.to_string()))?;
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashFormatError::CostOutOfRange(cost));
        }

        let encoded = &payload[7..];
        if let Some(bad) = encoded.chars().find(|c| !is_bcrypt_base64(*c)) {
            return Err(HashFormatError::Alphabet(bad));
        }

        Ok(Self {
            version,
            cost,
            salt: encoded[..SALT_LEN].to_string(),
            digest: encoded[SALT_LEN..].to_string(),
        })
    }

    /// Whether a generator would re-encode this hash at a different cost
    pub fn needs_upgrade(&self) -> bool {
        self.cost != GENERATION_COST
    }

    /// Canonical form prefixed with the `{bcrypt}` tag
    pub fn tagged(&self) -> String {
        format!("{}{}", BCRYPT_TAG, self)
    }
}

impl fmt::Display for StoredHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}${:02}${}{}", self.version, self.cost, self.salt, self.digest)
    }
}

impl FromStr for StoredHash {
    type Err = HashFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_bcrypt_base64(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '/'
}
