use tracing::warn;

use crate::models::{BCRYPT_TAG, VERSION_MARKER};

/// One pure cleaning step applied to a claimed stored hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationRule {
    /// Remove every whitespace character, including embedded newlines
    StripWhitespace,
    /// Remove one leading and one trailing `"` or `'`
    Unquote,
    /// Remove one leading `{bcrypt}` tag
    StripTag,
    /// Drop anything in front of the first `$2` marker
    ReanchorOnMarker,
}

impl NormalizationRule {
    pub fn apply(&self, input: &str) -> String {
        match self {
            NormalizationRule::StripWhitespace => {
                input.chars().filter(|c| !c.is_whitespace()).collect()
            }
            NormalizationRule::Unquote => {
                let s = input.strip_prefix(['"', '\'']).unwrap_or(input);
                let s = s.strip_suffix(['"', '\'']).unwrap_or(s);
                s.to_string()
            }
            NormalizationRule::StripTag => input.strip_prefix(BCRYPT_TAG).unwrap_or(input).to_string(),
            NormalizationRule::ReanchorOnMarker => {
                if input.starts_with(VERSION_MARKER) {
                    return input.to_string();
                }
                match input.find(VERSION_MARKER) {
                    Some(start) => {
                        warn!(discarded = start, "Discarded characters in front of the bcrypt marker");
                        input[start..].to_string()
                    }
                    None => input.to_string(),
                }
            }
        }
    }
}

/// Ordered rule set turning noisy input into a bcrypt payload candidate.
///
/// The output either starts with `$2` or is passed through unchanged for the
/// verifier to reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    rules: Vec<NormalizationRule>,
}

impl Normalizer {
    pub fn lenient() -> Self {
        Self {
            rules: vec![
                NormalizationRule::StripWhitespace,
                NormalizationRule::Unquote,
                NormalizationRule::StripTag,
                NormalizationRule::ReanchorOnMarker,
            ],
        }
    }

    /// Same as `lenient` without re-anchoring on an embedded marker
    pub fn strict() -> Self {
        Self {
            rules: vec![
                NormalizationRule::StripWhitespace,
                NormalizationRule::Unquote,
                NormalizationRule::StripTag,
            ],
        }
    }

    pub fn rules(&self) -> &[NormalizationRule] {
        &self.rules
    }

    pub fn normalize(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |acc, rule| rule.apply(&acc))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::lenient()
    }
}
