//! Language model and validation.
//!
//! Languages are site-level configuration. A site serves one default
//! language plus any number of secondary languages; text direction drives
//! the ambient document attributes.

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Language codes rendered right-to-left, matched on the primary subtag.
const RTL_LANGUAGES: &[&str] = &["ar", "he", "fa", "ur"];

/// Text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Return the string representation used in document attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Classify a language code by its primary subtag ("ar-SA" → rtl).
    pub fn for_code(code: &str) -> Self {
        let primary = code.split('-').next().unwrap_or(code);
        if RTL_LANGUAGES.contains(&primary) {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = KernelError;

    fn from_str(s: &str) -> KernelResult<Self> {
        match s {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            other => Err(KernelError::InvalidLanguage(format!(
                "invalid direction '{other}': must be 'ltr' or 'rtl'"
            ))),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    /// Language code (e.g., "en", "fr", "pt-BR").
    pub id: String,

    /// Human-readable label (e.g., "English").
    pub label: String,

    /// Sort weight for language ordering.
    pub weight: i32,

    /// Whether this is the site default language.
    pub is_default: bool,

    /// Text direction.
    pub direction: Direction,
}

impl Language {
    /// Create a language, validating the code and label. Direction is
    /// derived from the code; weight and default flag start at zero/false.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> KernelResult<Self> {
        let id = id.into().trim().to_string();
        let label = label.into().trim().to_string();

        validate_language_id(&id)?;
        validate_label(&label)?;

        Ok(Self {
            direction: Direction::for_code(&id),
            id,
            label,
            weight: 0,
            is_default: false,
        })
    }

    /// Set the sort weight.
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Mark as the site default language.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Validate that a label is non-empty and at most 255 characters.
fn validate_label(label: &str) -> KernelResult<()> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(KernelError::InvalidLanguage(
            "language label must not be empty".to_string(),
        ));
    }
    if trimmed.len() > 255 {
        return Err(KernelError::InvalidLanguage(format!(
            "language label must be at most 255 characters, got {}",
            trimmed.len()
        )));
    }
    Ok(())
}

/// Validate that a language ID follows BCP 47 primary subtag format.
///
/// Accepts: lowercase alpha 2-3 chars, optionally followed by
/// hyphen-separated alphanumeric subtags (e.g., "en", "fr", "pt-BR",
/// "zh-TW").
pub fn validate_language_id(id: &str) -> KernelResult<()> {
    if id.is_empty() || id.len() > 12 {
        return Err(KernelError::InvalidLanguage(format!(
            "language ID must be 1-12 characters, got '{id}'"
        )));
    }

    let mut parts = id.split('-');

    // Primary subtag: 2-3 lowercase letters
    match parts.next() {
        Some(primary) if (2..=3).contains(&primary.len()) => {
            if !primary.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(KernelError::InvalidLanguage(format!(
                    "language ID primary subtag must be lowercase letters, got '{id}'"
                )));
            }
        }
        _ => {
            return Err(KernelError::InvalidLanguage(format!(
                "language ID must start with a 2-3 letter primary subtag, got '{id}'"
            )));
        }
    }

    // Optional subtags: alphanumeric, 1-8 chars each
    for subtag in parts {
        if subtag.is_empty()
            || subtag.len() > 8
            || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(KernelError::InvalidLanguage(format!(
                "language ID subtag must be 1-8 alphanumeric characters, got '{subtag}' in '{id}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn direction_for_code() {
        assert_eq!(Direction::for_code("en"), Direction::Ltr);
        assert_eq!(Direction::for_code("es"), Direction::Ltr);
        assert_eq!(Direction::for_code("ar"), Direction::Rtl);
        assert_eq!(Direction::for_code("he"), Direction::Rtl);
        assert_eq!(Direction::for_code("fa"), Direction::Rtl);
        assert_eq!(Direction::for_code("ur"), Direction::Rtl);
        assert_eq!(Direction::for_code("ar-SA"), Direction::Rtl);
        assert_eq!(Direction::for_code("pt-BR"), Direction::Ltr);
    }

    #[test]
    fn direction_round_trip() {
        assert_eq!("ltr".parse::<Direction>().unwrap(), Direction::Ltr);
        assert_eq!("rtl".parse::<Direction>().unwrap(), Direction::Rtl);
        assert!("up".parse::<Direction>().is_err());
        assert_eq!(Direction::Rtl.to_string(), "rtl");
    }

    #[test]
    fn language_new_derives_direction() {
        let lang = Language::new("he", "Hebrew").unwrap();
        assert_eq!(lang.direction, Direction::Rtl);
        assert_eq!(lang.weight, 0);
        assert!(!lang.is_default);

        let lang = Language::new("fr", "French").unwrap().with_weight(2).as_default();
        assert_eq!(lang.direction, Direction::Ltr);
        assert_eq!(lang.weight, 2);
        assert!(lang.is_default);
    }

    #[test]
    fn language_new_trims_input() {
        let lang = Language::new("  en  ", "  English  ").unwrap();
        assert_eq!(lang.id, "en");
        assert_eq!(lang.label, "English");
    }

    #[test]
    fn language_serialization_round_trip() {
        let lang = Language::new("ar", "Arabic").unwrap().with_weight(5);

        let json = serde_json::to_string(&lang).unwrap();
        assert!(json.contains("\"rtl\""));

        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lang);
    }

    #[test]
    fn validate_language_id_accepts_valid() {
        assert!(validate_language_id("en").is_ok());
        assert!(validate_language_id("fr").is_ok());
        assert!(validate_language_id("pt-BR").is_ok());
        assert!(validate_language_id("zh-TW").is_ok());
        assert!(validate_language_id("zh-hans").is_ok());
        assert!(validate_language_id("ast").is_ok()); // 3-letter primary
    }

    #[test]
    fn validate_language_id_rejects_invalid() {
        assert!(validate_language_id("").is_err(), "empty");
        assert!(validate_language_id("e").is_err(), "too short");
        assert!(validate_language_id("EN").is_err(), "uppercase primary");
        assert!(validate_language_id("en us").is_err(), "space");
        assert!(validate_language_id("../foo").is_err(), "path traversal");
        assert!(validate_language_id("<script>").is_err(), "html");
        assert!(validate_language_id("en-").is_err(), "trailing hyphen");
        assert!(
            validate_language_id("abcdefghijklm").is_err(),
            "too long overall"
        );
    }

    #[test]
    fn validate_label_rejects_invalid() {
        assert!(Language::new("en", "").is_err(), "empty label");
        assert!(Language::new("en", "   ").is_err(), "whitespace label");
        let long = "a".repeat(256);
        assert!(Language::new("en", long).is_err(), "too long label");
    }
}
