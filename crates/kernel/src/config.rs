//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::language::validate_language_id;

/// Kernel configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Platform default language (default: "en").
    pub default_language: String,

    /// Path for the file-backed preference store. When `None`, preferences
    /// live in memory only.
    pub preferences_path: Option<PathBuf>,

    /// Field paths that must carry default-language content before a
    /// draft may be published.
    pub required_translation_paths: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development convenience)
        dotenvy::dotenv().ok();

        let default_language =
            env::var("WECELEBRATE_DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());
        validate_language_id(&default_language)
            .context("WECELEBRATE_DEFAULT_LANGUAGE must be a valid language code")?;

        let preferences_path = env::var("WECELEBRATE_PREFERENCES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let required_translation_paths = env::var("WECELEBRATE_REQUIRED_TRANSLATIONS")
            .map(|raw| parse_path_list(&raw))
            .unwrap_or_else(|_| vec!["welcomePage.title".to_string()]);

        Ok(Self {
            default_language,
            preferences_path,
            required_translation_paths,
        })
    }
}

/// Parse a comma-separated list of field paths, dropping blanks.
fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
