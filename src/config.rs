//! Site configuration management for `nabi.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[site]`    | Site identity (name, url, email, availability)   |
//! | `[social]`  | External profile links                           |
//! | `[content]` | Content root directory                           |
//!
//! The parsed value is the single immutable configuration object of the
//! build: constructed once at process start and passed by reference to
//! whatever needs it, no ambient global.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Haneul Kim"
//! description = "Indie developer"
//! url = "https://haneul.dev"
//! email = "hello@haneul.dev"
//! availability = "open to freelance work"
//! default_locale = "en"
//!
//! [social]
//! github = "https://github.com/haneul-dev"
//! linkedin = "https://linkedin.com/in/haneul"
//!
//! [content]
//! root = "content"
//! ```

use crate::content::sanitize::is_valid_url;
use crate::content::types::Locale;
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

// ============================================================================
// Defaults
// ============================================================================

mod defaults {
    use std::path::PathBuf;

    pub fn locale() -> String {
        "en".to_owned()
    }

    pub fn content_root() -> PathBuf {
        PathBuf::from("content")
    }
}

// ============================================================================
// Sections
// ============================================================================

/// `[site]` section - site identity used by the rendering and SEO layers.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Personal or brand name shown across the site.
    pub name: String,

    /// Short description for SEO meta tags.
    #[serde(default)]
    pub description: String,

    /// Canonical site URL for absolute links.
    #[serde(default)]
    pub url: Option<String>,

    /// Contact email shown on the contact page.
    #[serde(default)]
    pub email: String,

    /// Availability status line (e.g. "open to freelance work").
    #[serde(default)]
    pub availability: String,

    /// Default locale code ("en" or "ko").
    #[serde(default = "defaults::locale")]
    #[educe(Default = defaults::locale())]
    pub default_locale: String,
}

/// `[social]` section - external profile links. Each is optional and
/// URL-validated when the config is validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialSection {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// `[content]` section - where the content tree lives.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentSection {
    /// Content root directory, relative to the project root.
    #[serde(default = "defaults::content_root")]
    #[educe(Default = defaults::content_root())]
    pub root: PathBuf,
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing nabi.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub social: SocialSection,

    #[serde(default)]
    pub content: ContentSection,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Default locale as a typed value; unknown codes fall back to `En`.
    pub fn default_locale(&self) -> Locale {
        self.site.default_locale.parse().unwrap_or(Locale::En)
    }

    /// Validate cross-field constraints after loading.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()).into());
        }
        if let Some(url) = self.site.url.as_deref()
            && !is_valid_url(url)
        {
            return Err(ConfigError::Validation(format!(
                "site.url is not a valid http(s) URL: {url}"
            ))
            .into());
        }
        for (key, value) in [
            ("social.github", &self.social.github),
            ("social.linkedin", &self.social.linkedin),
            ("social.twitter", &self.social.twitter),
        ] {
            if let Some(url) = value.as_deref()
                && !is_valid_url(url)
            {
                return Err(ConfigError::Validation(format!(
                    "{key} is not a valid http(s) URL: {url}"
                ))
                .into());
            }
        }
        if self.site.default_locale.parse::<Locale>().is_err() {
            return Err(ConfigError::Validation(format!(
                "site.default_locale must be one of: en, ko (got {})",
                self.site.default_locale
            ))
            .into());
        }
        Ok(())
    }
}
