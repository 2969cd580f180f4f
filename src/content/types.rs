//! Typed content entities.
//!
//! Every struct here is the *output* side of the content pipeline: by the
//! time a value of one of these types exists, all untrusted front-matter
//! fields have passed through the sanitizers in [`crate::content::sanitize`].
//! Optional structured fields are therefore either fully valid or `None`,
//! never partially populated.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// ============================================================================
// Locale
// ============================================================================

/// Supported content locales.
///
/// Each entity directory may carry one document per locale; partial
/// localization is expected (a post existing only in English is normal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ko,
}

impl Locale {
    /// All locales, in site display order.
    pub const ALL: [Self; 2] = [Self::En, Self::Ko];

    /// Lowercase locale code used in file names (`en.mdx`, `ko.mdx`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ko" => Ok(Self::Ko),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

// ============================================================================
// Blog
// ============================================================================

/// Listing-level metadata for a blog post.
///
/// `reading_time` and `date` are derived values: reading time is computed
/// from the body on every load, and the date is normalized to `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostMeta {
    /// Directory-derived identifier, always slug-safe.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Publication date, normalized to `YYYY-MM-DD`.
    pub date: String,
    pub tags: Vec<String>,
    pub locale: Locale,
    /// Draft posts never appear in listings.
    pub draft: bool,
    /// Estimated reading time in whole minutes.
    pub reading_time: u32,
}

/// A blog post with its raw body content.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub meta: BlogPostMeta,
    pub body: String,
}

// ============================================================================
// Case Studies
// ============================================================================

/// Project lifecycle status. Display-only, so unrecognized input falls
/// back to `Active` instead of dropping the whole case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStudyStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

impl CaseStudyStatus {
    /// Lenient parse: anything unrecognized is `Active`.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "completed" => Self::Completed,
            "archived" => Self::Archived,
            _ => Self::Active,
        }
    }
}

/// Closed project category enum. Unrecognized values are discarded to
/// `None` by the assembler rather than being passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    MobileApp,
    ChromeExtension,
    Web,
    Cli,
}

impl ProjectCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mobile-app" => Some(Self::MobileApp),
            "chrome-extension" => Some(Self::ChromeExtension),
            "web" => Some(Self::Web),
            "cli" => Some(Self::Cli),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MobileApp => "mobile-app",
            Self::ChromeExtension => "chrome-extension",
            Self::Web => "web",
            Self::Cli => "cli",
        }
    }
}

/// External links for a case study. Each field is individually
/// URL-validated; the struct only exists if at least one survived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectLinks {
    pub live: Option<String>,
    pub github: Option<String>,
    pub docs: Option<String>,
}

impl ProjectLinks {
    pub const fn is_empty(&self) -> bool {
        self.live.is_none() && self.github.is_none() && self.docs.is_none()
    }
}

/// One call-to-action button: a label plus a URL-validated target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaEntry {
    pub label: String,
    pub url: String,
}

/// Call-to-action pair. Primary and secondary are validated
/// independently; either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub primary: Option<CtaEntry>,
    pub secondary: Option<CtaEntry>,
}

impl CallToAction {
    pub const fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}

/// A named competitor and what differentiates this project from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Competitor {
    pub name: String,
    pub differentiator: String,
}

/// A marketing feature bullet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Icon key for the rendering layer; only kept when it is a string.
    pub icon: Option<String>,
}

/// SEO keyword groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Keywords {
    pub primary: Option<Vec<String>>,
    pub long_tail: Option<Vec<String>>,
}

impl Keywords {
    pub const fn is_empty(&self) -> bool {
        self.primary.is_none() && self.long_tail.is_none()
    }
}

/// Listing-level metadata for a project case study.
#[derive(Debug, Clone, Serialize)]
pub struct CaseStudyMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Free-form client-type label (e.g. "startup", "personal").
    pub client_type: String,
    pub status: CaseStudyStatus,
    pub tech_stack: Vec<String>,
    pub featured: bool,
    /// Launch date, normalized to `YYYY-MM-DD`. Primary sort key.
    pub date: String,
    pub locale: Locale,
    /// Resolved thumbnail path, site-absolute.
    pub thumbnail: Option<String>,
    /// Resolved hero image path, site-absolute.
    pub hero_image: Option<String>,
    /// Resolved gallery image paths.
    pub gallery: Option<Vec<String>>,
    /// Diagram reference name consumed by the asset pipeline.
    pub diagram: Option<String>,
    pub links: Option<ProjectLinks>,
    pub tagline: Option<String>,
    pub category: Option<ProjectCategory>,
    pub keywords: Option<Keywords>,
    pub competitors: Option<Vec<Competitor>>,
    pub cta: Option<CallToAction>,
    pub features: Option<Vec<Feature>>,
    /// Embedded video, restricted to YouTube `/embed/` URLs.
    pub video_url: Option<String>,
}

/// A case study with its raw body content.
///
/// Sub-documents (deep dive, design rationale) reuse this type: they
/// inherit the parent's metadata and only supply their own body.
#[derive(Debug, Clone, Serialize)]
pub struct CaseStudy {
    pub meta: CaseStudyMeta,
    pub body: String,
}

// ============================================================================
// About / Testimonials
// ============================================================================

/// One career timeline entry on the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub period: String,
    pub title: String,
    pub description: String,
    pub current: bool,
}

/// About-page content: ordered experience timeline plus raw body.
#[derive(Debug, Clone, Serialize)]
pub struct AboutData {
    pub experience: Vec<ExperienceEntry>,
    pub body: String,
}

/// One testimonial record, loaded verbatim from `testimonials.json`.
///
/// The testimonials file is trusted internal data, so this is the one
/// entity deserialized directly via serde with no per-field sanitization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub featured: bool,
}
