//! Validate-or-omit sanitizers for untrusted front-matter fields.
//!
//! Author-supplied documents are semi-trusted input: every field that
//! ends up in an href/src context or on the filesystem path goes through
//! one of these functions. The contract across the whole module is the
//! same: a sanitizer never panics and never errors; invalid input
//! degrades to `None` (or to dropping the one bad element), so a present
//! field is always a fully valid one.

use crate::content::types::{
    CallToAction, Competitor, CtaEntry, Feature, Keywords, ProjectLinks,
};
use serde_json::Value;
use url::Url;

// ============================================================================
// Slug / URL Validation
// ============================================================================

/// Check a caller-supplied slug before any filesystem access.
///
/// Valid slugs match `^[A-Za-z0-9_-]+$`: no separators, no dots, no
/// path characters. Every slug-accepting query entry point calls this
/// first and short-circuits to "not found" on failure.
pub fn is_valid_slug(input: &str) -> bool {
    !input.is_empty()
        && input
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// True only for absolute `http`/`https` URLs.
///
/// Parse failures are invalid input, not errors; callers omit the field.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// True only for YouTube embed URLs: `http`/`https` scheme,
/// `youtube.com` or `www.youtube.com` host, `/embed/` path.
/// Watch-page URLs, foreign hosts and foreign schemes all fail.
pub fn is_youtube_embed_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    matches!(url.scheme(), "http" | "https")
        && matches!(url.host_str(), Some("youtube.com" | "www.youtube.com"))
        && url.path().starts_with("/embed/")
}

/// Resolve an author-supplied image path against the entity's asset
/// directory.
///
/// - protocol-relative (`//...`) and traversal (`..`) inputs resolve to
///   an empty string, which callers collapse to absence
/// - site-absolute paths (single leading `/`) pass through unchanged
/// - bare filenames are rewritten to `/images/<kind>/<owner_slug>/<name>`
pub fn resolve_asset_path(value: &str, kind: &str, owner_slug: &str) -> String {
    if value.starts_with("//") || value.contains("..") {
        return String::new();
    }
    if value.starts_with('/') {
        return value.to_owned();
    }
    format!("/images/{kind}/{owner_slug}/{value}")
}

// ============================================================================
// Structured-Field Sanitizers
// ============================================================================

/// Sanitize the `links` object: up to three URL-valid fields
/// (`live`, `github`, `docs`). Each field drops individually; an object
/// with nothing left collapses to `None`.
pub fn sanitize_links(value: Option<&Value>) -> Option<ProjectLinks> {
    let obj = value?.as_object()?;
    let field = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .filter(|s| is_valid_url(s))
            .map(str::to_owned)
    };

    let links = ProjectLinks {
        live: field("live"),
        github: field("github"),
        docs: field("docs"),
    };
    (!links.is_empty()).then_some(links)
}

/// Sanitize the call-to-action pair. Each entry needs both a string
/// label and a URL-valid target; entries drop independently.
pub fn sanitize_cta(value: Option<&Value>) -> Option<CallToAction> {
    let obj = value?.as_object()?;
    let entry = |key: &str| {
        let entry = obj.get(key)?.as_object()?;
        let label = entry.get("label")?.as_str()?;
        let url = entry.get("url")?.as_str()?;
        is_valid_url(url).then(|| CtaEntry {
            label: label.to_owned(),
            url: url.to_owned(),
        })
    };

    let cta = CallToAction {
        primary: entry("primary"),
        secondary: entry("secondary"),
    };
    (!cta.is_empty()).then_some(cta)
}

/// Sanitize the competitor list: entries must carry both `name` and
/// `differentiator` strings; an empty surviving list collapses to `None`.
pub fn sanitize_competitors(value: Option<&Value>) -> Option<Vec<Competitor>> {
    let items = value?.as_array()?;
    let competitors: Vec<_> = items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            Some(Competitor {
                name: obj.get("name")?.as_str()?.to_owned(),
                differentiator: obj.get("differentiator")?.as_str()?.to_owned(),
            })
        })
        .collect();
    (!competitors.is_empty()).then_some(competitors)
}

/// Sanitize the feature list: `title` and `description` are required
/// strings, `icon` is kept only when it is a string.
pub fn sanitize_features(value: Option<&Value>) -> Option<Vec<Feature>> {
    let items = value?.as_array()?;
    let features: Vec<_> = items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            Some(Feature {
                title: obj.get("title")?.as_str()?.to_owned(),
                description: obj.get("description")?.as_str()?.to_owned(),
                icon: obj.get("icon").and_then(Value::as_str).map(str::to_owned),
            })
        })
        .collect();
    (!features.is_empty()).then_some(features)
}

/// Sanitize keyword groups: `primary`/`longTail` string arrays with
/// non-string members filtered out. `None` when neither group survives.
pub fn sanitize_keywords(value: Option<&Value>) -> Option<Keywords> {
    let obj = value?.as_object()?;
    let group = |key: &str| {
        let items = obj.get(key)?.as_array()?;
        let strings: Vec<String> = items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect();
        (!strings.is_empty()).then_some(strings)
    };

    let keywords = Keywords {
        primary: group("primary"),
        long_tail: group("longTail"),
    };
    (!keywords.is_empty()).then_some(keywords)
}

/// Sanitize an image list: non-empty strings only, each resolved via
/// [`resolve_asset_path`]; paths that resolve to empty are dropped.
pub fn sanitize_images(value: Option<&Value>, kind: &str, owner_slug: &str) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    let images: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(|s| resolve_asset_path(s, kind, owner_slug))
        .filter(|s| !s.is_empty())
        .collect();
    (!images.is_empty()).then_some(images)
}

/// Sanitize a single image field (thumbnail, hero) to a resolved path.
pub fn sanitize_image(value: Option<&Value>, kind: &str, owner_slug: &str) -> Option<String> {
    let raw = value?.as_str()?;
    if raw.is_empty() {
        return None;
    }
    let resolved = resolve_asset_path(raw, kind, owner_slug);
    (!resolved.is_empty()).then_some(resolved)
}

/// Sanitize the embedded-video field: YouTube `/embed/` URLs only.
pub fn sanitize_video_url(value: Option<&Value>) -> Option<String> {
    let raw = value?.as_str()?;
    is_youtube_embed_url(raw).then(|| raw.to_owned())
}
