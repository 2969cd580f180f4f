//! Entity assembly from the loose metadata map.
//!
//! Assemblers are pure: metadata map + slug + locale in, typed entity
//! out. Required simple fields use lenient string coercion (a number in
//! a title position is stringified, a missing title becomes `""`);
//! everything compound or externally-facing goes through the sanitizers.

use crate::content::{
    derive::{normalize_date, reading_time},
    sanitize,
    types::{
        AboutData, BlogPostMeta, CaseStudyMeta, CaseStudyStatus, ExperienceEntry, Locale,
        ProjectCategory,
    },
};
use serde_json::{Map, Value};

// ============================================================================
// Field Access Helpers
// ============================================================================

/// Read a required string field with lenient coercion.
///
/// Strings pass through; numbers and bools are stringified; anything
/// else (including absence) degrades to `""`. Assembly never fails on
/// field shape.
fn coerce_str(meta: &Map<String, Value>, key: &str) -> String {
    match meta.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Read an optional plain string field; non-strings are absent.
fn opt_str(meta: &Map<String, Value>, key: &str) -> Option<String> {
    meta.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Read a boolean flag, defaulting to false.
fn flag(meta: &Map<String, Value>, key: &str) -> bool {
    meta.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Read a string list, dropping non-string members. Missing or
/// wrong-shaped input yields an empty list (these fields default to
/// `[]`, not to absence).
fn str_list(meta: &Map<String, Value>, key: &str) -> Vec<String> {
    meta.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Blog
// ============================================================================

/// Assemble blog post metadata. The body is needed for the derived
/// reading time but is not stored here.
pub fn assemble_blog_post_meta(
    meta: &Map<String, Value>,
    slug: &str,
    locale: Locale,
    body: &str,
) -> BlogPostMeta {
    BlogPostMeta {
        slug: slug.to_owned(),
        title: coerce_str(meta, "title"),
        description: coerce_str(meta, "description"),
        date: meta.get("date").map(normalize_date).unwrap_or_default(),
        tags: str_list(meta, "tags"),
        locale,
        draft: flag(meta, "draft"),
        reading_time: reading_time(body, locale),
    }
}

// ============================================================================
// Case Studies
// ============================================================================

/// Asset-directory kind segment for case studies.
const PROJECTS_KIND: &str = "projects";

/// Assemble case study metadata, routing every compound optional field
/// through its sanitizer.
pub fn assemble_case_study_meta(
    meta: &Map<String, Value>,
    slug: &str,
    locale: Locale,
) -> CaseStudyMeta {
    CaseStudyMeta {
        slug: slug.to_owned(),
        title: coerce_str(meta, "title"),
        description: coerce_str(meta, "description"),
        client_type: coerce_str(meta, "clientType"),
        status: CaseStudyStatus::parse_lenient(&coerce_str(meta, "status")),
        tech_stack: str_list(meta, "techStack"),
        featured: flag(meta, "featured"),
        date: meta.get("date").map(normalize_date).unwrap_or_default(),
        locale,
        thumbnail: sanitize::sanitize_image(meta.get("thumbnail"), PROJECTS_KIND, slug),
        hero_image: sanitize::sanitize_image(meta.get("heroImage"), PROJECTS_KIND, slug),
        gallery: sanitize::sanitize_images(meta.get("gallery"), PROJECTS_KIND, slug),
        diagram: opt_str(meta, "diagram"),
        links: sanitize::sanitize_links(meta.get("links")),
        tagline: opt_str(meta, "tagline"),
        category: meta
            .get("category")
            .and_then(Value::as_str)
            .and_then(ProjectCategory::parse),
        keywords: sanitize::sanitize_keywords(meta.get("keywords")),
        competitors: sanitize::sanitize_competitors(meta.get("competitors")),
        cta: sanitize::sanitize_cta(meta.get("cta")),
        features: sanitize::sanitize_features(meta.get("features")),
        video_url: sanitize::sanitize_video_url(meta.get("videoUrl")),
    }
}

// ============================================================================
// About
// ============================================================================

/// Assemble about-page data: the experience timeline plus raw body.
/// Entries missing a required string field are dropped, same rule as
/// the structured-field sanitizers.
pub fn assemble_about(meta: &Map<String, Value>, body: String) -> AboutData {
    let experience = meta
        .get("experience")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let obj = item.as_object()?;
                    Some(ExperienceEntry {
                        period: obj.get("period")?.as_str()?.to_owned(),
                        title: obj.get("title")?.as_str()?.to_owned(),
                        description: obj.get("description")?.as_str()?.to_owned(),
                        current: obj.get("current").and_then(Value::as_bool).unwrap_or(false),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    AboutData { experience, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    // ------------------------------------------------------------------------
    // Blog assembly
    // ------------------------------------------------------------------------

    #[test]
    fn test_blog_post_defaults() {
        let meta = map(json!({
            "title": "Hello",
            "description": "D",
            "date": "2024-01-15"
        }));
        let body = vec!["word"; 400].join(" ");
        let post = assemble_blog_post_meta(&meta, "hello", Locale::En, &body);

        assert_eq!(post.slug, "hello");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.date, "2024-01-15");
        assert_eq!(post.tags, Vec::<String>::new());
        assert!(!post.draft);
        assert_eq!(post.reading_time, 2);
    }

    #[test]
    fn test_blog_post_lenient_required_fields() {
        // A number where a string belongs is stringified, not rejected
        let meta = map(json!({"title": 42, "description": true, "date": 20240115}));
        let post = assemble_blog_post_meta(&meta, "odd", Locale::En, "");
        assert_eq!(post.title, "42");
        assert_eq!(post.description, "true");
        assert_eq!(post.date, "20240115");
    }

    #[test]
    fn test_blog_post_missing_fields_become_empty() {
        let post = assemble_blog_post_meta(&Map::new(), "empty", Locale::Ko, "");
        assert_eq!(post.title, "");
        assert_eq!(post.date, "");
        assert_eq!(post.reading_time, 0);
    }

    #[test]
    fn test_blog_post_tags_filter_non_strings() {
        let meta = map(json!({"tags": ["rust", 1, "web", null]}));
        let post = assemble_blog_post_meta(&meta, "x", Locale::En, "");
        assert_eq!(post.tags, vec!["rust", "web"]);
    }

    // ------------------------------------------------------------------------
    // Case study assembly
    // ------------------------------------------------------------------------

    #[test]
    fn test_case_study_full_marketing_cluster() {
        let meta = map(json!({
            "title": "My App",
            "description": "An app",
            "clientType": "personal",
            "status": "completed",
            "techStack": ["rust", "svelte"],
            "featured": true,
            "date": "2024-03-01T09:00:00Z",
            "thumbnail": "thumb.png",
            "heroImage": "/images/custom/hero.png",
            "gallery": ["a.png", "b.png"],
            "diagram": "architecture",
            "links": {"live": "https://app.example.com"},
            "tagline": "Do the thing",
            "category": "mobile-app",
            "keywords": {"primary": ["app"]},
            "competitors": [{"name": "Other", "differentiator": "ours is offline"}],
            "cta": {"primary": {"label": "Get it", "url": "https://app.example.com"}},
            "features": [{"title": "Fast", "description": "under 1ms"}],
            "videoUrl": "https://www.youtube.com/embed/xyz"
        }));
        let cs = assemble_case_study_meta(&meta, "my-app", Locale::En);

        assert_eq!(cs.status, CaseStudyStatus::Completed);
        assert_eq!(cs.tech_stack, vec!["rust", "svelte"]);
        assert!(cs.featured);
        assert_eq!(cs.date, "2024-03-01");
        assert_eq!(cs.thumbnail.as_deref(), Some("/images/projects/my-app/thumb.png"));
        assert_eq!(cs.hero_image.as_deref(), Some("/images/custom/hero.png"));
        assert_eq!(cs.gallery.as_ref().unwrap().len(), 2);
        assert_eq!(cs.diagram.as_deref(), Some("architecture"));
        assert_eq!(cs.category, Some(ProjectCategory::MobileApp));
        assert_eq!(cs.video_url.as_deref(), Some("https://www.youtube.com/embed/xyz"));
    }

    #[test]
    fn test_case_study_minimal() {
        let meta = map(json!({"title": "Bare", "description": "B", "date": "2022-01-01"}));
        let cs = assemble_case_study_meta(&meta, "bare", Locale::Ko);

        assert_eq!(cs.status, CaseStudyStatus::Active);
        assert_eq!(cs.tech_stack, Vec::<String>::new());
        assert!(!cs.featured);
        assert!(cs.thumbnail.is_none());
        assert!(cs.links.is_none());
        assert!(cs.category.is_none());
        assert!(cs.cta.is_none());
        assert!(cs.video_url.is_none());
    }

    #[test]
    fn test_case_study_unrecognized_category_discarded() {
        let meta = map(json!({"category": "desktop"}));
        let cs = assemble_case_study_meta(&meta, "x", Locale::En);
        assert!(cs.category.is_none());
    }

    #[test]
    fn test_case_study_watch_url_dropped() {
        let meta = map(json!({"videoUrl": "https://www.youtube.com/watch?v=xyz"}));
        let cs = assemble_case_study_meta(&meta, "x", Locale::En);
        assert!(cs.video_url.is_none());
    }

    // ------------------------------------------------------------------------
    // About assembly
    // ------------------------------------------------------------------------

    #[test]
    fn test_about_experience_entries() {
        let meta = map(json!({
            "experience": [
                {"period": "2022-", "title": "Indie dev", "description": "Apps", "current": true},
                {"period": "2019-2022", "title": "Engineer", "description": "Backend"},
                {"period": "incomplete"}
            ]
        }));
        let about = assemble_about(&meta, "About body".into());

        assert_eq!(about.experience.len(), 2);
        assert!(about.experience[0].current);
        assert!(!about.experience[1].current);
        assert_eq!(about.body, "About body");
    }

    #[test]
    fn test_about_no_experience() {
        let about = assemble_about(&Map::new(), "Body".into());
        assert!(about.experience.is_empty());
    }
}
