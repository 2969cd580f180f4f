//! Directory scanners and the content query API.
//!
//! Every operation is a stateless, synchronous read-and-transform: no
//! cache, no shared state, each call re-reads from disk. Absence
//! (missing directory, missing locale file, invalid slug) resolves to
//! an empty list or `None`; only structural I/O failure propagates as
//! an error, which aborts the build loudly.
//!
//! # On-disk layout
//!
//! ```text
//! <root>/
//!   blog/<slug>/<locale>.mdx
//!   projects/<slug>/<locale>.mdx
//!   projects/<slug>/casestudy.<locale>.mdx   (optional deep dive)
//!   projects/<slug>/design.<locale>.mdx      (optional design rationale)
//!   about/<locale>.mdx
//!   testimonials.json
//! ```

use crate::content::{
    assemble::{assemble_about, assemble_blog_post_meta, assemble_case_study_meta},
    frontmatter::{Document, parse_document},
    sanitize::is_valid_slug,
    types::{AboutData, BlogPost, BlogPostMeta, CaseStudy, CaseStudyMeta, Locale, Testimonial},
};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Document file extension for locale documents.
pub const DOC_EXT: &str = "mdx";

const BLOG_DIR: &str = "blog";
const PROJECTS_DIR: &str = "projects";
const ABOUT_DIR: &str = "about";
const TESTIMONIALS_FILE: &str = "testimonials.json";

/// Sub-document file-name prefixes under a project directory.
const DEEP_DIVE_PREFIX: &str = "casestudy";
const DESIGN_DOC_PREFIX: &str = "design";

/// File-based content store rooted at the site's content directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content root this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // Blog
    // ========================================================================

    /// List published blog posts for a locale, newest first.
    ///
    /// Draft posts are excluded. A missing `blog/` directory yields an
    /// empty list; a slug directory without this locale's document is
    /// skipped silently (partial localization is expected).
    pub fn list_blog_posts(&self, locale: Locale) -> Result<Vec<BlogPostMeta>> {
        let mut posts = Vec::new();
        for slug in self.scan_slugs(BLOG_DIR) {
            let path = self.locale_doc(BLOG_DIR, &slug, locale);
            let Some(doc) = read_document(&path)? else {
                continue;
            };
            let meta = assemble_blog_post_meta(&doc.metadata, &slug, locale, &doc.body);
            if meta.draft {
                continue;
            }
            posts.push(meta);
        }
        sort_by_date_desc(&mut posts, |p| p.date.as_str());
        Ok(posts)
    }

    /// Fetch one blog post by slug, body included.
    ///
    /// Invalid slugs return `None` without touching the filesystem.
    /// Draft posts are still fetchable here; only listings exclude them.
    pub fn get_blog_post(&self, locale: Locale, slug: &str) -> Result<Option<BlogPost>> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }
        let path = self.locale_doc(BLOG_DIR, slug, locale);
        let Some(doc) = read_document(&path)? else {
            return Ok(None);
        };
        let meta = assemble_blog_post_meta(&doc.metadata, slug, locale, &doc.body);
        Ok(Some(BlogPost {
            meta,
            body: doc.body,
        }))
    }

    // ========================================================================
    // Case Studies
    // ========================================================================

    /// List case studies for a locale, newest launch first.
    pub fn list_case_studies(&self, locale: Locale) -> Result<Vec<CaseStudyMeta>> {
        let mut studies = Vec::new();
        for slug in self.scan_slugs(PROJECTS_DIR) {
            let path = self.locale_doc(PROJECTS_DIR, &slug, locale);
            let Some(doc) = read_document(&path)? else {
                continue;
            };
            studies.push(assemble_case_study_meta(&doc.metadata, &slug, locale));
        }
        sort_by_date_desc(&mut studies, |s| s.date.as_str());
        Ok(studies)
    }

    /// Fetch one case study by slug, body included.
    pub fn get_case_study(&self, locale: Locale, slug: &str) -> Result<Option<CaseStudy>> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }
        let path = self.locale_doc(PROJECTS_DIR, slug, locale);
        let Some(doc) = read_document(&path)? else {
            return Ok(None);
        };
        let meta = assemble_case_study_meta(&doc.metadata, slug, locale);
        Ok(Some(CaseStudy {
            meta,
            body: doc.body,
        }))
    }

    /// Whether a deep-dive sub-document exists for this case study.
    pub fn case_study_has_deep_dive(&self, locale: Locale, slug: &str) -> bool {
        self.sub_doc_exists(DEEP_DIVE_PREFIX, locale, slug)
    }

    /// Fetch the deep-dive sub-document. The parent case study must
    /// exist: an orphan sub-document is unreachable by design. The
    /// result inherits the parent's metadata and carries only the
    /// sub-document's body.
    pub fn get_case_study_deep_dive(
        &self,
        locale: Locale,
        slug: &str,
    ) -> Result<Option<CaseStudy>> {
        self.get_sub_doc(DEEP_DIVE_PREFIX, locale, slug)
    }

    /// Whether a design-rationale sub-document exists for this case study.
    pub fn case_study_has_design_doc(&self, locale: Locale, slug: &str) -> bool {
        self.sub_doc_exists(DESIGN_DOC_PREFIX, locale, slug)
    }

    /// Fetch the design-rationale sub-document; same orphan rule as the
    /// deep dive.
    pub fn get_case_study_design_doc(
        &self,
        locale: Locale,
        slug: &str,
    ) -> Result<Option<CaseStudy>> {
        self.get_sub_doc(DESIGN_DOC_PREFIX, locale, slug)
    }

    // ========================================================================
    // About / Testimonials
    // ========================================================================

    /// Load the singleton about page for a locale.
    pub fn get_about_content(&self, locale: Locale) -> Result<Option<AboutData>> {
        let path = self
            .root
            .join(ABOUT_DIR)
            .join(format!("{locale}.{DOC_EXT}"));
        let Some(doc) = read_document(&path)? else {
            return Ok(None);
        };
        Ok(Some(assemble_about(&doc.metadata, doc.body)))
    }

    /// Load all testimonials from the flat JSON collection file.
    ///
    /// The file is trusted internal data: a missing file is an empty
    /// list, but malformed JSON is a loud build failure.
    pub fn list_testimonials(&self) -> Result<Vec<Testimonial>> {
        let path = self.root.join(TESTIMONIALS_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid testimonials file {}", path.display()))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Enumerate slug-candidate subdirectories of one entity kind.
    ///
    /// Names come from the trusted local filesystem, so no slug
    /// validation here. Sorted for deterministic listing order; ties on
    /// date later keep this order (stable sort).
    fn scan_slugs(&self, kind: &str) -> Vec<String> {
        let dir = self.root.join(kind);
        if !dir.is_dir() {
            return Vec::new();
        }
        let mut slugs: Vec<String> = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_owned))
            .collect();
        slugs.sort();
        slugs
    }

    fn locale_doc(&self, kind: &str, slug: &str, locale: Locale) -> PathBuf {
        self.root
            .join(kind)
            .join(slug)
            .join(format!("{locale}.{DOC_EXT}"))
    }

    fn sub_doc_path(&self, prefix: &str, slug: &str, locale: Locale) -> PathBuf {
        self.root
            .join(PROJECTS_DIR)
            .join(slug)
            .join(format!("{prefix}.{locale}.{DOC_EXT}"))
    }

    /// Existence check for a sub-document: same validation discipline
    /// as get-by-slug, no parse needed.
    fn sub_doc_exists(&self, prefix: &str, locale: Locale, slug: &str) -> bool {
        is_valid_slug(slug) && self.sub_doc_path(prefix, slug, locale).is_file()
    }

    fn get_sub_doc(&self, prefix: &str, locale: Locale, slug: &str) -> Result<Option<CaseStudy>> {
        // Parent lookup validates the slug; an orphan sub-document
        // whose parent is missing stays unreachable.
        let Some(parent) = self.get_case_study(locale, slug)? else {
            return Ok(None);
        };
        let path = self.sub_doc_path(prefix, slug, locale);
        let Some(doc) = read_document(&path)? else {
            return Ok(None);
        };
        Ok(Some(CaseStudy {
            meta: parent.meta,
            body: doc.body,
        }))
    }
}

/// Read and parse one locale document. Absence is `None`; read failures
/// on an existing path propagate.
fn read_document(path: &Path) -> Result<Option<Document>> {
    if !path.is_file() {
        return Ok(None);
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Some(parse_document(&raw)))
}

/// Sort descending by the primary date field. `sort_by` is stable, so
/// equal dates keep scan order.
fn sort_by_date_desc<T>(items: &mut [T], date: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| date(b).cmp(date(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn store(tmp: &TempDir) -> ContentStore {
        ContentStore::new(tmp.path())
    }

    // ------------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------------

    #[test]
    fn test_missing_kind_dirs_yield_empty() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        assert!(store.list_blog_posts(Locale::En).unwrap().is_empty());
        assert!(store.list_case_studies(Locale::Ko).unwrap().is_empty());
        assert!(store.list_testimonials().unwrap().is_empty());
        assert!(store.get_about_content(Locale::En).unwrap().is_none());
    }

    #[test]
    fn test_draft_excluded_from_listing_but_fetchable() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "blog/published/en.mdx",
            "---\ntitle: Pub\ndate: 2024-01-01\n---\nbody",
        );
        write(
            tmp.path(),
            "blog/secret/en.mdx",
            "---\ntitle: Secret\ndate: 2024-06-01\ndraft: true\n---\nbody",
        );
        let store = store(&tmp);

        let posts = store.list_blog_posts(Locale::En).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "published");

        // Direct fetch still works for drafts
        let draft = store.get_blog_post(Locale::En, "secret").unwrap().unwrap();
        assert!(draft.meta.draft);
    }

    #[test]
    fn test_case_studies_sorted_newest_first() {
        let tmp = TempDir::new().unwrap();
        for (slug, date) in [("a", "2022-01-01"), ("b", "2024-01-01"), ("c", "2023-01-01")] {
            write(
                tmp.path(),
                &format!("projects/{slug}/en.mdx"),
                &format!("---\ntitle: {slug}\ndate: {date}\n---\nbody"),
            );
        }
        let store = store(&tmp);

        let dates: Vec<_> = store
            .list_case_studies(Locale::En)
            .unwrap()
            .into_iter()
            .map(|s| s.date)
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2023-01-01", "2022-01-01"]);
    }

    #[test]
    fn test_partial_localization_skipped_silently() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "blog/both/en.mdx",
            "---\ntitle: Both\ndate: 2024-01-01\n---\nbody",
        );
        write(
            tmp.path(),
            "blog/both/ko.mdx",
            "---\ntitle: 둘다\ndate: 2024-01-01\n---\n본문",
        );
        write(
            tmp.path(),
            "blog/english-only/en.mdx",
            "---\ntitle: EO\ndate: 2024-02-01\n---\nbody",
        );
        let store = store(&tmp);

        assert_eq!(store.list_blog_posts(Locale::En).unwrap().len(), 2);
        let ko = store.list_blog_posts(Locale::Ko).unwrap();
        assert_eq!(ko.len(), 1);
        assert_eq!(ko[0].slug, "both");
    }

    // ------------------------------------------------------------------------
    // Slug safety
    // ------------------------------------------------------------------------

    #[test]
    fn test_unsafe_slugs_resolve_to_not_found() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "projects/real/en.mdx",
            "---\ntitle: Real\ndate: 2024-01-01\n---\nbody",
        );
        let store = store(&tmp);

        for bad in ["../real", "a/b", "..", "white space", "dot.dot", ""] {
            assert!(store.get_blog_post(Locale::En, bad).unwrap().is_none());
            assert!(store.get_case_study(Locale::En, bad).unwrap().is_none());
            assert!(!store.case_study_has_deep_dive(Locale::En, bad));
            assert!(!store.case_study_has_design_doc(Locale::En, bad));
            assert!(
                store
                    .get_case_study_deep_dive(Locale::En, bad)
                    .unwrap()
                    .is_none()
            );
        }
    }

    // ------------------------------------------------------------------------
    // Sub-documents
    // ------------------------------------------------------------------------

    #[test]
    fn test_sub_doc_inherits_parent_metadata() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "projects/app/en.mdx",
            "---\ntitle: App\ndescription: D\ndate: 2024-01-01\nfeatured: true\n---\nmain body",
        );
        write(
            tmp.path(),
            "projects/app/casestudy.en.mdx",
            "---\ntitle: ignored\n---\ndeep dive body",
        );
        let store = store(&tmp);

        assert!(store.case_study_has_deep_dive(Locale::En, "app"));
        let deep = store
            .get_case_study_deep_dive(Locale::En, "app")
            .unwrap()
            .unwrap();
        // Metadata comes from the parent, body from the sub-document
        assert_eq!(deep.meta.title, "App");
        assert!(deep.meta.featured);
        assert_eq!(deep.body, "deep dive body");
    }

    #[test]
    fn test_orphan_sub_doc_unreachable() {
        let tmp = TempDir::new().unwrap();
        // design.en.mdx exists but the parent en.mdx does not
        write(
            tmp.path(),
            "projects/orphan/design.en.mdx",
            "---\ntitle: x\n---\ndesign body",
        );
        let store = store(&tmp);

        assert!(
            store
                .get_case_study_design_doc(Locale::En, "orphan")
                .unwrap()
                .is_none()
        );
        // The bare existence check still sees the file
        assert!(store.case_study_has_design_doc(Locale::En, "orphan"));
    }

    #[test]
    fn test_sub_doc_absent() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "projects/app/en.mdx",
            "---\ntitle: App\ndate: 2024-01-01\n---\nbody",
        );
        let store = store(&tmp);

        assert!(!store.case_study_has_deep_dive(Locale::En, "app"));
        assert!(
            store
                .get_case_study_deep_dive(Locale::En, "app")
                .unwrap()
                .is_none()
        );
    }

    // ------------------------------------------------------------------------
    // About / Testimonials
    // ------------------------------------------------------------------------

    #[test]
    fn test_about_content() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "about/en.mdx",
            concat!(
                "---\n",
                "experience:\n",
                "  - period: \"2022-\"\n",
                "    title: Indie dev\n",
                "    description: Building apps\n",
                "    current: true\n",
                "---\n",
                "About me."
            ),
        );
        let store = store(&tmp);

        let about = store.get_about_content(Locale::En).unwrap().unwrap();
        assert_eq!(about.experience.len(), 1);
        assert!(about.experience[0].current);
        assert_eq!(about.body, "About me.");
        assert!(store.get_about_content(Locale::Ko).unwrap().is_none());
    }

    #[test]
    fn test_testimonials_load() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "testimonials.json",
            r#"[
                {"quote": "Great", "author": "Kim", "role": "CTO", "company": "Acme", "featured": true},
                {"quote": "Solid", "author": "Lee", "role": "PM", "company": "Beta"}
            ]"#,
        );
        let store = store(&tmp);

        let testimonials = store.list_testimonials().unwrap();
        assert_eq!(testimonials.len(), 2);
        assert!(testimonials[0].featured);
        assert!(!testimonials[1].featured);
    }

    #[test]
    fn test_testimonials_malformed_is_loud() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "testimonials.json", "{ not json ]");
        assert!(store(&tmp).list_testimonials().is_err());
    }

    // ------------------------------------------------------------------------
    // End-to-end scenario
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_blog_post_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let body = vec!["word"; 400].join(" ");
        write(
            tmp.path(),
            "blog/hello/en.mdx",
            &format!("---\ntitle: Hello\ndescription: D\ndate: 2024-01-15\n---\n{body}"),
        );
        let store = store(&tmp);

        let post = store.get_blog_post(Locale::En, "hello").unwrap().unwrap();
        assert_eq!(post.meta.title, "Hello");
        assert_eq!(post.meta.date, "2024-01-15");
        assert_eq!(post.meta.reading_time, 2);
        assert_eq!(post.meta.tags, Vec::<String>::new());
        assert!(!post.meta.draft);
        assert_eq!(post.body, body);
    }
}
