//! Content loading and sanitization.
//!
//! The core of the site: pure functions that read the per-locale
//! document tree, parse front matter, sanitize untrusted fields, derive
//! computed values, and expose a typed query API.
//!
//! # Data flow
//!
//! ```text
//! ContentStore (query API)
//!     │
//!     └── directory scan ──► frontmatter::parse_document
//!                                  │
//!                   ┌──────────────┴──────────────┐
//!                   ▼                             ▼
//!             sanitize::*                    derive::*
//!        (validate-or-omit)         (reading time, dates)
//!                   └──────────────┬──────────────┘
//!                                  ▼
//!                            assemble::*
//!                                  │
//!                                  ▼
//!                       typed entity (types::*)
//! ```

pub mod assemble;
pub mod derive;
pub mod frontmatter;
pub mod sanitize;
pub mod store;
pub mod types;

pub use store::{ContentStore, DOC_EXT};
pub use types::{
    AboutData, BlogPost, BlogPostMeta, CaseStudy, CaseStudyMeta, Locale, Testimonial,
};
