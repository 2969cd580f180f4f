//! Nabi - content engine for a bilingual personal-branding static site.
//!
//! Everything is derived deterministically from files on disk at build
//! time: no server, no database, no cache. The [`content`] module is the
//! core: loading, sanitization, and the typed query API the rendering
//! layer consumes. [`config`] holds the immutable site configuration.

pub mod config;
pub mod content;
pub mod logger;

pub use config::SiteConfig;
pub use content::{ContentStore, Locale};
