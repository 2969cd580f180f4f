//! Nabi - content engine CLI for a bilingual personal-branding site.

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use nabi::{
    SiteConfig, log,
    content::{ContentStore, Locale},
};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let store = ContentStore::new(root.join(&config.content.root));

    match &cli.command {
        Commands::Check => check_content(&store, &config),
        Commands::List { locale } => list_content(&store, locale),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let config = SiteConfig::from_path(&config_path)?;
    config.validate()?;
    Ok(config)
}

/// Scan every entity kind for both locales, reporting counts and
/// per-document problems. Problems are warnings, not failures: the
/// sanitizers already degraded anything invalid to absence.
fn check_content(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    log!("check"; "site: {} ({})", config.site.name, store.root().display());

    for locale in Locale::ALL {
        let posts = store.list_blog_posts(locale)?;
        for post in &posts {
            if post.title.is_empty() {
                log!("warn"; "blog/{} [{locale}]: missing title", post.slug);
            }
            if post.date.is_empty() {
                log!("warn"; "blog/{} [{locale}]: missing date", post.slug);
            }
        }

        let studies = store.list_case_studies(locale)?;
        let mut deep_dives = 0;
        let mut design_docs = 0;
        for study in &studies {
            if study.title.is_empty() {
                log!("warn"; "projects/{} [{locale}]: missing title", study.slug);
            }
            if store.case_study_has_deep_dive(locale, &study.slug) {
                deep_dives += 1;
            }
            if store.case_study_has_design_doc(locale, &study.slug) {
                design_docs += 1;
            }
        }

        let about = if store.get_about_content(locale)?.is_some() {
            "present"
        } else {
            "absent"
        };

        log!("check";
            "[{locale}] {} posts, {} case studies ({deep_dives} deep dives, {design_docs} design docs), about {about}",
            posts.len(),
            studies.len(),
        );
    }

    let testimonials = store.list_testimonials()?;
    log!("check"; "{} testimonials", testimonials.len());

    Ok(())
}

/// Print the sorted listings for one locale.
fn list_content(store: &ContentStore, locale: &str) -> Result<()> {
    let Ok(locale) = locale.parse::<Locale>() else {
        bail!("unknown locale: {locale} (expected en or ko)");
    };

    let posts = store.list_blog_posts(locale)?;
    log!("list"; "{} blog posts [{locale}]", posts.len());
    for post in &posts {
        log!("list"; "  {}  {} ({}, {} min)", post.date, post.title, post.slug, post.reading_time);
    }

    let studies = store.list_case_studies(locale)?;
    log!("list"; "{} case studies [{locale}]", studies.len());
    for study in &studies {
        log!("list"; "  {}  {} ({})", study.date, study.title, study.slug);
    }

    Ok(())
}
