//! Query command implementation.
//!
//! Dumps the resolved locale records as JSON: registry data plus resolved
//! absolute nav hrefs and link classification. Gives page templates and
//! deployment scripts one machine-readable view of the registry.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::core::{Locale, SUPPORTED_LOCALES};
use crate::log;
use crate::registry::{Company, Registry, Social};

/// Resolved view of one locale record.
#[derive(Debug, Serialize)]
struct LocaleReport<'a> {
    locale: Locale,
    origin: &'a str,
    name: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    company: &'static Company,
    social: &'static Social,
    nav: Vec<NavReport>,
}

/// One navigation entry with its resolved href.
#[derive(Debug, Serialize)]
struct NavReport {
    name: &'static str,
    path: &'static str,
    href: String,
    external: bool,
}

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let registry = config.registry();

    // Unrecognized locale tags silently fall back to the default
    let locales: Vec<Locale> = match &args.locale {
        Some(tag) => vec![Locale::parse_or_default(tag)],
        None => SUPPORTED_LOCALES.to_vec(),
    };

    let reports: Vec<LocaleReport<'_>> = locales
        .iter()
        .map(|&locale| locale_report(&registry, locale))
        .collect();

    let json = if args.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };

    output_results(&json, args)
}

fn locale_report<'r>(registry: &'r Registry<'_>, locale: Locale) -> LocaleReport<'r> {
    let site = registry.site(locale);

    let nav = site
        .nav
        .iter()
        .map(|entry| NavReport {
            name: entry.name,
            path: entry.path,
            href: registry.absolute_url(entry.path, locale),
            external: registry.classify(entry.path).is_external(),
        })
        .collect();

    LocaleReport {
        locale,
        origin: registry.origin(locale),
        name: site.name,
        title: site.title,
        description: site.description,
        keywords: site.keywords,
        company: &site.company,
        social: &site.social,
        nav,
    }
}

fn output_results(json: &str, args: &QueryArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write query output to {}", path.display()))?;
            log!("query"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
