//! Artifact generators for the publication layer.
//!
//! Generates auxiliary files from the discovered route set:
//!
//! - **Sitemap**: search engine indexing with per-locale alternates (`sitemap.xml`)
//! - **Robots**: crawl policy pointing at the sitemap (`robots.txt`)
//! - **Headers**: security headers for the CDN (`_headers`)
//!
//! All generators are pure mappings from config + routes to file content,
//! executed once per build.

pub mod headers;
pub mod policy;
pub mod robots;
pub mod sitemap;

use crate::config::SiteConfig;
use crate::routes::RouteSet;
use anyhow::Result;
use std::borrow::Cow;

/// Generate all enabled artifacts for the route set.
///
/// The sitemap is the expensive artifact; robots and headers ride along on
/// the other side of the join.
pub fn build_artifacts(config: &SiteConfig, routes: &RouteSet) -> Result<()> {
    let (sitemap_result, aux_result) = rayon::join(
        || sitemap::build_sitemap(config, routes),
        || -> Result<()> {
            robots::build_robots(config)?;
            headers::build_headers(config)
        },
    );

    sitemap_result?;
    aux_result?;
    Ok(())
}

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}
