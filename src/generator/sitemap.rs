//! Sitemap generation.
//!
//! Generates a sitemap.xml listing every discovered route with crawl
//! hints and per-locale alternate links.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://en.raytron.group/</loc>
//!     <xhtml:link rel="alternate" hreflang="en" href="https://en.raytron.group/"/>
//!     <xhtml:link rel="alternate" hreflang="zh-CN" href="https://cn.raytron.group/"/>
//!     <xhtml:link rel="alternate" hreflang="x-default" href="https://en.raytron.group/"/>
//!     <lastmod>2026-08-07T00:00:00Z</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::config::SiteConfig;
use crate::core::{Locale, SUPPORTED_LOCALES, UrlPath};
use crate::generator::minify_xml;
use crate::generator::policy::{ChangeFrequency, change_frequency, priority};
use crate::log;
use crate::registry::Registry;
use crate::routes::RouteSet;
use crate::utils::date::DateTimeUtc;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Hreflang value for the locale-fallback alternate.
const X_DEFAULT: &str = "x-default";

/// Build sitemap if enabled.
pub fn build_sitemap(config: &SiteConfig, routes: &RouteSet) -> Result<()> {
    if config.build.sitemap.enable {
        let lastmod = config.build.lastmod.unwrap_or_else(DateTimeUtc::now);
        let sitemap = Sitemap::build(&config.registry(), routes, lastmod);
        sitemap.write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: String,
    changefreq: ChangeFrequency,
    priority: f32,
    alternates: Vec<AlternateRef>,
}

/// Cross-locale alternate link (href + hreflang).
struct AlternateRef {
    hreflang: &'static str,
    href: String,
}

impl Sitemap {
    fn build(registry: &Registry<'_>, routes: &RouteSet, lastmod: DateTimeUtc) -> Self {
        let ambient = registry.default_locale();
        let stamp = lastmod.to_rfc3339();

        let urls: Vec<UrlEntry> = routes
            .iter()
            .map(|route| UrlEntry {
                loc: registry.absolute_url(route.as_str(), ambient),
                lastmod: stamp.clone(),
                changefreq: change_frequency(route),
                priority: priority(route),
                alternates: alternate_refs(registry, route),
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\" xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            for alt in entry.alternates {
                xml.push_str("    <xhtml:link rel=\"alternate\" hreflang=\"");
                xml.push_str(alt.hreflang);
                xml.push_str("\" href=\"");
                xml.push_str(&escape_xml(&alt.href));
                xml.push_str("\"/>\n");
            }
            xml.push_str("    <lastmod>");
            xml.push_str(&entry.lastmod);
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format!("{:.1}", entry.priority));
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.output_dir().join(&config.build.sitemap.path);
        let count = self.urls.len();
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), config.build.minify);

        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{} ({})",
            sitemap_path.file_name().unwrap_or_default().to_string_lossy(),
            crate::utils::plural_count(count, "url"));
        Ok(())
    }
}

/// Alternate links for one route: every supported locale plus an
/// `x-default` entry. The `x-default` href points at the English edition,
/// not the ambient locale's.
fn alternate_refs(registry: &Registry<'_>, route: &UrlPath) -> Vec<AlternateRef> {
    let mut refs: Vec<AlternateRef> = SUPPORTED_LOCALES
        .iter()
        .map(|&locale| AlternateRef {
            hreflang: locale.hreflang(),
            href: registry.alternate_url(route.as_str(), locale),
        })
        .collect();

    refs.push(AlternateRef {
        hreflang: X_DEFAULT,
        href: registry.alternate_url(route.as_str(), Locale::En),
    });

    refs
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
