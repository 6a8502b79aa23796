//! Robots policy generation.
//!
//! Emits a robots.txt allowing all user agents on all paths, pointing at
//! the single sitemap on the ambient locale's origin. No sitemap index or
//! sharding: one file covers the whole edition.

use crate::config::SiteConfig;
use crate::log;
use crate::registry::Registry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Build robots.txt if enabled.
pub fn build_robots(config: &SiteConfig) -> Result<()> {
    if !config.build.robots.enable {
        return Ok(());
    }

    let registry = config.registry();
    let content = robots_txt(&registry, &config.build.sitemap.path);

    let robots_path = config.output_dir().join(&config.build.robots.path);
    fs::write(&robots_path, content)
        .with_context(|| format!("Failed to write robots to {}", robots_path.display()))?;

    log!("robots"; "{}", robots_path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

fn robots_txt(registry: &Registry<'_>, sitemap_path: &Path) -> String {
    let origin = registry.origin(registry.default_locale());
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/{}\n",
        origin.trim_end_matches('/'),
        sitemap_path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuildMode, Locale};

    #[test]
    fn test_robots_txt_content() {
        let registry = Registry::new([None, None], Locale::En, BuildMode::Development);
        let content = robots_txt(&registry, Path::new("sitemap.xml"));

        assert_eq!(
            content,
            "User-agent: *\nAllow: /\n\nSitemap: https://en.raytron.group/sitemap.xml\n"
        );
    }

    #[test]
    fn test_robots_txt_ambient_locale_origin() {
        let registry = Registry::new([None, None], Locale::ZhCn, BuildMode::Development);
        let content = robots_txt(&registry, Path::new("sitemap.xml"));

        assert!(content.contains("Sitemap: https://cn.raytron.group/sitemap.xml"));
    }

    #[test]
    fn test_robots_txt_uses_override_origin() {
        let registry = Registry::new(
            [Some("https://staging.raytron.group/"), None],
            Locale::En,
            BuildMode::Development,
        );
        let content = robots_txt(&registry, Path::new("sitemap.xml"));

        // No double slash even when the override has a trailing one
        assert!(content.contains("Sitemap: https://staging.raytron.group/sitemap.xml"));
    }
}
