//! Build command implementation.
//!
//! Discovers routes from the rendered output tree and generates every
//! enabled artifact into it.

use anyhow::{Result, ensure};

use crate::config::SiteConfig;
use crate::generator;
use crate::routes::RouteSet;
use crate::utils::plural_count;
use crate::{debug, log};

/// Execute build command
pub fn run_build(config: &SiteConfig) -> Result<()> {
    let registry = config.registry();

    // Guarded accessor: fatal in production without a configured origin
    let base = registry.base_url(registry.default_locale())?;
    debug!("build"; "origin {} ({} mode)", base, config.mode.as_str());

    let output = config.output_dir();
    ensure!(
        output.is_dir(),
        "output tree '{}' not found; render the site first or set build.output",
        output.display()
    );

    let routes = RouteSet::scan(output, &config.build.exclude)?;
    log!("scan"; "{} in {}", plural_count(routes.len(), "route"), output.display());

    if routes.is_empty() {
        log!("warning"; "no routes discovered, generated artifacts will be empty");
    }

    generator::build_artifacts(config, &routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuildMode, Locale};
    use crate::utils::date::DateTimeUtc;
    use std::fs;

    /// Config pointed at a freshly rendered temp tree.
    fn test_config(output: &std::path::Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = output.to_path_buf();
        config.build.lastmod = DateTimeUtc::parse("2026-08-07");
        config
    }

    fn render_tree(root: &std::path::Path) {
        fs::write(root.join("index.html"), "<html></html>").unwrap();
        fs::create_dir_all(root.join("products/copper-clad-aluminum")).unwrap();
        fs::write(
            root.join("products/copper-clad-aluminum/index.html"),
            "<html></html>",
        )
        .unwrap();
        fs::create_dir_all(root.join("api/health")).unwrap();
        fs::write(root.join("api/health/index.html"), "ok").unwrap();
    }

    #[test]
    fn test_build_writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        render_tree(dir.path());

        run_build(&test_config(dir.path())).unwrap();

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("https://en.raytron.group/products/copper-clad-aluminum/"));
        assert!(sitemap.contains("x-default"));
        assert!(!sitemap.contains("/api/"));

        let robots = fs::read_to_string(dir.path().join("robots.txt")).unwrap();
        assert!(robots.contains("User-agent: *"));
        assert!(robots.contains("Sitemap: https://en.raytron.group/sitemap.xml"));

        let headers = fs::read_to_string(dir.path().join("_headers")).unwrap();
        assert!(headers.contains("X-Frame-Options: DENY"));
    }

    #[test]
    fn test_build_minifies_sitemap_by_default() {
        let dir = tempfile::tempdir().unwrap();
        render_tree(dir.path());

        run_build(&test_config(dir.path())).unwrap();

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert_eq!(sitemap.lines().count(), 1);
    }

    #[test]
    fn test_build_respects_disabled_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        render_tree(dir.path());

        let mut config = test_config(dir.path());
        config.build.robots.enable = false;
        config.build.headers.enable = false;
        run_build(&config).unwrap();

        assert!(dir.path().join("sitemap.xml").exists());
        assert!(!dir.path().join("robots.txt").exists());
        assert!(!dir.path().join("_headers").exists());
    }

    #[test]
    fn test_build_missing_output_tree_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir.path().join("missing"));
        assert!(run_build(&config).is_err());
    }

    #[test]
    fn test_build_production_without_origin_fails() {
        let dir = tempfile::tempdir().unwrap();
        render_tree(dir.path());

        let mut config = test_config(dir.path());
        config.mode = BuildMode::Production;
        let err = run_build(&config).unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn test_build_production_with_origin_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        render_tree(dir.path());

        let mut config = test_config(dir.path());
        config.mode = BuildMode::Production;
        config
            .site
            .set_override(Locale::En, "https://en.raytron.group".into());
        run_build(&config).unwrap();

        assert!(dir.path().join("sitemap.xml").exists());
    }
}
