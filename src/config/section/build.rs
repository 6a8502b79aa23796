//! `[build]` configuration: output tree, exclusions, artifact settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::date::DateTimeUtc;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Rendered site tree the routes are discovered from, and where
    /// artifacts are written (relative to project root).
    pub output: PathBuf,

    /// Minify generated XML.
    pub minify: bool,

    /// Route prefixes excluded from generated artifacts.
    pub exclude: Vec<String>,

    /// Sitemap artifact settings.
    pub sitemap: SitemapConfig,

    /// Robots artifact settings.
    pub robots: RobotsConfig,

    /// CDN `_headers` artifact settings.
    pub headers: HeadersConfig,

    /// Fixed lastmod stamp (CLI-only, for reproducible builds).
    #[serde(skip)]
    pub lastmod: Option<DateTimeUtc>,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "out".into(),
            minify: true,
            exclude: default_exclude(),
            sitemap: SitemapConfig::default(),
            robots: RobotsConfig::default(),
            headers: HeadersConfig::default(),
            lastmod: None,
        }
    }
}

/// Route prefixes that never appear in generated artifacts: service
/// endpoints, admin surfaces, framework internals, error pages.
fn default_exclude() -> Vec<String> {
    ["/api/", "/admin/", "/_next/", "/404/", "/500/"]
        .map(str::to_owned)
        .to_vec()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub enable: bool,
    /// Output path relative to the output tree.
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    pub enable: bool,
    pub path: PathBuf,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "robots.txt".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    pub enable: bool,
    pub path: PathBuf,
    /// Extra rule lines appended verbatim after the generated block.
    pub extra: Vec<String>,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "_headers".into(),
            extra: Vec::new(),
        }
    }
}

impl BuildSectionConfig {
    /// Validate exclusion prefixes and artifact paths.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for prefix in &self.exclude {
            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    FieldPath::new("build.exclude"),
                    format!("exclude prefix '{prefix}' must start with '/'"),
                    "prefixes are site-root relative, e.g. \"/api/\"",
                );
            }
        }

        check_artifact_path(&self.sitemap.path, FieldPath::new("build.sitemap.path"), diag);
        check_artifact_path(&self.robots.path, FieldPath::new("build.robots.path"), diag);
        check_artifact_path(&self.headers.path, FieldPath::new("build.headers.path"), diag);
    }
}

/// Artifact paths resolve against the output tree and must stay inside it.
fn check_artifact_path(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if path.as_os_str().is_empty() {
        diag.error(field, "artifact path must not be empty");
    } else if path.is_absolute() {
        diag.error_with_hint(
            field,
            format!("artifact path '{}' must be relative", path.display()),
            "paths resolve against the output directory",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("out"));
        assert!(config.build.minify);
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
        assert!(config.build.robots.enable);
        assert!(config.build.headers.enable);
        assert!(config.build.exclude.iter().any(|p| p == "/api/"));
    }

    #[test]
    fn test_override_toggles() {
        let config = test_parse_config("[build.sitemap]\nenable = false\npath = \"map.xml\"");
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("map.xml"));
    }

    #[test]
    fn test_validate_rejects_relative_exclude() {
        let mut build = BuildSectionConfig::default();
        build.exclude.push("api/".into());
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_absolute_artifact_path() {
        let mut build = BuildSectionConfig::default();
        build.robots.path = "/etc/robots.txt".into();
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_defaults_clean() {
        let mut diag = ConfigDiagnostics::new();
        BuildSectionConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }
}
