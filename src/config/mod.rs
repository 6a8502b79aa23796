//! Site configuration management for `raysite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build] and artifact sub-sections
//! │   └── site       # [site] locale selection + origin overrides
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Precedence for every setting: CLI > environment > config file >
//! built-in default. Environment variables are read exactly once, during
//! `finalize`; consumers receive the finished config object.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildSectionConfig, HeadersConfig, LocaleOverride, RobotsConfig, SiteSectionConfig,
    SitemapConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{BuildArgs, Cli, Commands};
use crate::core::{BuildMode, Locale};
use crate::registry::Registry;
use crate::utils::date::DateTimeUtc;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Origin override for the ambient locale.
pub const SITE_URL_ENV_VAR: &str = "SITE_URL";

/// Ambient locale override.
pub const LOCALE_ENV_VAR: &str = "SITE_LOCALE";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing raysite.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build mode, read from the environment during finalize
    #[serde(skip)]
    pub mode: BuildMode,

    /// Locale selection and origin overrides
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            mode: BuildMode::Development,
            site: SiteSectionConfig::default(),
            build: BuildSectionConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing file is not
    /// an error: the built-in registry makes the defaults complete.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            if !cli.is_init() {
                debug!("config"; "'{}' not found, using defaults", cli.config.display());
            }
            Self::default()
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli)?;

        // Full validation (skip for init: nothing user-provided yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name) } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Finalize configuration after loading: resolve paths, read the
    /// environment once, apply command options.
    fn finalize(&mut self, cli: &Cli) -> Result<()> {
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.root = crate::utils::path::normalize_path(&root);
        self.config_path = crate::utils::path::normalize_path(&self.config_path);

        // CLI output override, then normalize against root
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }
        self.build.output = crate::utils::path::normalize_path(&self.root.join(&self.build.output));

        self.apply_env_values(
            BuildMode::from_env(),
            std::env::var(LOCALE_ENV_VAR).ok(),
            std::env::var(SITE_URL_ENV_VAR).ok(),
        );
        self.apply_command_options(cli)
    }

    /// Apply environment inputs. Split out from `finalize` so tests can
    /// inject values without touching the process environment.
    fn apply_env_values(
        &mut self,
        mode: BuildMode,
        locale_tag: Option<String>,
        site_url: Option<String>,
    ) {
        self.mode = mode;

        // Locale first: the url override binds to the ambient locale
        if let Some(tag) = locale_tag {
            self.site.default_locale = Locale::parse_or_default(&tag);
        }

        if let Some(url) = site_url
            && !url.is_empty()
        {
            self.site.set_override(self.site.default_locale, url);
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// The normalized output tree path.
    pub fn output_dir(&self) -> &Path {
        &self.build.output
    }

    /// Get CLI arguments reference
    pub const fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Registry handle for this configuration.
    ///
    /// The single source of truth for locale records and URL resolution,
    /// constructed from config state only — no ambient lookups.
    pub fn registry(&self) -> Registry<'_> {
        Registry::new(self.site.overrides(), self.site.default_locale, self.mode)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) -> Result<()> {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Query { .. } | Commands::Validate | Commands::Init { .. } => Ok(()),
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) -> Result<()> {
        // Set verbose mode globally
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
        Self::update_option(&mut self.build.robots.enable, args.robots.as_ref());
        Self::update_option(&mut self.build.headers.enable, args.headers.as_ref());

        // Unrecognized locale falls back to the default, never fails
        if let Some(tag) = &args.locale {
            self.site.default_locale = Locale::parse_or_default(tag);
        }

        // Override origin for the ambient locale if provided via CLI
        if let Some(url) = &args.site_url {
            self.site.set_override(self.site.default_locale, url.clone());
        }

        if let Some(stamp) = &args.lastmod {
            self.build.lastmod = Some(DateTimeUtc::parse(stamp).with_context(|| {
                format!("invalid --lastmod '{stamp}', expected YYYY-MM-DD or RFC 3339")
            })?);
        }

        Ok(())
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        crate::registry::validate(&self.site.overrides(), &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ndefault_locale = \"en\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.default_locale, Locale::En);
        assert!(config.build.minify);
        assert_eq!(config.mode, BuildMode::Development);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ndefault_locale = \"en\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.default_locale, Locale::En);
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ndefault_locale = \"zh-CN\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_apply_env_values_url_binds_to_ambient_locale() {
        let mut config = SiteConfig::default();
        config.apply_env_values(
            BuildMode::Production,
            Some("zh-CN".into()),
            Some("https://cn-preview.raytron.group".into()),
        );

        assert_eq!(config.mode, BuildMode::Production);
        assert_eq!(config.site.default_locale, Locale::ZhCn);
        assert_eq!(
            config.site.override_for(Locale::ZhCn),
            Some("https://cn-preview.raytron.group")
        );
        assert_eq!(config.site.override_for(Locale::En), None);
    }

    #[test]
    fn test_apply_env_values_bad_locale_falls_back() {
        let mut config = SiteConfig::default();
        config.apply_env_values(BuildMode::Development, Some("fr".into()), None);
        assert_eq!(config.site.default_locale, Locale::En);
    }

    #[test]
    fn test_apply_env_values_empty_url_ignored() {
        let mut config = SiteConfig::default();
        config.apply_env_values(BuildMode::Development, None, Some(String::new()));
        assert_eq!(config.site.override_for(Locale::En), None);
    }

    #[test]
    fn test_validate_default_config_ok() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut config = SiteConfig::default();
        config.site.en.url = Some("not a url".into());
        config.build.exclude.push("api/".into());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("config validation failed"));
    }

    #[test]
    fn test_registry_reflects_config() {
        let mut config = SiteConfig::default();
        config.site.default_locale = Locale::ZhCn;
        config.site.set_override(Locale::ZhCn, "https://cn.raytron.group".into());

        let registry = config.registry();
        assert_eq!(registry.default_locale(), Locale::ZhCn);
        assert_eq!(registry.origin(Locale::ZhCn), "https://cn.raytron.group");
    }
}
