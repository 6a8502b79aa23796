//! `[site]` configuration.
//!
//! The per-locale records themselves are built into the registry; this
//! section only selects the ambient locale and overrides deployment
//! origins.
//!
//! # Example
//!
//! ```toml
//! [site]
//! default_locale = "en"
//!
//! [site.en]
//! url = "https://en.raytron.group"
//!
//! [site.zh-cn]
//! url = "https://cn.raytron.group"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::Locale;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Ambient locale: the edition artifacts are generated for.
    pub default_locale: Locale,

    /// English edition overrides.
    pub en: LocaleOverride,

    /// Chinese edition overrides.
    #[serde(rename = "zh-cn")]
    pub zh_cn: LocaleOverride,
}

/// Deployment overrides for one locale edition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleOverride {
    /// Origin override (e.g. "https://en.raytron.group"). Unset means the
    /// built-in origin: tolerated in development, fatal for production
    /// artifact generation.
    pub url: Option<String>,
}

impl SiteSectionConfig {
    /// Configured origin override for a locale, if any.
    pub fn override_for(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::En => self.en.url.as_deref(),
            Locale::ZhCn => self.zh_cn.url.as_deref(),
        }
    }

    /// Set the origin override for a locale (env/CLI application).
    pub fn set_override(&mut self, locale: Locale, url: String) {
        match locale {
            Locale::En => self.en.url = Some(url),
            Locale::ZhCn => self.zh_cn.url = Some(url),
        }
    }

    /// Overrides in `SUPPORTED_LOCALES` order, for the registry.
    pub fn overrides(&self) -> [Option<&str>; 2] {
        [self.en.url.as_deref(), self.zh_cn.url.as_deref()]
    }

    /// Validate configured origins.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_origin(self.en.url.as_deref(), FieldPath::new("site.en.url"), diag);
        check_origin(
            self.zh_cn.url.as_deref(),
            FieldPath::new("site.zh-cn.url"),
            diag,
        );
    }
}

/// URL format check using the url crate for strict validation.
fn check_origin(url: Option<&str>, field: FieldPath, diag: &mut ConfigDiagnostics) {
    let Some(url_str) = url else {
        return;
    };

    match url::Url::parse(url_str) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://en.raytron.group",
                );
            }
            // Must have a valid host
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://en.raytron.group",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://en.raytron.group",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.default_locale, Locale::En);
        assert!(config.site.en.url.is_none());
        assert!(config.site.zh_cn.url.is_none());
    }

    #[test]
    fn test_locale_tables_parse() {
        let config = test_parse_config(
            "[site]\ndefault_locale = \"zh-CN\"\n[site.zh-cn]\nurl = \"https://cn.raytron.group\"",
        );
        assert_eq!(config.site.default_locale, Locale::ZhCn);
        assert_eq!(
            config.site.override_for(Locale::ZhCn),
            Some("https://cn.raytron.group")
        );
        assert_eq!(config.site.override_for(Locale::En), None);
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut site = SiteSectionConfig::default();
        site.en.url = Some("ftp://en.raytron.group".into());
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let mut site = SiteSectionConfig::default();
        site.zh_cn.url = Some("not a url".into());
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_accepts_https() {
        let mut site = SiteSectionConfig::default();
        site.en.url = Some("https://staging.raytron.group".into());
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_set_override() {
        let mut site = SiteSectionConfig::default();
        site.set_override(Locale::En, "https://preview.raytron.group".into());
        assert_eq!(
            site.overrides(),
            [Some("https://preview.raytron.group"), None]
        );
    }
}
