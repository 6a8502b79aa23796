//! Site registry and locale-aware URL resolution.
//!
//! The registry couples the built-in per-locale records (`data`) with the
//! deployment origin overrides collected at config load (file, environment,
//! CLI). It is constructed once per process and passed explicitly to every
//! consumer; nothing here reads the environment.

mod data;

pub use data::{Company, LocaleSite, NavEntry, Social, record};

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use crate::core::{BuildMode, LinkTarget, Locale, SUPPORTED_LOCALES, UrlPath};
use crate::log;

/// Read-only handle combining built-in records with origin overrides.
#[derive(Debug, Clone, Copy)]
pub struct Registry<'a> {
    /// Origin overrides, indexed in [`SUPPORTED_LOCALES`] order.
    overrides: [Option<&'a str>; 2],
    default_locale: Locale,
    mode: BuildMode,
}

impl<'a> Registry<'a> {
    pub fn new(
        overrides: [Option<&'a str>; 2],
        default_locale: Locale,
        mode: BuildMode,
    ) -> Self {
        Self {
            overrides,
            default_locale,
            mode,
        }
    }

    /// The ambient locale artifacts are generated for.
    #[inline]
    pub const fn default_locale(&self) -> Locale {
        self.default_locale
    }

    #[inline]
    pub const fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Built-in record for a locale. Total over the closed set.
    #[inline]
    pub fn site(&self, locale: Locale) -> &'static LocaleSite {
        data::record(locale)
    }

    /// Record for an optional locale; absent falls back to the default.
    #[inline]
    pub fn resolve(&self, locale: Option<Locale>) -> &'static LocaleSite {
        self.site(locale.unwrap_or_default())
    }

    fn override_for(&self, locale: Locale) -> Option<&'a str> {
        let idx = SUPPORTED_LOCALES.iter().position(|&l| l == locale)?;
        self.overrides[idx]
    }

    /// Effective origin for a locale: override if configured, built-in
    /// record otherwise. Total and silent; used by URL resolution.
    pub fn origin(&self, locale: Locale) -> &str {
        self.override_for(locale)
            .unwrap_or_else(|| self.site(locale).origin)
    }

    /// Guarded origin accessor for artifact generation.
    ///
    /// Returns the configured origin when one was provided. Without one,
    /// development builds fall back to the built-in origin with a warning;
    /// production builds fail.
    pub fn base_url(&self, locale: Locale) -> Result<&str, ConfigError> {
        match self.override_for(locale) {
            Some(url) => Ok(url),
            None if self.mode.is_production() => Err(ConfigError::Validation(format!(
                "site url for '{}' is not configured; set SITE_URL or [site.{}] url",
                locale,
                toml_key(locale)
            ))),
            None => {
                let fallback = self.site(locale).origin;
                log!("warning"; "site url not configured, falling back to {}", fallback);
                Ok(fallback)
            }
        }
    }

    /// Absolute URL on the locale's origin. The path is normalized to
    /// exactly one leading slash; non-ASCII segments are percent-encoded.
    pub fn absolute_url(&self, path: &str, locale: Locale) -> String {
        UrlPath::from_page(path).on_origin(self.origin(locale))
    }

    /// Absolute URL with the origin chosen by an explicit target locale,
    /// decoupled from the ambient locale. Used for cross-locale SEO
    /// annotations.
    #[inline]
    pub fn alternate_url(&self, path: &str, target: Locale) -> String {
        self.absolute_url(path, target)
    }

    /// Hosts of all effective origins, for own-host link classification.
    pub fn own_hosts(&self) -> Vec<String> {
        SUPPORTED_LOCALES
            .iter()
            .filter_map(|&locale| {
                url::Url::parse(self.origin(locale))
                    .ok()
                    .and_then(|u| u.host_str().map(str::to_owned))
            })
            .collect()
    }

    /// Classify an href against the site's own origins.
    pub fn classify<'h>(&self, href: &'h str) -> LinkTarget<'h> {
        let hosts = self.own_hosts();
        let refs: Vec<&str> = hosts.iter().map(String::as_str).collect();
        LinkTarget::classify(href, &refs)
    }
}

const fn toml_key(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "en",
        Locale::ZhCn => "zh-cn",
    }
}

/// Validate registry invariants and origin overrides.
///
/// The built-in records are compile-time data; checking them here catches
/// edits that break the cross-locale invariants before any artifact is
/// generated.
pub fn validate(overrides: &[Option<&str>; 2], diag: &mut ConfigDiagnostics) {
    // Distinct effective origins per locale
    let en = overrides[0].unwrap_or(data::record(Locale::En).origin);
    let zh = overrides[1].unwrap_or(data::record(Locale::ZhCn).origin);
    if en == zh {
        diag.error_with_hint(
            FieldPath::new("site"),
            "locale origins must be distinct",
            "give en and zh-cn editions different urls",
        );
    }

    // Nav path parity across locales
    let en_nav = data::record(Locale::En).nav;
    for &locale in SUPPORTED_LOCALES {
        if !nav_paths_match(data::record(locale).nav, en_nav) {
            diag.error(
                FieldPath::new("site"),
                format!("navigation paths for '{locale}' diverge from the en edition"),
            );
        }
    }
}

/// Nav path sets must be identical across locales; only display names
/// translate.
fn nav_paths_match(nav: &[NavEntry], reference: &[NavEntry]) -> bool {
    nav.len() == reference.len() && nav.iter().zip(reference).all(|(a, b)| a.path == b.path)
}
