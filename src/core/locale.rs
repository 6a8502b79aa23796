//! Closed set of supported site locales.
//!
//! Each locale is bound to its own origin (`en.raytron.group` /
//! `cn.raytron.group`); the English record is the fallback everywhere a
//! locale is omitted or unrecognized.

use serde::{Deserialize, Serialize};

/// A supported language/region variant of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (default/fallback).
    #[default]
    #[serde(rename = "en")]
    En,
    /// Simplified Chinese.
    #[serde(rename = "zh-CN")]
    ZhCn,
}

/// Ordered list of supported locales. Ordering is stable: it drives
/// alternate-link emission and `query` output.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::ZhCn];

impl Locale {
    /// Canonical locale code, also used as the hreflang tag.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
        }
    }

    /// Hreflang tag for cross-locale SEO annotations.
    #[inline]
    pub const fn hreflang(self) -> &'static str {
        self.as_str()
    }

    /// Parse a locale tag (case-insensitive, tolerant of region subtags).
    ///
    /// `"en"`, `"en-US"`, `"EN_gb"` all resolve to [`Locale::En`];
    /// `"zh"`, `"zh-CN"`, `"zh-Hans"` resolve to [`Locale::ZhCn`].
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "zh" | "cn" => Some(Self::ZhCn),
            _ => None,
        }
    }

    /// Total variant of [`Locale::parse`]: unrecognized input falls back to
    /// English instead of failing.
    #[inline]
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Locale::En.as_str(), "en");
        assert_eq!(Locale::ZhCn.as_str(), "zh-CN");
    }

    #[test]
    fn test_parse_exact() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("zh-CN"), Some(Locale::ZhCn));
    }

    #[test]
    fn test_parse_tolerant() {
        assert_eq!(Locale::parse("EN_gb"), Some(Locale::En));
        assert_eq!(Locale::parse("zh-Hans"), Some(Locale::ZhCn));
        assert_eq!(Locale::parse("  zh  "), Some(Locale::ZhCn));
        assert_eq!(Locale::parse("cn"), Some(Locale::ZhCn));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse_or_default("fr"), Locale::En);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Locale::ZhCn).unwrap();
        assert_eq!(json, r#""zh-CN""#);
        let parsed: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Locale::ZhCn);
    }

    #[test]
    fn test_supported_order_stable() {
        assert_eq!(SUPPORTED_LOCALES, &[Locale::En, Locale::ZhCn]);
    }
}
