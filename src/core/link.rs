//! Link classification utilities.
//!
//! Decides navigation mode for an href: absolute `http(s)` URLs on a
//! foreign host open in a new context with referrer/opener isolation;
//! everything else is same-app navigation. An absolute URL on one of the
//! site's own origins counts as internal but its href is left untouched
//! (it is not rewritten to a relative path).

use std::borrow::Cow;

/// Navigation mode for a single href.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Cross-origin `http(s)` link. Opens in a new context with
    /// `rel="noopener noreferrer"`.
    External(&'a str),
    /// Same-app navigation (relative path, fragment, or own-origin
    /// absolute URL).
    Internal(&'a str),
}

impl<'a> LinkTarget<'a> {
    /// Classify an href against the site's own origin hosts.
    pub fn classify(href: &'a str, own_hosts: &[&str]) -> Self {
        if !Self::is_http(href) {
            return Self::Internal(href);
        }
        match url::Url::parse(href) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) if own_hosts.contains(&host) => Self::Internal(href),
                Some(_) => Self::External(href),
                None => Self::Internal(href),
            },
            Err(_) => Self::Internal(href),
        }
    }

    /// Check if link is HTTP/HTTPS.
    #[inline]
    pub fn is_http(link: &str) -> bool {
        link.starts_with("http://") || link.starts_with("https://")
    }

    /// The href as given. Internal own-origin URLs are not rewritten.
    #[inline]
    pub const fn href(&self) -> &'a str {
        match self {
            Self::External(href) | Self::Internal(href) => href,
        }
    }

    #[inline]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// Extra anchor attributes for this navigation mode.
    #[inline]
    pub const fn anchor_attrs(&self) -> &'static str {
        match self {
            Self::External(_) => r#" target="_blank" rel="noopener noreferrer""#,
            Self::Internal(_) => "",
        }
    }

    /// Render a full anchor element for this target.
    pub fn anchor(&self, label: &str) -> String {
        format!(
            r#"<a href="{}"{}>{}</a>"#,
            escape_attr(self.href()),
            self.anchor_attrs(),
            escape_text(label)
        )
    }
}

fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '"']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace('&', "&amp;").replace('"', "&quot;"))
}

fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}
