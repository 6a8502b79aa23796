//! Build mode switch (development vs production).

/// Environment variable selecting the build mode.
pub const MODE_ENV_VAR: &str = "RAYSITE_ENV";

/// Build mode, read once at config load and threaded through the build.
///
/// Production tightens the base-URL accessor: an unconfigured origin is a
/// fatal configuration error instead of a logged fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    /// Parse a mode value. Anything other than `production`/`prod` is
    /// development — same tolerance as locale parsing.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") || v.eq_ignore_ascii_case("prod") => {
                Self::Production
            }
            _ => Self::Development,
        }
    }

    /// Read the mode from [`MODE_ENV_VAR`].
    pub fn from_env() -> Self {
        Self::parse(std::env::var(MODE_ENV_VAR).ok().as_deref())
    }

    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}
