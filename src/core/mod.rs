//! Core types - pure abstractions shared across the codebase.

mod link;
mod locale;
mod mode;
mod url;

pub use link::LinkTarget;
pub use locale::{Locale, SUPPORTED_LOCALES};
pub use mode::{BuildMode, MODE_ENV_VAR};
pub use url::UrlPath;
