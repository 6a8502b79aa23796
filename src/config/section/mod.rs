//! Configuration section definitions.
//!
//! Each module corresponds to a section in `raysite.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `build` | `[build]`    | Output tree, exclusions, artifacts       |
//! | `site`  | `[site]`     | Ambient locale, per-locale origin overrides |

pub mod build;
pub mod site;

pub use build::{BuildSectionConfig, HeadersConfig, RobotsConfig, SitemapConfig};
pub use site::{LocaleOverride, SiteSectionConfig};
