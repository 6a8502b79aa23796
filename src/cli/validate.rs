//! Validate command implementation.
//!
//! Config-shape validation already runs at load; this command adds the
//! cross-checks between registry data and build settings that only matter
//! when someone is auditing a deployment.

use anyhow::{Result, bail};

use crate::config::SiteConfig;
use crate::core::{SUPPORTED_LOCALES, UrlPath};
use crate::log;
use crate::routes::is_excluded;
use crate::utils::path::route::is_external_link;
use crate::utils::plural_count;

/// Execute validate command
pub fn run_validate(config: &SiteConfig) -> Result<()> {
    let registry = config.registry();
    let mut problems = 0usize;

    for &locale in SUPPORTED_LOCALES {
        let site = registry.site(locale);

        for entry in site.nav {
            if is_external_link(entry.path) {
                log!("error"; "[{}] nav '{}' points at '{}', nav paths must be site-relative",
                    locale, entry.name, entry.path);
                problems += 1;
            } else if is_excluded(&UrlPath::from_page(entry.path), &config.build.exclude) {
                log!("error"; "[{}] nav '{}' target '{}' is excluded from generated artifacts",
                    locale, entry.name, entry.path);
                problems += 1;
            }
        }

        // Social profiles live off-site; an own-origin one is almost
        // certainly a paste error
        for href in [site.social.linkedin, site.social.youtube] {
            if !registry.classify(href).is_external() {
                log!("warning"; "[{}] social profile '{}' resolves to an own origin", locale, href);
            }
        }
    }

    if problems > 0 {
        bail!("validation failed: {}", plural_count(problems, "problem"));
    }

    log!("validate"; "ok ({}, {} mode)",
        plural_count(SUPPORTED_LOCALES.len(), "locale"), config.mode.as_str());
    Ok(())
}
