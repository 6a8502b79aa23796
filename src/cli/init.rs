//! Init command: write a starter config file.

use anyhow::{Context, Result, ensure};
use std::fs;

use crate::config::SiteConfig;
use crate::log;

/// Starter config. Mirrors the built-in defaults so a fresh project
/// builds identically with or without the file.
const TEMPLATE: &str = r#"[site]
default_locale = "en"

[site.en]
url = "https://en.raytron.group"

[site.zh-cn]
url = "https://cn.raytron.group"

[build]
output = "out"
minify = true
exclude = ["/api/", "/admin/", "/_next/", "/404/", "/500/"]

[build.sitemap]
enable = true
path = "sitemap.xml"

[build.robots]
enable = true
path = "robots.txt"

[build.headers]
enable = true
path = "_headers"
"#;

/// Create a starter config at the resolved config path.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;
    ensure!(!path.exists(), "'{}' already exists", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log!("init"; "created {}", path.display());
    Ok(())
}
