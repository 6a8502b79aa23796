//! CDN `_headers` artifact generation.
//!
//! Emits the security headers served on every path, in the `_headers`
//! file format the hosting layer consumes. Extra rules from config are
//! appended verbatim so deployments can add path-specific blocks without
//! touching the generated set.

use crate::config::{HeadersConfig, SiteConfig};
use crate::log;
use anyhow::{Context, Result};
use std::fs;

/// Headers applied to every path.
const SECURITY_HEADERS: &[&str] = &[
    "X-Content-Type-Options: nosniff",
    "X-Frame-Options: DENY",
    "Referrer-Policy: strict-origin-when-cross-origin",
    "Permissions-Policy: camera=(), microphone=(), geolocation=()",
    "Strict-Transport-Security: max-age=63072000; includeSubDomains; preload",
];

/// Build the `_headers` artifact if enabled.
pub fn build_headers(config: &SiteConfig) -> Result<()> {
    if !config.build.headers.enable {
        return Ok(());
    }

    let content = headers_file(&config.build.headers);
    let headers_path = config.output_dir().join(&config.build.headers.path);
    fs::write(&headers_path, content)
        .with_context(|| format!("Failed to write headers to {}", headers_path.display()))?;

    log!("headers"; "{}", headers_path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

fn headers_file(config: &HeadersConfig) -> String {
    let mut out = String::from("/*\n");
    for line in SECURITY_HEADERS {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }

    if !config.extra.is_empty() {
        out.push('\n');
        for line in &config.extra {
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}
