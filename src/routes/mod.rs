//! Route discovery from the rendered site tree.
//!
//! The page renderer (an external collaborator) writes the site as a
//! directory of HTML files; routes are recovered from that tree rather
//! than passed in-band. `index.html` maps to its directory's route,
//! `name.html` to `/name/`. Excluded prefixes are dropped at collection
//! time so they never reach a generator.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;
use rustc_hash::FxHashSet;

use crate::core::UrlPath;

/// Deduplicated, sorted set of page routes.
#[derive(Debug, Default)]
pub struct RouteSet {
    routes: Vec<UrlPath>,
}

impl RouteSet {
    /// Scan a rendered output tree for page routes.
    pub fn scan(dir: &Path, exclude: &[String]) -> Result<Self> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).skip_hidden(false) {
            let entry =
                entry.with_context(|| format!("failed to scan output tree {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let rel = path.strip_prefix(dir).unwrap_or(&path).to_path_buf();
            files.push(rel);
        }

        Ok(Self::from_files(files.iter().map(PathBuf::as_path), exclude))
    }

    /// Build a route set from relative file paths. Pure core of [`scan`],
    /// shared with tests.
    ///
    /// [`scan`]: RouteSet::scan
    pub fn from_files<'a>(
        files: impl IntoIterator<Item = &'a Path>,
        exclude: &[String],
    ) -> Self {
        let mut set = FxHashSet::default();
        for file in files {
            if let Some(route) = route_for_file(file)
                && !is_excluded(&route, exclude)
            {
                set.insert(route);
            }
        }

        let mut routes: Vec<UrlPath> = set.into_iter().collect();
        routes.sort();
        Self { routes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &UrlPath> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Map a relative HTML file path to its page route.
///
/// `index.html` → `/`, `about/index.html` → `/about/`,
/// `contact.html` → `/contact/`. Non-HTML files have no route.
fn route_for_file(rel: &Path) -> Option<UrlPath> {
    let ext = rel.extension().and_then(|e| e.to_str())?;
    if !ext.eq_ignore_ascii_case("html") {
        return None;
    }

    let mut parts: Vec<String> = rel
        .parent()
        .map(|p| {
            p.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();

    let stem = rel.file_stem()?.to_string_lossy();
    if stem != "index" {
        parts.push(stem.into_owned());
    }

    if parts.is_empty() {
        return Some(UrlPath::from_page("/"));
    }
    Some(UrlPath::from_page(&format!("/{}/", parts.join("/"))))
}

/// Check a route against the exclusion prefixes.
pub fn is_excluded(route: &UrlPath, exclude: &[String]) -> bool {
    exclude.iter().any(|prefix| route.starts_with(prefix))
}
