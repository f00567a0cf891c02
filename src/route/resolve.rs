//! Route to page-file resolution.

use std::path::{Path, PathBuf};

use super::{RoutePath, is_external_link};

/// Result of resolving a route against a content directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    /// Page file found (relative to the content directory).
    Found(PathBuf),

    /// External link, nothing to resolve locally.
    External(String),

    /// Target not found.
    NotFound {
        /// The original route
        target: String,
        /// Paths that were tried (for diagnostics)
        tried: Vec<String>,
    },
}

/// Resolve a declared route to a page file under `content_dir`.
pub fn resolve_route(content_dir: &Path, declared: &str) -> ResolveResult {
    if is_external_link(declared) {
        return ResolveResult::External(declared.to_string());
    }

    let candidates = RoutePath::parse(declared).candidates();
    if let Some(found) = candidates.iter().find(|c| content_dir.join(c).is_file()) {
        return ResolveResult::Found(found.clone());
    }

    ResolveResult::NotFound {
        target: declared.to_string(),
        tried: candidates
            .iter()
            .map(|c| c.to_string_lossy().into_owned())
            .collect(),
    }
}
