//! Content directory scanning.
//!
//! Only used by `docnav check --content`, which compares the pages on
//! disk against the routes the sidebar declares.

use jwalk::WalkDir;
use rustc_hash::FxHashSet;
use std::path::{Component, Path, PathBuf};

/// Directories never holding pages.
const IGNORED_DIRS: &[&str] = &["node_modules"];

/// Collect markdown pages under `content_dir`, relative to it, sorted.
///
/// Hidden entries (including `.vuepress/`) are skipped.
pub fn collect_pages(content_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(content_dir)
        .sort(true)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .filter_map(|p| p.strip_prefix(content_dir).map(Path::to_path_buf).ok())
        .filter(|p| !in_ignored_dir(p))
        .collect()
}

/// Pages that no route reached.
pub fn find_orphans(pages: &[PathBuf], reached: &FxHashSet<PathBuf>) -> Vec<PathBuf> {
    pages
        .iter()
        .filter(|page| !reached.contains(*page))
        .cloned()
        .collect()
}

fn in_ignored_dir(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(name) => IGNORED_DIRS.iter().any(|d| name == *d),
        _ => false,
    })
}
