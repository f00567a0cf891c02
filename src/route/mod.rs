//! Site-relative routes declared by the sidebar.
//!
//! - Internal representation: always decoded (human-readable)
//! - Declared strings are carried unchanged in the config; `RoutePath`
//!   is only used for comparison and page lookup.

pub mod conflict;
pub mod resolve;

use std::path::PathBuf;

use percent_encoding::percent_decode_str;

pub use conflict::{RouteConflict, detect_duplicates};
pub use resolve::{ResolveResult, resolve_route};

/// Page file suffixes that a route may spell out explicitly.
const PAGE_SUFFIXES: &[&str] = &[".md", ".html"];

/// Directory index files, in lookup order.
pub const INDEX_FILES: &[&str] = &["README.md", "index.md"];

/// Decoded route path
///
/// Invariants:
/// - Query string removed, fragment kept separately
/// - Percent-encoding decoded
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath {
    path: String,
    fragment: Option<String>,
}

impl RoutePath {
    /// Parse a declared route (e.g. `/develop/rule#syntax`).
    pub fn parse(raw: &str) -> Self {
        let (path, fragment) = split_path_fragment(raw.trim());
        let path = path.split('?').next().unwrap_or(path);
        let path = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());

        Self {
            path,
            fragment: (!fragment.is_empty()).then(|| fragment.to_string()),
        }
    }

    /// Route points at a directory index (`/`, `/quick/`).
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.path.ends_with('/')
    }

    /// Canonical page identity used for duplicate detection.
    ///
    /// `/quick`, `/quick.md` and `/quick.html` name the same page, as do
    /// `/quick/` and `/quick/README.md`. The fragment is part of the key so
    /// two entries may link different sections of one page.
    pub fn page_key(&self) -> String {
        let mut key = self.page_stem().to_string();
        for index in INDEX_FILES {
            if let Some(dir) = self.path.strip_suffix(index) {
                key = dir.to_string();
            }
        }
        if let Some(fragment) = &self.fragment {
            key.push('#');
            key.push_str(fragment);
        }
        key
    }

    /// Candidate page files relative to the content directory.
    ///
    /// ```text
    /// /              -> README.md, index.md
    /// /quick/        -> quick/README.md, quick/index.md
    /// /develop/rule  -> develop/rule.md, develop/rule/README.md, develop/rule/index.md
    /// /develop/rule.html -> develop/rule.md
    /// ```
    pub fn candidates(&self) -> Vec<PathBuf> {
        let relative = self.path.trim_start_matches('/');

        if self.is_dir() {
            let dir = PathBuf::from(relative);
            return INDEX_FILES.iter().map(|f| dir.join(f)).collect();
        }

        if PAGE_SUFFIXES.iter().any(|s| relative.ends_with(s)) {
            let stem = self.page_stem().trim_start_matches('/');
            return vec![PathBuf::from(format!("{stem}.md"))];
        }

        let mut out = vec![PathBuf::from(format!("{relative}.md"))];
        out.extend(INDEX_FILES.iter().map(|f| PathBuf::from(relative).join(f)));
        out
    }

    /// Path with a page suffix removed.
    fn page_stem(&self) -> &str {
        PAGE_SUFFIXES
            .iter()
            .find_map(|s| self.path.strip_suffix(s))
            .unwrap_or(&self.path)
    }
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_query_and_decodes() {
        let route = RoutePath::parse("/guide/a%20b?x=1#Intro");
        assert_eq!(route.page_key(), "/guide/a b#Intro");
    }

    #[test]
    fn test_page_key_equivalences() {
        let key = |s: &str| RoutePath::parse(s).page_key();
        assert_eq!(key("/quick"), key("/quick.md"));
        assert_eq!(key("/quick"), key("/quick.html"));
        assert_eq!(key("/quick/"), key("/quick/README.md"));
        assert_eq!(key("/quick/"), key("/quick/index.md"));
        assert_eq!(key("/a%20b"), key("/a b"));
        // directory index and sibling page differ
        assert_ne!(key("/quick/"), key("/quick"));
        // different sections of a page differ
        assert_ne!(key("/faq/#install"), key("/faq/#usage"));
    }

    #[test]
    fn test_candidates() {
        assert_eq!(
            RoutePath::parse("/").candidates(),
            vec![PathBuf::from("README.md"), PathBuf::from("index.md")]
        );
        assert_eq!(
            RoutePath::parse("/quick/").candidates(),
            vec![
                PathBuf::from("quick/README.md"),
                PathBuf::from("quick/index.md")
            ]
        );
        assert_eq!(
            RoutePath::parse("/develop/rule#x").candidates()[0],
            PathBuf::from("develop/rule.md")
        );
        assert_eq!(
            RoutePath::parse("/develop/rule.html").candidates(),
            vec![PathBuf::from("develop/rule.md")]
        );
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
        assert!(!is_external_link(":nope"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
        assert_eq!(split_path_fragment("/about"), ("/about", ""));
        assert_eq!(split_path_fragment("#section"), ("", "section"));
    }
}
