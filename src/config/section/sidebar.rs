//! `[[themeConfig.sidebar]]` table of contents.
//!
//! Entries nest through `children` to any depth.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.sidebar]]
//! title = "Quick Start"
//! path = "/quick/"
//!
//! [[themeConfig.sidebar]]
//! title = "Development"
//! path = "/develop/"
//!
//! [[themeConfig.sidebar.children]]
//! title = "Rule Engine"
//! path = "/develop/rule"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::route::is_external_link;

/// A node of the sidebar tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Label shown in the sidebar.
    #[serde(default)]
    pub title: String,

    /// Site-relative route (e.g. `/develop/rule`).
    #[serde(default)]
    pub path: String,

    /// Nested entries, rendered under this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarItem>,
}

impl SidebarItem {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SidebarItem>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Visit this node and its descendants in document (pre-)order.
    ///
    /// The callback receives the node's field path and nesting level
    /// (0 for top-level entries).
    pub fn walk<'a, F>(&'a self, field: &FieldPath, level: usize, visit: &mut F)
    where
        F: FnMut(&FieldPath, usize, &'a SidebarItem),
    {
        visit(field, level, self);
        let children = field.key("children");
        for (i, child) in self.children.iter().enumerate() {
            child.walk(&children.index(i), level + 1, visit);
        }
    }

    /// Validate this node (not its children) located at `field`.
    ///
    /// # Checks
    /// - `title` is non-empty
    /// - `path` is non-empty, starts with a single `/`, and is not an external URL
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(field.key("title"), "sidebar entry requires a non-empty `title`");
        }

        let path = field.key("path");
        let value = self.path.trim();
        if value.is_empty() {
            diag.error_with_hint(
                path,
                "sidebar entry requires a `path`",
                "use a site route like \"/guide/\"",
            );
        } else if is_external_link(value) {
            diag.error_with_hint(
                path,
                format!("`{}` is an external link, sidebar paths are site routes", value),
                "move external links to `themeConfig.nav`",
            );
        } else if value.starts_with("//") {
            diag.error_with_hint(
                path,
                format!("`{}` is a protocol-relative URL, not a site route", value),
                format!("use \"/{}\"", value.trim_start_matches('/')),
            );
        } else if !value.starts_with('/') {
            diag.error_with_hint(
                path,
                format!("route `{}` must start with '/'", value),
                format!("use \"/{}\"", value),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> SidebarItem {
        SidebarItem::new("Development", "/develop/").with_children(vec![
            SidebarItem::new("Consensus", "/develop/consensus_usage"),
            SidebarItem::new("Contracts", "/develop/interchain_contract").with_children(vec![
                SidebarItem::new("Rules", "/develop/rule"),
            ]),
        ])
    }

    #[test]
    fn test_count() {
        let item = tree();
        assert_eq!(item.count(), 4);
        assert_eq!(SidebarItem::new("FAQ", "/faq/").count(), 1);
    }

    #[test]
    fn test_walk_preorder_with_fields() {
        let item = tree();
        let mut seen = Vec::new();
        item.walk(&FieldPath::new("sidebar").index(3), 0, &mut |field, level, node| {
            seen.push((field.as_str().to_string(), level, node.path.clone()));
        });

        assert_eq!(
            seen,
            vec![
                ("sidebar[3]".into(), 0, "/develop/".into()),
                ("sidebar[3].children[0]".into(), 1, "/develop/consensus_usage".into()),
                ("sidebar[3].children[1]".into(), 1, "/develop/interchain_contract".into()),
                (
                    "sidebar[3].children[1].children[0]".into(),
                    2,
                    "/develop/rule".into()
                ),
            ]
        );
    }

    #[test]
    fn test_validate_shapes() {
        let check = |item: SidebarItem| {
            let mut diag = ConfigDiagnostics::new();
            item.validate(&FieldPath::new("sidebar").index(0), &mut diag);
            diag
        };

        assert!(check(SidebarItem::new("Quick Start", "/quick/")).is_empty());

        let diag = check(SidebarItem::new("Quick Start", "quick/"));
        assert_eq!(diag.first().unwrap().field.as_str(), "sidebar[0].path");
        assert_eq!(diag.first().unwrap().hint.as_deref(), Some("use \"/quick/\""));

        let diag = check(SidebarItem::new("Repo", "https://github.com"));
        assert!(diag.first().unwrap().message.contains("external"));

        let diag = check(SidebarItem::new("CDN", "//cdn.example.com/x"));
        assert_eq!(diag.len(), 1);
        assert!(diag.first().unwrap().message.contains("protocol-relative"));
        assert_eq!(
            diag.first().unwrap().hint.as_deref(),
            Some("use \"/cdn.example.com/x\"")
        );

        let diag = check(SidebarItem::default());
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "sidebar[0].title");
    }
}
