//! `[themeConfig]` section: logo, navigation bar and sidebar.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! logo = "/images/logo.png"
//! ```

use serde::{Deserialize, Serialize};

use super::{NavItem, SidebarItem, nav::check_http_url};
use crate::config::{
    ConfigDiagnostic, ConfigDiagnostics, DiagnosticKind, FieldPath, LoadOptions,
};
use crate::route::{detect_duplicates, is_external_link};

/// Theme section: what the generator renders around the pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Logo asset (site-relative, e.g. `/images/logo.png`, or http(s) URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Top navigation bar entries, left to right.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavItem>,

    /// Sidebar tree, top to bottom.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<SidebarItem>,
}

impl ThemeConfig {
    /// Visit every sidebar node in document order.
    pub fn walk_sidebar<'a, F>(&'a self, field: &FieldPath, mut visit: F)
    where
        F: FnMut(&FieldPath, usize, &'a SidebarItem),
    {
        let sidebar = field.key("sidebar");
        for (i, item) in self.sidebar.iter().enumerate() {
            item.walk(&sidebar.index(i), 0, &mut visit);
        }
    }

    /// All sidebar routes as `(path field, declared route)`, in document order.
    pub fn routes(&self, field: &FieldPath) -> Vec<(FieldPath, &str)> {
        let mut out = Vec::new();
        self.walk_sidebar(field, |node_field, _, node| {
            out.push((node_field.key("path"), node.path.as_str()));
        });
        out
    }

    /// Total number of sidebar nodes.
    pub fn sidebar_len(&self) -> usize {
        self.sidebar.iter().map(SidebarItem::count).sum()
    }

    /// Validate the section located at `field` (normally `themeConfig`).
    pub fn validate(&self, field: &FieldPath, opts: &LoadOptions, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo {
            Self::validate_logo(logo, field.key("logo"), diag);
        }

        let nav = field.key("nav");
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(&nav.index(i), diag);
        }

        self.walk_sidebar(field, |node_field, _, node| node.validate(node_field, diag));

        self.validate_duplicates(field, opts, diag);
    }

    fn validate_logo(logo: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        let logo = logo.trim();
        if logo.is_empty() {
            diag.error_with_hint(field, "logo is empty", "remove `logo` or set an asset path");
        } else if is_external_link(logo) {
            check_http_url(logo, field, diag);
        } else if logo.starts_with("//") {
            diag.error_with_hint(
                field,
                format!("logo `{}` is a protocol-relative URL", logo),
                format!("use \"https:{}\" or a site-relative path", logo),
            );
        } else if !logo.starts_with('/') {
            diag.error_with_hint(
                field,
                format!("logo `{}` must be site-relative", logo),
                format!("use \"/{}\"", logo),
            );
        }
    }

    fn validate_duplicates(
        &self,
        field: &FieldPath,
        opts: &LoadOptions,
        diag: &mut ConfigDiagnostics,
    ) {
        // Empty paths are already reported as schema violations.
        let routes = self
            .routes(field)
            .into_iter()
            .filter(|(_, route)| !route.trim().is_empty());

        for conflict in detect_duplicates(routes) {
            let diagnostic = ConfigDiagnostic::new(
                DiagnosticKind::DuplicateRoute,
                conflict.field,
                format!(
                    "route `{}` is already declared at `{}`",
                    conflict.route,
                    conflict.first.as_str()
                ),
            )
            .with_hint("remove one entry or point it at another page");
            diag.push(diagnostic, opts.duplicate_routes.is_error());
        }
    }
}
