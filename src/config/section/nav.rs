//! `[[themeConfig.nav]]` top navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Website"
//! link = "https://bitxhub.hyperchain.cn"
//!
//! [[themeConfig.nav]]
//! text = "GitHub"
//! link = "https://github.com/meshplus/bitxhub"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A top navigation bar entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Label shown in the navigation bar.
    #[serde(default)]
    pub text: String,

    /// Absolute http(s) URL.
    #[serde(default)]
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Validate a nav entry located at `field` (e.g. `themeConfig.nav[0]`).
    ///
    /// # Checks
    /// - `text` is non-empty
    /// - `link` parses as an absolute URL with http(s) scheme and a host
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.key("text"), "nav entry requires a non-empty `text`");
        }

        let link = field.key("link");
        if self.link.trim().is_empty() {
            diag.error_with_hint(
                link,
                "nav entry requires a `link`",
                "use format like https://example.com",
            );
            return;
        }

        check_http_url(&self.link, link, diag);
    }
}

/// Report unless `value` is an absolute http(s) URL with a host.
pub(crate) fn check_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL `{}`: {}", value, e),
                "use format like https://example.com",
            );
        }
    }
}
