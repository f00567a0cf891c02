//! Config field path addressing.

use owo_colors::{OwoColorize, Stream::Stderr};
use std::fmt;

/// Dotted path to a value inside the config document.
///
/// Array elements are addressed with brackets, mirroring how the
/// document reads:
///
/// ```text
/// title
/// themeConfig.nav[0].link
/// themeConfig.sidebar[3].children[1].path
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// The document root (empty path).
    #[inline]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Single top-level key.
    pub fn new(key: &str) -> Self {
        Self(key.to_string())
    }

    /// Child key, e.g. `themeConfig` + `nav` -> `themeConfig.nav`.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self::new(key)
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Array element, e.g. `themeConfig.nav` + 0 -> `themeConfig.nav[0]`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into keys and array indices, outermost first.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut out = Vec::new();
        if self.is_root() {
            return out;
        }

        for part in self.0.split('.') {
            let (key, indices) = part.split_once('[').unwrap_or((part, ""));
            if !key.is_empty() {
                out.push(Segment::Key(key));
            }
            if indices.is_empty() {
                continue;
            }
            for index in indices.trim_end_matches(']').split("][") {
                match index.parse() {
                    Ok(i) => out.push(Segment::Index(i)),
                    Err(_) => out.push(Segment::Key(index)),
                }
            }
        }
        out
    }
}

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", quoted.if_supports_color(Stderr, |t| t.bright_blue()))
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths() {
        let sidebar = FieldPath::new("themeConfig").key("sidebar");
        assert_eq!(sidebar.as_str(), "themeConfig.sidebar");

        let child = sidebar.index(3).key("children").index(1).key("path");
        assert_eq!(child.as_str(), "themeConfig.sidebar[3].children[1].path");
    }

    #[test]
    fn test_segments() {
        let field = FieldPath::new("themeConfig")
            .key("sidebar")
            .index(3)
            .key("children")
            .index(12)
            .key("path");
        assert_eq!(
            field.segments(),
            vec![
                Segment::Key("themeConfig"),
                Segment::Key("sidebar"),
                Segment::Index(3),
                Segment::Key("children"),
                Segment::Index(12),
                Segment::Key("path"),
            ]
        );
        assert!(FieldPath::root().segments().is_empty());
    }

    #[test]
    fn test_display_quotes_path() {
        owo_colors::set_override(false);
        assert_eq!(FieldPath::new("base").to_string(), "`base`");
    }

    #[test]
    fn test_key_on_root() {
        assert_eq!(FieldPath::root().key("title").as_str(), "title");
        assert!(FieldPath::root().is_root());
        assert!(!FieldPath::new("base").is_root());
    }
}
