//! Serialized forms of the config document.

use std::{fmt, path::Path};

/// Document format.
///
/// `Js` is output-only: a CommonJS module (`module.exports = {...};`) that
/// a VuePress-style generator can use directly as its `config.js`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Toml,
    Json,
    Js,
}

impl Format {
    /// Guess format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "js" | "cjs" => Some(Self::Js),
            _ => None,
        }
    }

    /// Whether documents in this format can be loaded.
    #[inline]
    pub const fn is_readable(self) -> bool {
        matches!(self, Self::Toml | Self::Json)
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Js => "js",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path(Path::new("docnav.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("site/nav.JSON")), Some(Format::Json));
        assert_eq!(
            Format::from_path(Path::new(".vuepress/config.js")),
            Some(Format::Js)
        );
        assert_eq!(Format::from_path(Path::new("docnav.yaml")), None);
        assert_eq!(Format::from_path(Path::new("docnav")), None);
    }

    #[test]
    fn test_readable() {
        assert!(Format::Toml.is_readable());
        assert!(Format::Json.is_readable());
        assert!(!Format::Js.is_readable());
    }
}
