//! Site configuration document (`docnav.toml` / `.json`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Section definitions
//! │   ├── theme      # themeConfig
//! │   ├── nav        # themeConfig.nav[]
//! │   └── sidebar    # themeConfig.sidebar[] (recursive)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, diagnostics
//! │   ├── field      # FieldPath
//! │   ├── format     # Format (toml, json, js)
//! │   └── level      # ValidateLevel, LoadOptions
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! title = "BitXHub Docs"
//! description = "Deployment, usage and design documentation"
//! base = "/bitxhub/"
//!
//! [themeConfig]
//! logo = "/images/logo.png"
//!
//! [[themeConfig.nav]]
//! text = "GitHub"
//! link = "https://github.com/meshplus/bitxhub"
//!
//! [[themeConfig.sidebar]]
//! title = "Quick Start"
//! path = "/quick/"
//! ```
//!
//! Loading is a pure function from text to a validated [`SiteConfig`]:
//! every check runs, and any error rejects the whole document.

pub mod section;
pub mod types;
mod util;

pub use section::{NavItem, SidebarItem, ThemeConfig};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind, FieldPath, Format,
    LoadOptions, Segment, ValidateLevel,
};
pub use util::{expand_tilde, find_config_file};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration record of a documentation site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title.
    #[serde(default)]
    pub title: String,

    /// Site description.
    #[serde(default)]
    pub description: String,

    /// URL path prefix the site is served under (e.g. `/bitxhub/`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Logo, navigation bar and sidebar.
    #[serde(default)]
    pub theme_config: ThemeConfig,
}

/// A validated config together with its non-fatal diagnostics.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: SiteConfig,
    /// Warnings only; errors never reach this point.
    pub diagnostics: ConfigDiagnostics,
}

impl Loaded {
    pub fn into_config(self) -> SiteConfig {
        self.config
    }
}

impl SiteConfig {
    /// Field path of the `themeConfig` section.
    pub fn theme_field() -> FieldPath {
        FieldPath::new("themeConfig")
    }

    /// Parse and validate with default options.
    pub fn parse_str(content: &str, format: Format) -> Result<Self, ConfigError> {
        Self::load(content, format, &LoadOptions::default()).map(Loaded::into_config)
    }

    /// Parse and validate a document.
    ///
    /// Collects every violation before failing, so the error lists all of
    /// them in document order. Unknown keys are reported according to
    /// `opts.unknown_fields`.
    pub fn load(content: &str, format: Format, opts: &LoadOptions) -> Result<Loaded, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content, format)?;

        let mut diag = ConfigDiagnostics::new();
        config.validate(opts, &mut diag);

        for field in ignored {
            diag.push(
                ConfigDiagnostic::new(
                    DiagnosticKind::UnknownField,
                    field,
                    "not a known config key, ignored",
                )
                .with_hint("check the spelling or remove it"),
                opts.unknown_fields.is_error(),
            );
        }

        diag.sort_by_field(document_position);
        let diagnostics = diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(Loaded {
            config,
            diagnostics,
        })
    }

    /// Load a config file, picking the format from its extension.
    pub fn from_path(path: &Path, opts: &LoadOptions) -> Result<Loaded, ConfigError> {
        let format = Format::from_path(path)
            .filter(|f| f.is_readable())
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        Self::load(&content, format, opts)
    }

    /// Parse content without validation, collecting any unknown fields.
    ///
    /// Parser errors carry the field the parser was in when it failed.
    pub fn parse_with_ignored(
        content: &str,
        format: Format,
    ) -> Result<(Self, Vec<FieldPath>), ConfigError> {
        let mut ignored = Vec::new();
        let on_ignored = |path: serde_ignored::Path<'_>| ignored.push(ignored_field(&path));
        let mut track = serde_path_to_error::Track::new();

        let config = match format {
            Format::Toml => {
                let deserializer = serde_path_to_error::Deserializer::new(
                    toml::Deserializer::new(content),
                    &mut track,
                );
                let result = serde_ignored::deserialize(deserializer, on_ignored);
                result.map_err(|error| ConfigError::Toml {
                    field: tracked_field(&track.path()),
                    error,
                })?
            }
            Format::Json => {
                let mut json = serde_json::Deserializer::from_str(content);
                let deserializer = serde_path_to_error::Deserializer::new(&mut json, &mut track);
                let result = serde_ignored::deserialize(deserializer, on_ignored);
                let config = result.map_err(|error| ConfigError::Json {
                    field: tracked_field(&track.path()),
                    error,
                })?;
                json.end().map_err(|error| ConfigError::Json {
                    field: FieldPath::root(),
                    error,
                })?;
                config
            }
            Format::Js => {
                return Err(ConfigError::UnsupportedFormat(format!("config.{format}").into()));
            }
        };

        Ok((config, ignored))
    }

    /// Serialize to `format`.
    ///
    /// `pretty` only affects JSON; TOML and JS output is always indented.
    pub fn render(&self, format: Format, pretty: bool) -> Result<String, ConfigError> {
        let json = |pretty: bool| {
            if pretty {
                serde_json::to_string_pretty(self)
            } else {
                serde_json::to_string(self)
            }
            .map_err(|e| ConfigError::Serialize(e.to_string()))
        };

        match format {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            Format::Json => json(pretty).map(|mut s| {
                s.push('\n');
                s
            }),
            Format::Js => Ok(format!(
                "// Generated by docnav {}. Edit the source config instead.\nmodule.exports = {};\n",
                env!("CARGO_PKG_VERSION"),
                json(true)?
            )),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every schema check, appending diagnostics in document order.
    pub fn validate(&self, opts: &LoadOptions, diag: &mut ConfigDiagnostics) {
        Self::require(&self.title, "title", diag);
        Self::require(&self.description, "description", diag);

        if let Some(base) = &self.base {
            Self::validate_base(base, diag);
        }

        self.theme_config.validate(&Self::theme_field(), opts, diag);
        diag.sort_by_field(document_position);
    }

    fn require(value: &str, key: &str, diag: &mut ConfigDiagnostics) {
        if value.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new(key),
                format!("required field `{key}` is missing or empty"),
                format!("set it, e.g.: {key} = \"...\""),
            );
        }
    }

    /// `base` is joined verbatim in front of every route, so it needs
    /// slashes on both ends.
    fn validate_base(base: &str, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("base");
        if crate::route::is_external_link(base) {
            diag.error_with_hint(
                field,
                format!("base `{base}` must be a path, not a URL"),
                "use the path part only, e.g. \"/docs/\"",
            );
        } else if !base.starts_with('/') || !base.ends_with('/') {
            let trimmed = base.trim_matches('/');
            let fixed = if trimmed.is_empty() {
                "/".to_string()
            } else {
                format!("/{trimmed}/")
            };
            diag.error_with_hint(
                field,
                format!("base `{base}` must start and end with '/'"),
                format!("use \"{fixed}\""),
            );
        }
    }
}

/// Keys of every config table in declaration order. Keys of different
/// tables only need to keep their order relative to their siblings.
const KEY_ORDER: &[&str] = &[
    "title",
    "text",
    "description",
    "base",
    "themeConfig",
    "logo",
    "nav",
    "link",
    "sidebar",
    "path",
    "children",
];

/// Sort key placing `field` where it sits in a document.
///
/// Parents come before their children, array elements by index, and
/// unknown keys after the known keys of their table.
fn document_position(field: &FieldPath) -> Vec<usize> {
    field
        .segments()
        .into_iter()
        .map(|segment| match segment {
            Segment::Index(index) => index,
            Segment::Key(key) => KEY_ORDER
                .iter()
                .position(|known| *known == key)
                .unwrap_or(usize::MAX),
        })
        .collect()
}

/// Convert a `serde_path_to_error` path into our bracketed form.
fn tracked_field(path: &serde_path_to_error::Path) -> FieldPath {
    use serde_path_to_error::Segment as Tracked;

    path.iter().fold(FieldPath::root(), |field, segment| match segment {
        Tracked::Seq { index } => field.index(*index),
        Tracked::Map { key } => field.key(key),
        Tracked::Enum { variant } => field.key(variant),
        Tracked::Unknown => field,
    })
}

/// Convert a `serde_ignored` path into our bracketed form.
fn ignored_field(path: &serde_ignored::Path<'_>) -> FieldPath {
    use serde_ignored::Path;

    match path {
        Path::Root => FieldPath::root(),
        Path::Seq { parent, index } => ignored_field(parent).index(*index),
        Path::Map { parent, key } => ignored_field(parent).key(key),
        Path::Some { parent } | Path::NewtypeStruct { parent } | Path::NewtypeVariant { parent } => {
            ignored_field(parent)
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse TOML with the required top-level fields prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config, Format::Toml).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
