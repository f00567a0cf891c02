//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream::Stderr};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Syntax or type error; `field` is where the parser stopped.
    #[error("config file parsing error: {}", located(.field, .error))]
    Toml {
        field: FieldPath,
        error: toml::de::Error,
    },

    #[error("config file parsing error: {}", located(.field, .error))]
    Json {
        field: FieldPath,
        error: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(String),

    #[error("unsupported config format `{}`, expected .toml or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl ConfigError {
    /// Collected diagnostics, if this is a validation failure.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Diagnostics(diag) => Some(diag),
            _ => None,
        }
    }

    /// Kind of the primary failure. Parser errors count as schema violations.
    pub fn kind(&self) -> Option<DiagnosticKind> {
        match self {
            Self::Toml { .. } | Self::Json { .. } => Some(DiagnosticKind::SchemaViolation),
            Self::Diagnostics(diag) => diag.first().map(|d| d.kind),
            _ => None,
        }
    }
}

/// Prefix a parser message with the field it concerns.
fn located(field: &FieldPath, error: &impl fmt::Display) -> String {
    if field.is_root() {
        error.to_string()
    } else {
        format!("{}: {}", field.as_str(), error)
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Missing, empty, mistyped or malformed field.
    SchemaViolation,
    /// Two sidebar entries declare the same route.
    DuplicateRoute,
    /// A route has no page behind it.
    DanglingRoute,
    /// A referenced asset (logo) does not exist.
    MissingAsset,
    /// Key not part of the schema.
    UnknownField,
}

impl DiagnosticKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SchemaViolation => "schema violation",
            Self::DuplicateRoute => "duplicate route",
            Self::DanglingRoute => "dangling route",
            Self::MissingAsset => "missing asset",
            Self::UnknownField => "unknown field",
        }
    }
}

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub kind: DiagnosticKind,
    /// Config field path (e.g., "themeConfig.nav[0].link")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: DiagnosticKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{} {}",
            "[".if_supports_color(Stderr, |t| t.dimmed()),
            self.field.as_str().if_supports_color(Stderr, |t| t.cyan()),
            "]".if_supports_color(Stderr, |t| t.dimmed()),
            self.kind.label().if_supports_color(Stderr, |t| t.dimmed())
        )?;
        write!(f, "{} {}", "→".if_supports_color(Stderr, |t| t.red()), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".if_supports_color(Stderr, |t| t.yellow()), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and warnings collected during validation, in document order.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a schema violation.
    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push_error(ConfigDiagnostic::new(
            DiagnosticKind::SchemaViolation,
            field,
            message,
        ));
    }

    /// Record a schema violation with a fix hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push_error(
            ConfigDiagnostic::new(DiagnosticKind::SchemaViolation, field, message).with_hint(hint),
        );
    }

    pub fn push_error(&mut self, diagnostic: ConfigDiagnostic) {
        self.errors.push(diagnostic);
    }

    pub fn push_warning(&mut self, diagnostic: ConfigDiagnostic) {
        self.warnings.push(diagnostic);
    }

    /// Push as error or warning depending on `is_error`.
    pub fn push(&mut self, diagnostic: ConfigDiagnostic, is_error: bool) {
        if is_error {
            self.push_error(diagnostic);
        } else {
            self.push_warning(diagnostic);
        }
    }

    /// Stable-sort errors and warnings by `position` of their field.
    pub fn sort_by_field<K, F>(&mut self, mut position: F)
    where
        K: Ord,
        F: FnMut(&FieldPath) -> K,
    {
        self.errors.sort_by_key(|d| position(&d.field));
        self.warnings.sort_by_key(|d| position(&d.field));
    }

    /// Print collected warnings.
    pub fn print_warnings(&self) {
        for warning in &self.warnings {
            let hint = warning
                .hint
                .as_deref()
                .map(|h| format!(" ({h})"))
                .unwrap_or_default();
            crate::log!(
                "warning";
                "{} {}: {}{}",
                warning.field,
                warning.kind.label(),
                warning.message,
                hint
            );
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The primary (first in document order) error.
    pub fn first(&self) -> Option<&ConfigDiagnostic> {
        self.errors.first()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<Self, Self> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}\n",
            "config validation failed:".if_supports_color(Stderr, |t| t.red().bold().to_string())
        )?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            let count = self.errors.len().to_string();
            write!(
                f,
                "\n\n{} {} {}",
                "found".if_supports_color(Stderr, |t| t.dimmed()),
                count.if_supports_color(Stderr, |t| t.red().bold().to_string()),
                "errors".if_supports_color(Stderr, |t| t.dimmed())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docnav.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docnav.toml"));

        let err = ConfigError::UnsupportedFormat(PathBuf::from("nav.yaml"));
        assert!(err.to_string().contains("nav.yaml"));
        assert!(err.kind().is_none());
    }

    #[test]
    fn test_first_error_is_document_order() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("title"), "missing");
        diag.error(FieldPath::new("description"), "missing");
        diag.push_warning(ConfigDiagnostic::new(
            DiagnosticKind::UnknownField,
            FieldPath::new("footer"),
            "ignored",
        ));

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.first().unwrap().field.as_str(), "title");

        let err = ConfigError::Diagnostics(diag.into_result().unwrap_err());
        assert_eq!(err.kind(), Some(DiagnosticKind::SchemaViolation));
        assert_eq!(err.diagnostics().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_error_names_field() {
        let error = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = ConfigError::Json {
            field: FieldPath::new("themeConfig").key("nav").index(0).key("link"),
            error,
        };
        assert!(err.to_string().contains("themeConfig.nav[0].link: invalid type"));
        assert_eq!(err.kind(), Some(DiagnosticKind::SchemaViolation));

        let error = serde_json::from_str::<u8>("[").unwrap_err();
        let err = ConfigError::Json {
            field: FieldPath::root(),
            error,
        };
        assert!(err.to_string().starts_with("config file parsing error: EOF"));
    }

    #[test]
    fn test_sort_by_field_is_stable() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("b"), "first b");
        diag.error(FieldPath::new("a"), "a");
        diag.error(FieldPath::new("b"), "second b");
        diag.sort_by_field(|f| f.as_str().to_string());

        let messages: Vec<_> = diag.errors().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "first b", "second b"]);
    }

    #[test]
    fn test_push_by_level() {
        let mut diag = ConfigDiagnostics::new();
        let dup = ConfigDiagnostic::new(
            DiagnosticKind::DuplicateRoute,
            FieldPath::new("themeConfig.sidebar[1].path"),
            "duplicate",
        );
        diag.push(dup.clone(), false);
        assert!(!diag.has_errors());
        diag.push(dup, true);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_display_contains_field_and_hint() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(
            FieldPath::new("themeConfig.nav[0].link"),
            "invalid URL",
            "use format like https://example.com",
        );
        let text = diag.to_string();
        assert!(text.contains("themeConfig.nav[0].link"));
        assert!(text.contains("schema violation"));
        assert!(text.contains("hint:"));
    }
}
