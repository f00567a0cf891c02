//! Severity levels for optional checks.

use serde::{Deserialize, Serialize};

/// How to treat a failed check.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Reject the document.
    #[default]
    Error,
    /// Report and keep going.
    Warn,
}

impl ValidateLevel {
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Knobs for [`SiteConfig::load`](crate::config::SiteConfig::load).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keys that are not part of the schema.
    pub unknown_fields: ValidateLevel,
    /// Sidebar entries that declare the same route.
    pub duplicate_routes: ValidateLevel,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            unknown_fields: ValidateLevel::Warn,
            duplicate_routes: ValidateLevel::Error,
        }
    }
}

impl LoadOptions {
    /// Treat unknown keys as errors.
    pub const fn strict(mut self, strict: bool) -> Self {
        if strict {
            self.unknown_fields = ValidateLevel::Error;
        }
        self
    }

    pub const fn duplicates(mut self, level: ValidateLevel) -> Self {
        self.duplicate_routes = level;
        self
    }
}
