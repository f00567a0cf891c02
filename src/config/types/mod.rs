//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Dotted/indexed field paths                   |
//! | `format` | TOML / JSON / JS document formats            |
//! | `level`  | Check severity and load options              |

mod error;
mod field;
mod format;
mod level;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind};
pub use field::{FieldPath, Segment};
pub use format::Format;
pub use level::{LoadOptions, ValidateLevel};
