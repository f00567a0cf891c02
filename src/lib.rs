//! Typed loader, validator and emitter for documentation-site navigation
//! config (title, nav bar, sidebar tree).
//!
//! ```no_run
//! use docnav::config::{LoadOptions, SiteConfig};
//! use std::path::Path;
//!
//! let loaded = SiteConfig::from_path(Path::new("docnav.toml"), &LoadOptions::default())?;
//! loaded.diagnostics.print_warnings();
//! println!("{}", loaded.config.theme_config.sidebar_len());
//! # Ok::<(), docnav::config::ConfigError>(())
//! ```

pub mod config;
pub mod content;
pub mod logger;
pub mod route;
