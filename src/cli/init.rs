//! `docnav init`: write a starter config file.

use anyhow::{Context, Result, bail};
use docnav::config::expand_tilde;
use docnav::log;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "docnav.toml";

/// Generate the starter config with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# docnav configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(
        r#"# Site title, shown in the navigation bar and browser tab
title = "My Docs"
# Meta description of the site
description = "Project documentation"
# Public path the site is served under; must start and end with `/`
# base = "/my-docs/"

[themeConfig]
# Site-relative asset path or http(s) URL
# logo = "/images/logo.png"

# Top navigation bar, left to right
[[themeConfig.nav]]
text = "GitHub"
link = "https://github.com/"

# Sidebar tree; `path` is a site route, nested entries go under `children`
[[themeConfig.sidebar]]
title = "Introduction"
path = "/"

[[themeConfig.sidebar]]
title = "Guide"
path = "/guide/"

[[themeConfig.sidebar.children]]
title = "Getting Started"
path = "/guide/getting-started"
"#,
    );

    out
}

/// Create the starter config in `dir` (default: current directory).
///
/// With `dry_run`, the template is printed to stdout instead.
pub fn new_config(dir: Option<&Path>, dry_run: bool, force: bool) -> Result<()> {
    let template = generate_config_template();
    if dry_run {
        print!("{template}");
        return Ok(());
    }

    let root = dir.map(expand_tilde).unwrap_or_else(|| PathBuf::from("."));
    let path = write_config(&root, &template, force)?;
    log!("init"; "created {}", path.display());
    Ok(())
}

fn write_config(root: &Path, content: &str, force: bool) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "`{}` already exists, pass --force to overwrite",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav::config::{Format, LoadOptions, SiteConfig};
    use tempfile::TempDir;

    #[test]
    fn test_template_is_valid_config() {
        let loaded = SiteConfig::load(
            &generate_config_template(),
            Format::Toml,
            &LoadOptions::default().strict(true),
        )
        .unwrap();
        assert!(loaded.diagnostics.warnings().is_empty());
        assert_eq!(loaded.config.title, "My Docs");
        assert_eq!(loaded.config.theme_config.sidebar_len(), 3);
    }

    #[test]
    fn test_write_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("site");

        let path = write_config(&root, "title = \"a\"\n", false).unwrap();
        assert!(path.is_file());

        let err = write_config(&root, "title = \"b\"\n", false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "title = \"a\"\n");

        write_config(&root, "title = \"b\"\n", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "title = \"b\"\n");
    }
}
