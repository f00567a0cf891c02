//! `docnav check`: validate the config and, optionally, its routes.
//!
//! Schema validation already happened while loading. With `--content`,
//! every sidebar route is resolved to a page file, the logo is looked up
//! in the public directory, and pages missing from the sidebar are listed.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use docnav::config::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind, SiteConfig, expand_tilde,
};
use docnav::content::{collect_pages, find_orphans};
use docnav::route::{ResolveResult, is_external_link, resolve_route};
use docnav::{debug, log};
use rustc_hash::FxHashSet;

use super::{CheckArgs, plural};

/// Outcome of checking a config against a content directory.
#[derive(Debug, Default)]
pub struct ContentReport {
    pub diagnostics: ConfigDiagnostics,
    /// Number of routes that resolved to a page.
    pub resolved: usize,
    /// Pages on disk no route reaches.
    pub orphans: Vec<PathBuf>,
}

/// Run the check command.
pub fn check_site(config: &SiteConfig, config_path: &Path, args: &CheckArgs) -> Result<()> {
    let theme = &config.theme_config;
    log!(
        "check";
        "{}: {}, {}",
        config_path.display(),
        plural(theme.nav.len(), "nav link", "nav links"),
        plural(theme.sidebar_len(), "sidebar entry", "sidebar entries")
    );

    let Some(content) = &args.content else {
        log!("ok"; "config is valid");
        return Ok(());
    };

    let content_dir = expand_tilde(content);
    if !content_dir.is_dir() {
        bail!("content directory `{}` not found", content_dir.display());
    }

    let public_dir = args
        .public
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| content_dir.join(".vuepress").join("public"));
    debug!("check"; "content: {}, public: {}", content_dir.display(), public_dir.display());

    let report = check_content(config, &content_dir, &public_dir, args.warn_only);

    report.diagnostics.print_warnings();
    print_orphans(&report.orphans);

    if report.diagnostics.has_errors() {
        bail!(ConfigError::Diagnostics(report.diagnostics));
    }

    log!(
        "ok";
        "{} resolved against {}",
        plural(report.resolved, "route", "routes"),
        content_dir.display()
    );
    Ok(())
}

/// Resolve routes and assets of `config` against the filesystem.
pub fn check_content(
    config: &SiteConfig,
    content_dir: &Path,
    public_dir: &Path,
    warn_only: bool,
) -> ContentReport {
    let mut report = ContentReport::default();
    let mut reached = FxHashSet::default();
    let theme = &config.theme_config;

    // Logo sits before the sidebar in the document.
    if let Some(logo) = &theme.logo
        && !is_external_link(logo)
    {
        let asset = public_dir.join(logo.trim_start_matches('/'));
        if !asset.is_file() {
            let diagnostic = ConfigDiagnostic::new(
                DiagnosticKind::MissingAsset,
                SiteConfig::theme_field().key("logo"),
                format!("logo `{}` not found at {}", logo, asset.display()),
            )
            .with_hint("add the file or pass --public <dir>");
            report.diagnostics.push(diagnostic, !warn_only);
        }
    }

    for (field, route) in theme.routes(&SiteConfig::theme_field()) {
        match resolve_route(content_dir, route) {
            ResolveResult::Found(page) => {
                report.resolved += 1;
                reached.insert(page);
            }
            // Rejected at load time; nothing to look up.
            ResolveResult::External(_) => {}
            ResolveResult::NotFound { target, tried } => {
                let diagnostic = ConfigDiagnostic::new(
                    DiagnosticKind::DanglingRoute,
                    field,
                    format!("route `{target}` has no page"),
                )
                .with_hint(format!("create {}", tried.join(" or ")));
                report.diagnostics.push(diagnostic, !warn_only);
            }
        }
    }

    report.orphans = find_orphans(&collect_pages(content_dir), &reached);
    report
}

/// Print pages that are not reachable from the sidebar.
fn print_orphans(orphans: &[PathBuf]) {
    if orphans.is_empty() {
        return;
    }
    log!(
        "warning";
        "{} not in the sidebar:",
        plural(orphans.len(), "page", "pages")
    );
    for page in orphans {
        eprintln!("- {}", page.display());
    }
}
