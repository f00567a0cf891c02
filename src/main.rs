//! docnav - navigation config tool for documentation sites.

mod cli;

use anyhow::{Result, anyhow};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use docnav::config::{SiteConfig, find_config_file};
use docnav::{debug, logger};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry, force } => {
            cli::init::new_config(name.as_deref(), *dry, *force)
        }
        Commands::Check { args } => {
            let (config, path) = load_config(&cli)?;
            cli::check::check_site(&config, &path, args)
        }
        Commands::Dump { args } => cli::dump::dump_config(&load_config(&cli)?.0, args),
        Commands::Tree => cli::tree::print_tree(&load_config(&cli)?.0),
    }
}

/// Locate, load and validate the config, printing any warnings.
fn load_config(cli: &Cli) -> Result<(SiteConfig, PathBuf)> {
    let path = locate_config(&cli.config)?;
    debug!("config"; "loading {}", path.display());

    let loaded = SiteConfig::from_path(&path, &cli.load_options())?;
    loaded.diagnostics.print_warnings();
    Ok((loaded.into_config(), path))
}

/// Find the config file, searching upward from the current directory.
fn locate_config(config: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    find_config_file(&cwd, config).ok_or_else(|| {
        anyhow!(
            "config file `{}` not found in {} or any parent directory (run `docnav init` to create one)",
            config.display(),
            cwd.display()
        )
    })
}
