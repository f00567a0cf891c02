//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use docnav::config::{Format, LoadOptions, ValidateLevel};
use std::path::PathBuf;

/// Documentation site navigation config tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docnav.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Treat unknown config keys as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// How to treat sidebar entries that declare the same route
    #[arg(long, global = true, value_enum, default_value = "error")]
    pub duplicates: ValidateLevel,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config, optionally against a content directory
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the validated config in another format
    #[command(visible_alias = "d")]
    Dump {
        #[command(flatten)]
        args: DumpArgs,
    },

    /// Show the navigation bar and sidebar as a tree
    #[command(visible_alias = "t")]
    Tree,

    /// Write a starter config file
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Content directory; enables page resolution for sidebar routes
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Public asset directory for the logo (default: <content>/.vuepress/public)
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub public: Option<PathBuf>,

    /// Report routes without a page as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Dump command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DumpArgs {
    /// Output format (default: from --output extension, else json)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Loader options derived from global flags.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default()
            .strict(self.strict)
            .duplicates(self.duplicates)
    }
}

impl DumpArgs {
    /// Explicit format, else guessed from the output path, else JSON.
    pub fn resolve_format(&self) -> Format {
        self.format
            .or_else(|| self.output.as_deref().and_then(Format::from_path))
            .unwrap_or(Format::Json)
    }
}
