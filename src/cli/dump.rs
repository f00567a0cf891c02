//! `docnav dump`: print the validated config in another format.

use anyhow::{Context, Result};
use docnav::config::SiteConfig;
use docnav::{debug, log};
use std::{
    fs,
    io::{Write, stdout},
};

use super::DumpArgs;

/// Render `config` and write it to `--output` or stdout.
pub fn dump_config(config: &SiteConfig, args: &DumpArgs) -> Result<()> {
    let format = args.resolve_format();
    debug!("dump"; "format: {}", format);
    let rendered = config.render(format, !args.compact)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
            }
            fs::write(path, with_newline(rendered))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("dump"; "wrote {}", path.display());
        }
        None => {
            let mut out = stdout().lock();
            out.write_all(with_newline(rendered).as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav::config::{Format, LoadOptions};
    use tempfile::TempDir;

    const CONFIG: &str = r#"
title = "Docs"
description = "d"

[[themeConfig.sidebar]]
title = "Quick Start"
path = "/quick/"
"#;

    #[test]
    fn test_dump_to_file_round_trips() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out/config.json");
        let config = SiteConfig::parse_str(CONFIG, Format::Toml).unwrap();
        let args = DumpArgs {
            format: None,
            compact: false,
            output: Some(output.clone()),
        };

        dump_config(&config, &args).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.ends_with('\n'));
        let reloaded = SiteConfig::load(&written, Format::Json, &LoadOptions::default())
            .unwrap()
            .into_config();
        assert_eq!(reloaded, config);
    }
}
