//! `docnav tree`: show the navigation bar and sidebar as a tree.
//!
//! ```text
//! BitXHub Docs (/bitxhub/)
//! ├── nav
//! │   └── GitHub -> https://github.com/meshplus/bitxhub
//! └── sidebar
//!     ├── Quick Start  /quick/
//!     └── Development  /develop/
//!         └── Rule Engine  /develop/rule
//! ```

use anyhow::Result;
use docnav::config::{NavItem, SidebarItem, SiteConfig};
use std::io::{Write, stdout};

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Print the tree to stdout.
pub fn print_tree(config: &SiteConfig) -> Result<()> {
    let mut out = stdout().lock();
    out.write_all(render_tree(config).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Render the navigation structure of `config`.
pub fn render_tree(config: &SiteConfig) -> String {
    let theme = &config.theme_config;
    let mut out = String::new();

    out.push_str(&config.title);
    if let Some(base) = &config.base {
        out.push_str(&format!(" ({base})"));
    }
    out.push('\n');

    let sections = [
        ("nav", !theme.nav.is_empty()),
        ("sidebar", !theme.sidebar.is_empty()),
    ];
    let shown: Vec<_> = sections.iter().filter(|(_, present)| *present).collect();

    for (i, (name, _)) in shown.iter().enumerate() {
        let last = i + 1 == shown.len();
        out.push_str(if last { LAST } else { BRANCH });
        out.push_str(name);
        out.push('\n');

        let prefix = if last { SPACE } else { PIPE };
        match *name {
            "nav" => render_nav(&theme.nav, prefix, &mut out),
            _ => render_sidebar(&theme.sidebar, prefix, &mut out),
        }
    }

    out
}

fn render_nav(items: &[NavItem], prefix: &str, out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        let connector = if i + 1 == items.len() { LAST } else { BRANCH };
        out.push_str(&format!("{prefix}{connector}{} -> {}\n", item.text, item.link));
    }
}

fn render_sidebar(items: &[SidebarItem], prefix: &str, out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        let last = i + 1 == items.len();
        let connector = if last { LAST } else { BRANCH };
        out.push_str(&format!("{prefix}{connector}{}  {}\n", item.title, item.path));

        if !item.children.is_empty() {
            let child_prefix = format!("{prefix}{}", if last { SPACE } else { PIPE });
            render_sidebar(&item.children, &child_prefix, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav::config::ThemeConfig;

    fn config() -> SiteConfig {
        SiteConfig {
            title: "BitXHub Docs".into(),
            description: "d".into(),
            base: Some("/bitxhub/".into()),
            theme_config: ThemeConfig {
                logo: None,
                nav: vec![NavItem::new("GitHub", "https://github.com/meshplus/bitxhub")],
                sidebar: vec![
                    SidebarItem::new("Quick Start", "/quick/"),
                    SidebarItem::new("Development", "/develop/").with_children(vec![
                        SidebarItem::new("Rule Engine", "/develop/rule"),
                        SidebarItem::new("Routing", "/develop/routing").with_children(vec![
                            SidebarItem::new("Relay", "/develop/routing/relay"),
                        ]),
                    ]),
                    SidebarItem::new("FAQ", "/faq"),
                ],
            },
        }
    }

    #[test]
    fn test_render_tree() {
        let expected = "\
BitXHub Docs (/bitxhub/)
├── nav
│   └── GitHub -> https://github.com/meshplus/bitxhub
└── sidebar
    ├── Quick Start  /quick/
    ├── Development  /develop/
    │   ├── Rule Engine  /develop/rule
    │   └── Routing  /develop/routing
    │       └── Relay  /develop/routing/relay
    └── FAQ  /faq
";
        assert_eq!(render_tree(&config()), expected);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut config = config();
        config.base = None;
        config.theme_config.sidebar.clear();

        assert_eq!(
            render_tree(&config),
            "BitXHub Docs\n└── nav\n    └── GitHub -> https://github.com/meshplus/bitxhub\n"
        );
    }
}
