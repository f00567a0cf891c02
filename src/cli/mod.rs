//! Command-line interface module.

mod args;
pub mod check;
pub mod dump;
pub mod init;
pub mod tree;

pub use args::{CheckArgs, Cli, Commands, DumpArgs};

/// `1 route`, `3 routes`
pub(crate) fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "page", "pages"), "0 pages");
        assert_eq!(plural(1, "sidebar entry", "sidebar entries"), "1 sidebar entry");
        assert_eq!(plural(2, "sidebar entry", "sidebar entries"), "2 sidebar entries");
    }
}
