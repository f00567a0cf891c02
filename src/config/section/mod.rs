//! Configuration section definitions.
//!
//! | Module    | Document key                | Purpose                    |
//! |-----------|-----------------------------|----------------------------|
//! | `theme`   | `themeConfig`               | Logo, nav, sidebar         |
//! | `nav`     | `themeConfig.nav[]`         | Top navigation entries     |
//! | `sidebar` | `themeConfig.sidebar[]`     | Recursive sidebar tree     |

mod nav;
mod sidebar;
mod theme;

pub use nav::NavItem;
pub use sidebar::SidebarItem;
pub use theme::ThemeConfig;
