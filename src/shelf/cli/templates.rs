//! Template sources for terminal output.
//!
//! Templates use minijinja syntax and are rendered by `outstanding`. The
//! `style` filter takes a style name from [`super::styles::SHELF_THEME`];
//! an unregistered name shows up prefixed with `(!?)`.

pub const CATALOG_TEMPLATE: &str = include_str!("templates/catalog.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
