use console::Style;
use once_cell::sync::Lazy;
use outstanding::Theme;

/// Style names referenced by the templates.
pub mod names {
    pub const TITLE: &str = "title";
    pub const TAB: &str = "tab";
    pub const TAB_ACTIVE: &str = "tab_active";
    pub const CATEGORY_TAB: &str = "category_tab";
    pub const HEADER: &str = "header";
    pub const ID: &str = "id";
    pub const OWNER_MALE: &str = "owner_male";
    pub const OWNER_FEMALE: &str = "owner_female";
    pub const OWNER_UNKNOWN: &str = "owner_unknown";
    pub const QUERY: &str = "query";
    pub const HINT: &str = "hint";
    pub const INFO: &str = "info";
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::TAB, Style::new().dim())
        .add(names::TAB_ACTIVE, Style::new().bold().underlined())
        .add(names::CATEGORY_TAB, Style::new().cyan())
        .add(names::HEADER, Style::new().bold())
        .add(names::ID, Style::new().bold())
        .add(names::OWNER_MALE, Style::new().blue())
        .add(names::OWNER_FEMALE, Style::new().red())
        .add(names::OWNER_UNKNOWN, Style::new())
        .add(names::QUERY, Style::new().yellow())
        .add(names::HINT, Style::new().dim().italic())
        .add(names::INFO, Style::new().dim())
});
