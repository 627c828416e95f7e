//! # Rendering Module
//!
//! Styled terminal output built from minijinja templates and the named styles
//! in [`SHELF_THEME`], rendered through `outstanding`.
//!
//! Layout calculations (column widths, padding) stay in Rust because they
//! need Unicode-aware widths: category icons are emoji and take two columns.
//! Templates handle presentation: which style a cell gets, tab highlighting,
//! and whether the table or nothing is shown.

use super::styles::{names, SHELF_THEME};
use super::templates::{CATALOG_TEMPLATE, HELP_TEMPLATE, TEXT_LIST_TEMPLATE};
use colored::Colorize;
use outstanding::{render_with_color, ThemeChoice};
use serde::Serialize;
use shelf::api::{CategoryTab, CmdMessage, CmdResult, MessageLevel, OwnerTab};
use shelf::model::{EnrichedProduct, Sex};
use unicode_width::UnicodeWidthStr;

pub const PAGE_TITLE: &str = "Product Categories";
pub const CLEAR_MARKER: &str = "✕";
pub const COLUMN_GAP: &str = "  ";

/// Header labels with their sort markers. The markers are decoration only.
const HEADERS: [&str; 4] = ["ID ⇅", "Product ▼", "Category ▲", "User ⇅"];

#[derive(Serialize)]
struct TabData {
    display: String,
    style: &'static str,
}

#[derive(Serialize)]
struct RowData {
    id: String,
    name: String,
    category: String,
    owner: String,
    owner_style: &'static str,
}

#[derive(Serialize)]
struct CatalogData {
    title: &'static str,
    owner_tabs: Vec<TabData>,
    query: String,
    has_query: bool,
    clear_marker: &'static str,
    category_tabs: Vec<String>,
    header: Vec<String>,
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct TextLine {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<TextLine>,
    empty_message: String,
}

#[derive(Serialize)]
pub struct HelpEntry {
    pub usage: String,
    pub description: String,
}

#[derive(Serialize)]
struct HelpData {
    entries: Vec<HelpEntry>,
}

/// Renders a template with the shelf theme, always ending in a newline.
fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, String> {
    let theme = ThemeChoice::from(&*SHELF_THEME);
    let mut output =
        render_with_color(template, data, theme, use_color).map_err(|e| e.to_string())?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// The catalog page: owner tabs, search line, category tabs, product table.
pub fn render_catalog(result: &CmdResult, use_color: bool) -> String {
    let data = CatalogData {
        title: PAGE_TITLE,
        owner_tabs: owner_tab_data(&result.owner_tabs),
        query: result.state.query.clone(),
        has_query: result.state.has_query(),
        clear_marker: CLEAR_MARKER,
        category_tabs: category_labels(&result.category_tabs),
        header: Vec::new(),
        rows: Vec::new(),
    };
    let data = with_table(data, &result.listed_products);

    render_template(CATALOG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn owner_tab_data(tabs: &[OwnerTab]) -> Vec<TabData> {
    tabs.iter()
        .map(|tab| {
            if tab.is_active {
                TabData {
                    display: format!("[{}]", tab.label),
                    style: names::TAB_ACTIVE,
                }
            } else {
                TabData {
                    display: format!(" {} ", tab.label),
                    style: names::TAB,
                }
            }
        })
        .collect()
}

fn category_labels(tabs: &[CategoryTab]) -> Vec<String> {
    std::iter::once(shelf::commands::tabs::ALL_TAB_LABEL.to_string())
        .chain(tabs.iter().map(|tab| tab.title.clone()))
        .collect()
}

fn with_table(mut data: CatalogData, products: &[EnrichedProduct]) -> CatalogData {
    if products.is_empty() {
        return data;
    }

    let cells: Vec<[String; 4]> = products.iter().map(row_cells).collect();

    let mut widths: [usize; 4] = HEADERS.map(|h| h.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    data.header = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == HEADERS.len() - 1 {
                h.to_string()
            } else {
                pad_to_width(h, widths[i])
            }
        })
        .collect();

    data.rows = products
        .iter()
        .zip(cells)
        .map(|(product, [id, name, category, owner])| RowData {
            id: pad_to_width(&id, widths[0]),
            name: pad_to_width(&name, widths[1]),
            category: pad_to_width(&category, widths[2]),
            owner,
            owner_style: owner_style(product),
        })
        .collect();

    data
}

fn row_cells(product: &EnrichedProduct) -> [String; 4] {
    [
        product.id().to_string(),
        product.name().to_string(),
        category_cell(product),
        product.owner_name().unwrap_or_default().to_string(),
    ]
}

/// `"{icon} - {title}"`, or empty when the category did not resolve.
pub fn category_cell(product: &EnrichedProduct) -> String {
    product
        .category
        .as_ref()
        .map(|c| format!("{} - {}", c.icon, c.title))
        .unwrap_or_default()
}

fn owner_style(product: &EnrichedProduct) -> &'static str {
    match product.user.as_ref().map(|u| u.sex) {
        Some(Sex::Male) => names::OWNER_MALE,
        Some(Sex::Female) => names::OWNER_FEMALE,
        None => names::OWNER_UNKNOWN,
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// One line per owner tab, active one marked.
pub fn render_owner_tabs(tabs: &[OwnerTab], use_color: bool) -> String {
    let lines = tabs
        .iter()
        .map(|tab| TextLine {
            text: format!("{} {}", if tab.is_active { "*" } else { " " }, tab.label),
            style: if tab.is_active {
                names::TAB_ACTIVE
            } else {
                names::TAB
            },
        })
        .collect();
    render_text_list(lines, "No owners.", use_color)
}

pub fn render_category_tabs(tabs: &[CategoryTab], use_color: bool) -> String {
    let lines = tabs
        .iter()
        .map(|tab| TextLine {
            text: format!("{} {}", tab.icon, tab.title),
            style: names::CATEGORY_TAB,
        })
        .collect();
    render_text_list(lines, "No categories.", use_color)
}

fn render_text_list(lines: Vec<TextLine>, empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines,
        empty_message: empty_message.to_string(),
    };
    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn render_help(entries: Vec<HelpEntry>, use_color: bool) -> String {
    render_template(HELP_TEMPLATE, &HelpData { entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Formats command messages, one per line.
pub fn format_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", format_messages(messages));
}
