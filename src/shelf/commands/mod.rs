use crate::model::{Catalog, EnrichedProduct};
use crate::state::FilterState;
use serde::Serialize;

pub mod enrich;
pub mod filter;
pub mod init;
pub mod tabs;

pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// An entry in the owner selector. The "All" tab has an empty `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerTab {
    pub label: String,
    pub name: String,
    pub is_active: bool,
}

/// An entry in the category selector. Display only, it filters nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub id: u32,
    pub title: String,
    pub icon: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<EnrichedProduct>,
    pub owner_tabs: Vec<OwnerTab>,
    pub category_tabs: Vec<CategoryTab>,
    pub state: FilterState,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<EnrichedProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_owner_tabs(mut self, tabs: Vec<OwnerTab>) -> Self {
        self.owner_tabs = tabs;
        self
    }

    pub fn with_category_tabs(mut self, tabs: Vec<CategoryTab>) -> Self {
        self.category_tabs = tabs;
        self
    }

    pub fn with_state(mut self, state: FilterState) -> Self {
        self.state = state;
        self
    }
}

/// Builds the full listing for the current state: rows, both tab rows, a
/// warning when the selected owner is not a known user, and the
/// informational message for an empty row set.
pub fn list(catalog: &Catalog, visible: &[EnrichedProduct], state: &FilterState) -> CmdResult {
    let mut result = CmdResult::default()
        .with_listed_products(visible.to_vec())
        .with_owner_tabs(tabs::owner_tabs(&catalog.users, state))
        .with_category_tabs(tabs::category_tabs(&catalog.categories))
        .with_state(state.clone());

    let owner_known =
        state.owner.is_empty() || catalog.users.iter().any(|u| u.name == state.owner);
    if !owner_known {
        result.add_message(CmdMessage::warning(format!(
            "No owner named '{}'",
            state.owner
        )));
    }

    if visible.is_empty() {
        result.add_message(CmdMessage::info(NO_MATCHES_MESSAGE));
    }

    result
}
