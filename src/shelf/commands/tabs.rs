use crate::commands::{CategoryTab, OwnerTab};
use crate::model::{Category, User};
use crate::state::FilterState;

pub const ALL_TAB_LABEL: &str = "All";

/// "All" first, then one tab per user in input order.
pub fn owner_tabs(users: &[User], state: &FilterState) -> Vec<OwnerTab> {
    let all = OwnerTab {
        label: ALL_TAB_LABEL.to_string(),
        name: String::new(),
        is_active: state.is_owner_selected(""),
    };

    std::iter::once(all)
        .chain(users.iter().map(|user| OwnerTab {
            label: user.name.clone(),
            name: user.name.clone(),
            is_active: state.is_owner_selected(&user.name),
        }))
        .collect()
}

pub fn category_tabs(categories: &[Category]) -> Vec<CategoryTab> {
    categories
        .iter()
        .map(|c| CategoryTab {
            id: c.id,
            title: c.title.clone(),
            icon: c.icon.clone(),
        })
        .collect()
}
