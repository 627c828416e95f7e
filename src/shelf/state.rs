//! # Filter State
//!
//! The two pieces of transient state that drive visibility: the selected owner
//! and the search text. Every transition consumes the state and returns the
//! next one, so a consumer never observes a half-applied change (`reset_all`
//! clears both fields in a single step).
//!
//! The query is stored exactly as typed. Case folding happens only inside the
//! filter engine, so the original casing can be shown back in an input field.

use serde::{Deserialize, Serialize};

/// An empty `owner` means "all owners".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub owner: String,
    pub query: String,
}

impl FilterState {
    pub fn new(owner: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            query: query.into(),
        }
    }

    pub fn select_owner(self, name: impl Into<String>) -> Self {
        Self {
            owner: name.into(),
            ..self
        }
    }

    pub fn set_query(self, text: impl Into<String>) -> Self {
        Self {
            query: text.into(),
            ..self
        }
    }

    pub fn clear_query(self) -> Self {
        self.set_query("")
    }

    pub fn reset_all(self) -> Self {
        Self::default()
    }

    pub fn is_default(&self) -> bool {
        self.owner.is_empty() && self.query.is_empty()
    }

    /// Whether a clear control should be offered for the search text.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Tab highlighting: the empty name stands for the "All" tab.
    pub fn is_owner_selected(&self, name: &str) -> bool {
        self.owner == name
    }

    pub fn apply(self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::SelectOwner(name) => self.select_owner(name),
            FilterEvent::SetQuery(text) => self.set_query(text),
            FilterEvent::ClearQuery => self.clear_query(),
            FilterEvent::ResetAll => self.reset_all(),
        }
    }
}

/// A discrete user interaction that changes the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    SelectOwner(String),
    SetQuery(String),
    ClearQuery,
    ResetAll,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let state = FilterState::default();
        assert!(state.is_default());
        assert!(state.is_owner_selected(""));
        assert!(!state.has_query());
    }

    #[test]
    fn test_select_owner_keeps_query() {
        let state = FilterState::new("", "br").select_owner("Max");
        assert_eq!(state, FilterState::new("Max", "br"));

        let state = state.select_owner("");
        assert_eq!(state, FilterState::new("", "br"));
    }

    #[test]
    fn test_set_query_is_verbatim() {
        let state = FilterState::default().set_query("  MiLk ");
        assert_eq!(state.query, "  MiLk ");
        assert!(state.has_query());
    }

    #[test]
    fn test_clear_query_keeps_owner() {
        let state = FilterState::new("Anna", "bread").clear_query();
        assert_eq!(state, FilterState::new("Anna", ""));
        assert_eq!(state.clone().clear_query(), state.set_query(""));
    }

    #[test]
    fn test_reset_all_is_idempotent() {
        let once = FilterState::new("Max", "x").reset_all();
        let twice = once.clone().reset_all();
        assert_eq!(once, twice);
        assert!(once.is_default());
    }

    #[test]
    fn test_apply_dispatches_events() {
        let state = FilterState::default()
            .apply(FilterEvent::SelectOwner("Max".into()))
            .apply(FilterEvent::SetQuery("Br".into()));
        assert_eq!(state, FilterState::new("Max", "Br"));

        let state = state.apply(FilterEvent::ClearQuery);
        assert_eq!(state, FilterState::new("Max", ""));

        assert!(state.apply(FilterEvent::ResetAll).is_default());
    }

    #[test]
    fn test_owner_selection_is_case_sensitive() {
        let state = FilterState::default().select_owner("Max");
        assert!(state.is_owner_selected("Max"));
        assert!(!state.is_owner_selected("max"));
        assert!(!state.is_owner_selected(""));
    }
}
