//! # API Facade
//!
//! The API layer is the single entry point for every catalog operation,
//! regardless of the UI being used.
//!
//! ## Lifecycle
//!
//! [`CatalogApi::new`] loads the records from a [`RecordSource`] and runs the
//! enrichment join exactly once. The enriched rows are owned by the API and
//! only read from then on.
//!
//! Each event method (`select_owner`, `set_query`, `clear_query`,
//! `reset_all`) applies a [`FilterState`] transition and re-runs the filter
//! engine before returning, so `visible()` always reflects `state()`. There is
//! no deferred or background evaluation.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: the join and the filter live in `commands/`
//! - **I/O**: no stdout, stderr or terminal assumptions
//! - **Presentation**: returns data structures, not strings
//!
//! ## Generic Over RecordSource
//!
//! - Production: `CatalogApi<JsonDirSource>` or the built-in sample
//! - Testing: `CatalogApi<InMemorySource>`

use crate::commands::{self, enrich::enrich, filter::filter, tabs};
use crate::error::Result;
use crate::model::{Catalog, EnrichedProduct};
use crate::store::RecordSource;
use tracing::{debug, info};

/// The main API facade.
pub struct CatalogApi<S: RecordSource> {
    source: S,
    catalog: Catalog,
    enriched: Vec<EnrichedProduct>,
    state: FilterState,
    visible: Vec<EnrichedProduct>,
}

impl<S: RecordSource> CatalogApi<S> {
    pub fn new(source: S) -> Result<Self> {
        let catalog = source.load()?;
        info!(
            source = %source.describe(),
            users = catalog.users.len(),
            categories = catalog.categories.len(),
            products = catalog.products.len(),
            "catalog loaded"
        );

        let enriched = enrich(&catalog.products, &catalog.categories, &catalog.users);
        let state = FilterState::default();
        let visible = filter(&enriched, &state);

        Ok(Self {
            source,
            catalog,
            enriched,
            state,
            visible,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn enriched(&self) -> &[EnrichedProduct] {
        &self.enriched
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn visible(&self) -> &[EnrichedProduct] {
        &self.visible
    }

    pub fn select_owner(&mut self, name: impl Into<String>) -> &[EnrichedProduct] {
        self.apply(FilterEvent::SelectOwner(name.into()))
    }

    pub fn set_query(&mut self, text: impl Into<String>) -> &[EnrichedProduct] {
        self.apply(FilterEvent::SetQuery(text.into()))
    }

    pub fn clear_query(&mut self) -> &[EnrichedProduct] {
        self.apply(FilterEvent::ClearQuery)
    }

    pub fn reset_all(&mut self) -> &[EnrichedProduct] {
        self.apply(FilterEvent::ResetAll)
    }

    /// Applies one event and recomputes the visible rows.
    pub fn apply(&mut self, event: FilterEvent) -> &[EnrichedProduct] {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
        self.visible = filter(&self.enriched, &self.state);
        debug!(
            owner = %self.state.owner,
            query = %self.state.query,
            visible = self.visible.len(),
            "filter re-evaluated"
        );
        &self.visible
    }

    /// The current rows with tabs and messages, ready for a UI.
    pub fn list(&self) -> commands::CmdResult {
        commands::list(&self.catalog, &self.visible, &self.state)
    }

    pub fn owner_tabs(&self) -> Vec<commands::OwnerTab> {
        tabs::owner_tabs(&self.catalog.users, &self.state)
    }

    pub fn category_tabs(&self) -> Vec<commands::CategoryTab> {
        tabs::category_tabs(&self.catalog.categories)
    }
}

pub use crate::commands::{
    CategoryTab, CmdMessage, CmdResult, MessageLevel, OwnerTab, NO_MATCHES_MESSAGE,
};
pub use crate::state::{FilterEvent, FilterState};
