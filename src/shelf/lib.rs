//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic catalog library**. It derives the rows a product
//! table should show from three record collections (users, categories,
//! products) and two pieces of transient state (selected owner, search text).
//! The terminal client in `cli/` is one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, reads browse events    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads records once, joins once                           │
//! │  - Owns the filter state, re-filters on every event         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, state.rs)                    │
//! │  - Enrichment join, filter engine, state transitions        │
//! │  - Pure functions, except `init` which writes a catalog     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (store/)                                      │
//! │  - RecordSource trait                                       │
//! │  - JsonDirSource (files), InMemorySource (tests, sample)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Absent References
//!
//! A product whose category does not exist, or whose category's owner does
//! not exist, is still listed. The unresolved side is `None`. Nothing in the
//! join or the filter can fail; errors only come from loading records.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Enrichment join, filter engine, tab listings
//! - [`state`]: Filter state and its transitions
//! - [`store`]: Record sources
//! - [`model`]: Core data types (`User`, `Category`, `Product`, `EnrichedProduct`)
//! - [`config`]: Configuration management
//! - [`init`]: Startup wiring (config, data dir, source selection)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod state;
pub mod store;
