//! Terminal client: argument parsing, rendering and the browse loop.
//! Not part of the library API.

pub mod browse;
pub mod commands;
pub mod render;
pub mod setup;
pub mod styles;
pub mod templates;

pub use commands::run;
