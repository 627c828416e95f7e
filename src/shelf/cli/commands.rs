//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf. It is the only place
//! in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the log subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and colour settings
//! - `handle_*()`: Per-command handlers that call the API and print output

use super::browse;
use super::render::{print_messages, render_catalog, render_category_tabs, render_owner_tabs};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use shelf::api::CatalogApi;
use shelf::commands::init;
use shelf::error::{Result, ShelfError};
use shelf::init::{default_config_dir, initialize, CatalogSource};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const BROWSE_PROMPT: &str = "shelf> ";
const INIT_DIR_NAME: &str = "catalog";

struct AppContext {
    api: CatalogApi<CatalogSource>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // init must work before any catalog exists, so it skips loading one.
    if let Some(Commands::Init { dir }) = &cli.command {
        return handle_init(&cli, dir.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { owner, query }) => handle_list(&mut ctx, owner, query),
        Some(Commands::Owners) => handle_owners(&ctx),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Browse) => handle_browse(&mut ctx),
        Some(Commands::Init { .. }) => Ok(()),
        None => handle_list(&mut ctx, None, None),
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level. Logs go to stderr.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(default_config_dir)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir(cli);
    let ctx = initialize(cli.data_dir.as_deref(), config_dir.as_deref())?;

    let use_color =
        !cli.no_color && ctx.config.color && Term::stdout().features().colors_supported();
    if !use_color {
        colored::control::set_override(false);
    }

    Ok(AppContext {
        api: ctx.api,
        use_color,
    })
}

fn handle_list(ctx: &mut AppContext, owner: Option<String>, query: Option<String>) -> Result<()> {
    if let Some(owner) = owner {
        ctx.api.select_owner(owner);
    }
    if let Some(query) = query {
        ctx.api.set_query(query);
    }

    let result = ctx.api.list();
    print!("{}", render_catalog(&result, ctx.use_color));
    print_messages(&result.messages);
    Ok(())
}

fn handle_owners(ctx: &AppContext) -> Result<()> {
    print!("{}", render_owner_tabs(&ctx.api.owner_tabs(), ctx.use_color));
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    print!(
        "{}",
        render_category_tabs(&ctx.api.category_tabs(), ctx.use_color)
    );
    Ok(())
}

fn handle_init(cli: &Cli, dir: Option<PathBuf>) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    let config_dir = config_dir(cli)
        .ok_or_else(|| ShelfError::Config("no config directory available".to_string()))?;
    let target = dir
        .or_else(|| cli.data_dir.clone())
        .unwrap_or_else(|| config_dir.join(INIT_DIR_NAME));

    let result = init::run(&target, &config_dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal().then_some(BROWSE_PROMPT);
    let mut stdout = std::io::stdout().lock();
    browse::run(&mut ctx.api, stdin.lock(), &mut stdout, ctx.use_color, prompt)
}
