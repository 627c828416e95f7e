//! Interactive filtering: one command per input line.
//!
//! Every line is turned into a filter event, applied through the API (which
//! re-filters synchronously), and the page is rendered again before the next
//! line is read.

use super::render::{format_messages, render_catalog, render_help, HelpEntry};
use shelf::api::{CatalogApi, FilterEvent};
use shelf::error::Result;
use shelf::store::RecordSource;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Event(FilterEvent),
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one input line. Arguments after the keyword are kept verbatim, so
/// `query  Br` searches for `" Br"`.
pub fn parse_line(line: &str) -> BrowseCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let (keyword, rest) = match line.trim_start().split_once(' ') {
        Some((keyword, rest)) => (keyword, Some(rest)),
        None => (line.trim(), None),
    };

    match (keyword, rest) {
        ("owner" | "o", Some(name)) => BrowseCommand::Event(FilterEvent::SelectOwner(name.to_string())),
        ("owner" | "o", None) | ("all", None) => {
            BrowseCommand::Event(FilterEvent::SelectOwner(String::new()))
        }
        ("query" | "find", Some(text)) => {
            BrowseCommand::Event(FilterEvent::SetQuery(text.to_string()))
        }
        ("query" | "find", None) | ("clear", None) => {
            BrowseCommand::Event(FilterEvent::ClearQuery)
        }
        ("reset", None) => BrowseCommand::Event(FilterEvent::ResetAll),
        ("" | "show", None) => BrowseCommand::Show,
        ("help" | "?", None) => BrowseCommand::Help,
        ("quit" | "exit" | "q", None) => BrowseCommand::Quit,
        _ => BrowseCommand::Unknown(line.to_string()),
    }
}

pub fn help_entries() -> Vec<HelpEntry> {
    [
        ("owner <name>", "show only products owned by <name> (alias: o)"),
        ("all", "show every owner"),
        ("query <text>", "show only names containing <text> (alias: find)"),
        ("clear", "clear the search text"),
        ("reset", "clear owner and search text"),
        ("show", "render the page again"),
        ("help", "list these commands (alias: ?)"),
        ("quit", "leave (aliases: q, exit)"),
    ]
    .into_iter()
    .map(|(usage, description)| HelpEntry {
        usage: format!("{:<14}", usage),
        description: description.to_string(),
    })
    .collect()
}

/// Runs the loop until `quit` or end of input.
pub fn run<S, R, W>(
    api: &mut CatalogApi<S>,
    input: R,
    out: &mut W,
    use_color: bool,
    prompt: Option<&str>,
) -> Result<()>
where
    S: RecordSource,
    R: BufRead,
    W: Write,
{
    write_page(api, out, use_color)?;

    let mut lines = input.lines();
    loop {
        if let Some(prompt) = prompt {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let command = parse_line(&line?);
        debug!(?command, "browse command");

        match command {
            BrowseCommand::Event(event) => {
                api.apply(event);
                write_page(api, out, use_color)?;
            }
            BrowseCommand::Show => write_page(api, out, use_color)?,
            BrowseCommand::Help => write!(out, "{}", render_help(help_entries(), use_color))?,
            BrowseCommand::Quit => break,
            BrowseCommand::Unknown(line) => {
                writeln!(out, "Unknown command: {} (type `help`)", line)?;
            }
        }
    }

    Ok(())
}

fn write_page<S: RecordSource, W: Write>(
    api: &CatalogApi<S>,
    out: &mut W,
    use_color: bool,
) -> Result<()> {
    let result = api.list();
    write!(out, "{}", render_catalog(&result, use_color))?;
    write!(out, "{}", format_messages(&result.messages))?;
    writeln!(out)?;
    Ok(())
}
