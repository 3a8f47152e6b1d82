//! Interactive filtering loop.
//!
//! Each input line maps to one inbound event (search changed, chip clicked, clear
//! tags, clear all) or to a display request. After every event the visible set is
//! re-rendered from the session, never patched.

use super::render::{render_chips, render_filter_state, render_messages, render_projects};
use showcase::api::ShowcaseApi;
use showcase::error::Result;
use showcase::session::FilterEvent;
use showcase::store::CatalogSource;
use std::borrow::Cow;
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

const HELP: &str = "\
  /text, search text   set the search term (verbatim; `/` alone clears it)
  tag Name             toggle a tag chip
  clear-tags           deselect all tags
  clear                deselect all tags and clear the search
  tags                 show the tag chips
  list                 show the current results
  help                 show this help
  quit                 leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Event(FilterEvent),
    Tags,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

/// Leading whitespace is ignored everywhere; the text after `/` or `search ` is kept
/// verbatim.
pub fn parse_input(line: &str) -> BrowseInput {
    let head = line.trim_start();
    if let Some(term) = head.strip_prefix('/') {
        return BrowseInput::Event(FilterEvent::SearchChanged(term.to_string()));
    }
    if let Some(term) = head.strip_prefix("search ") {
        return BrowseInput::Event(FilterEvent::SearchChanged(term.to_string()));
    }
    if let Some(tag) = head.strip_prefix("tag ") {
        let tag = tag.trim();
        if !tag.is_empty() {
            return BrowseInput::Event(FilterEvent::TagClicked(tag.to_string()));
        }
    }

    match line.trim() {
        "search" => BrowseInput::Event(FilterEvent::SearchChanged(String::new())),
        "clear-tags" => BrowseInput::Event(FilterEvent::ClearTags),
        "clear" => BrowseInput::Event(FilterEvent::ClearAll),
        "tags" | "tag" => BrowseInput::Tags,
        "" | "list" | "ls" => BrowseInput::Refresh,
        "help" | "?" => BrowseInput::Help,
        "quit" | "exit" | "q" => BrowseInput::Quit,
        other => BrowseInput::Unknown(other.to_string()),
    }
}

/// Runs until `quit` or end of input.
pub fn run_loop<S, R, W>(
    api: &mut ShowcaseApi<S>,
    mut input: R,
    out: &mut W,
    line_width: usize,
) -> Result<()>
where
    S: CatalogSource,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", render_chips(&api.current_tags()?.chips))?;
    writeln!(out)?;
    write_view(api, out, line_width)?;

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_input(&decode_line(&buf)) {
            BrowseInput::Event(event) => {
                api.apply(event)?;
                write_view(api, out, line_width)?;
            }
            BrowseInput::Tags => {
                write!(out, "{}", render_chips(&api.current_tags()?.chips))?;
            }
            BrowseInput::Refresh => write_view(api, out, line_width)?,
            BrowseInput::Help => write!(out, "{}", HELP)?,
            BrowseInput::Quit => break,
            BrowseInput::Unknown(cmd) => {
                writeln!(out, "Unknown input '{}'. Type `help` for commands.", cmd)?;
            }
        }
    }

    Ok(())
}

/// Strips the line ending. Invalid UTF-8 is replaced with U+FFFD so one bad line
/// cannot end the session.
fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(line) => line.to_string(),
        Cow::Owned(line) => {
            tracing::warn!(line = %line, "input line is not valid UTF-8");
            line
        }
    }
}

fn write_view<S: CatalogSource, W: Write>(
    api: &ShowcaseApi<S>,
    out: &mut W,
    line_width: usize,
) -> Result<()> {
    let result = api.current_view()?;
    write!(out, "{}", render_filter_state(api.session().state()))?;
    write!(out, "{}", render_projects(&result.projects, line_width))?;
    write!(out, "{}", render_messages(&result.messages))?;
    Ok(())
}
