//! # CLI Behavior
//!
//! This is **one possible UI client** for showcase, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Naked Execution (`showcase`)
//!
//! Running `showcase` with no arguments lists the whole catalog.
//!
//! ## One-shot Filtering
//!
//! - `showcase list -s wallet` — search term (used verbatim, spaces included)
//! - `showcase list -t Privacy -t DeFi` — projects carrying ALL given tags
//! - `showcase tags -t Privacy` — the vocabulary, with selected chips marked
//! - `--output json` on any of these prints the structured result instead
//!
//! ## Interactive Filtering (`showcase browse`)
//!
//! Reads one instruction per line and re-renders after each:
//!
//! | Input | Event |
//! |-------|-------|
//! | `/text` or `search text` | search term becomes `text` |
//! | `tag Name` | toggle tag chip `Name` |
//! | `clear-tags` | deselect all tags |
//! | `clear` | deselect all tags and empty the search |
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers
//! - `browse`: The interactive loop
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap

mod browse;
mod commands;
mod render;
pub mod setup;

pub use commands::run;
