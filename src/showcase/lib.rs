//! # Showcase Architecture
//!
//! Showcase is a **UI-agnostic catalog filtering library**: a fixed list of projects,
//! each tagged with categories, narrowed down by a free-text search and by toggling
//! tag chips. The binary is one client of it; the same core could back a web page,
//! a TUI or an editor plugin.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, runs the browse loop   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the filter session       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, tags, show, config                                 │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter Engine (tags.rs, filter.rs, session.rs)             │
//! │  - Tag vocabulary, search + tag predicates, filter state    │
//! │  - Pure and total: no I/O, no error paths                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Sources (store/)                                   │
//! │  - CatalogSource trait                                      │
//! │  - Built-in fixture, JSON file, in-memory                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Filtering Semantics
//!
//! A project is visible when it passes both predicates:
//!
//! - **Search**: the lower-cased term is a substring of the name, the description or
//!   any tag. The empty term matches everything. The term is never trimmed.
//! - **Tags**: every selected tag equals (ignoring case) one of the project's tags.
//!   The empty selection matches everything.
//!
//! The visible set keeps catalog order. The tag vocabulary is the case-sensitive,
//! sorted union of all tags, computed once per catalog.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`session`]: Filter state and its four mutations
//! - [`filter`]: Search and tag predicates, visible-set derivation
//! - [`tags`]: Tag vocabulary and chips
//! - [`model`]: `Project` and `Catalog`
//! - [`store`]: Catalog sources
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering and the browse loop for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod session;
pub mod store;
pub mod tags;
