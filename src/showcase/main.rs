//! # Showcase CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! installs logging, invokes `cli::run()` and handles process termination.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`, so stdout carries only results.
//!
//! - `SHOWCASE_LOG` sets the filter (default `showcase=warn`), e.g.
//!   `SHOWCASE_LOG=showcase=debug showcase browse`
//! - `SHOWCASE_LOG_FORMAT=json` switches to machine-readable lines
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/showcase/cli/)                              │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Interactive loop (browse.rs)                             │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (showcase::api and inward)                         │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cli;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    init_tracing();

    if let Err(e) = cli::run() {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SHOWCASE_LOG").unwrap_or_else(|_| "showcase=warn".into());
    let log_format = std::env::var("SHOWCASE_LOG_FORMAT").unwrap_or_default();

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
