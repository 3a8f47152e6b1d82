use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Release builds print "v0.3.2"; dev builds add the commit hash and date.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "showcase",
    bin_name = "showcase",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Browse a directory of projects by search term and tags", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use instead of the configured or built-in one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Text,
        help_heading = "Options"
    )]
    pub output: OutputMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects matching a search term and tags
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Search term, matched against name, description and tags
        #[arg(short, long, allow_hyphen_values = true)]
        search: Option<String>,

        /// Only projects carrying this tag (repeatable, all must match)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Show the tag vocabulary
    #[command(display_order = 2)]
    Tags {
        /// Mark this tag as selected (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Show one project
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Project id
        id: u64,
    },

    /// Filter interactively: type a search term, toggle tags
    #[command(alias = "b", display_order = 4)]
    Browse,

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (catalog, line-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
