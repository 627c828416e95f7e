use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "Browse a product catalog by owner and name", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory with users.json, categories.json and products.json
    #[arg(long, global = true, env = "SHELF_DATA", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, env = "SHELF_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Disable styled output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List products, optionally filtered by owner and name
    #[command(alias = "ls")]
    List {
        /// Only products whose category is owned by this user (exact name)
        #[arg(short, long)]
        owner: Option<String>,

        /// Only products whose name contains this text (any case)
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show the owner tabs
    Owners,

    /// Show the category tabs
    Categories,

    /// Filter interactively, one command per line
    #[command(alias = "b")]
    Browse,

    /// Write the sample catalog to a directory and use it from now on
    Init {
        /// Target directory (defaults to --data-dir, then <config dir>/catalog)
        dir: Option<PathBuf>,
    },
}
