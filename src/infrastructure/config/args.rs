use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "poster-cache",
    version,
    about = "Search the movie catalog and warm the poster image cache",
    long_about = None
)]
pub struct CliArgs {
    /// Title to search for.
    pub query: String,

    /// Result page to fetch (1-based).
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Maximum number of images held in memory.
    #[arg(long)]
    pub capacity: Option<usize>,

    /// OMDb API key.
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Catalog API endpoint.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Load every poster a second time to show cache hits.
    #[arg(long)]
    pub repeat: bool,
}
