use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use stories_core::DEFAULT_ENDPOINT;
use stories_engine::{FetchSettings, SessionConfig};

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to the log file only.
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both file and terminal.
    Both,
    /// Disable logging.
    Off,
}

/// Search Hacker News stories from the terminal.
///
/// Every option can also be set through its `STORIES_*` environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "hacker-stories", version)]
pub struct Settings {
    /// Search API endpoint; the query is appended as `?query=<term>`.
    #[arg(long, env = "STORIES_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// File remembering the last submitted search term.
    #[arg(long, env = "STORIES_STORE", default_value = ".hacker_stories.ron")]
    pub store: PathBuf,

    /// Key of the search term inside the store.
    #[arg(long, env = "STORIES_STORAGE_KEY", default_value = "search")]
    pub storage_key: String,

    /// Term used when nothing has been remembered yet.
    #[arg(long, env = "STORIES_DEFAULT_TERM", default_value = "React")]
    pub default_term: String,

    #[arg(long, env = "STORIES_LOG", value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// One of off, error, warn, info, debug, trace.
    #[arg(long, env = "STORIES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "STORIES_LOG_FILE", default_value = "./stories.log")]
    pub log_file: PathBuf,

    /// Whole-request timeout in seconds.
    #[arg(long, env = "STORIES_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, env = "STORIES_CONNECT_TIMEOUT_SECS", default_value_t = 10)]
    pub connect_timeout_secs: u64,
}

impl Settings {
    pub fn level(&self) -> LevelFilter {
        stories_logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            endpoint: self.endpoint.clone(),
            storage_key: self.storage_key.clone(),
            default_term: self.default_term.clone(),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..FetchSettings::default()
        }
    }
}
