//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "qalog")]
#[command(about = "Condense the latest QA_Log_<date>.md into a project update", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Directory to search for QA_Log_*.md files (default: current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) dir: Option<PathBuf>,

    /// Report on this log instead of the latest one (report only)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub(crate) file: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Filter JSON output with jq expression (requires jq installed)
    #[arg(long, global = true, value_name = "FILTER")]
    pub(crate) jq: Option<String>,

    /// Timezone for "today" when the log name has no date (e.g., "UTC", "Asia/Tokyo")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them off
        if !self.json && config.json {
            self.json = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if self.dir.is_none() {
            self.dir = config.dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.unwrap_or_default()
    }

    pub(crate) fn search_dir(&self) -> &Path {
        self.dir.as_deref().unwrap_or(Path::new("."))
    }

    /// `--jq` implies JSON output
    pub(crate) fn wants_json(&self) -> bool {
        self.json || self.jq.is_some()
    }
}
