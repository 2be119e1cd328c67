//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Render the project update for the latest QA log (default)
    #[default]
    Report,
    /// Print the path of the latest QA log
    Latest,
    /// List all QA logs, newest first
    List,
}
