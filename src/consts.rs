/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// File name prefix shared by every QA log
pub(crate) const LOG_PREFIX: &str = "QA_Log_";

/// File name suffix shared by every QA log
pub(crate) const LOG_SUFFIX: &str = ".md";

/// Printed when the search directory has no QA log
pub(crate) const NO_LOG_MESSAGE: &str = "❌ No QA_Log_*.md file found in this directory.";
