//! QA log discovery
//!
//! Logs are found by name only. "Latest" means the greatest file name in
//! plain string order, which matches date order as long as the date is a
//! zero-padded `YYYY-MM-DD` right after the prefix.

use std::path::{Path, PathBuf};

use crate::consts::{LOG_PREFIX, LOG_SUFFIX};
use crate::error::AppError;
use crate::utils::debug_log;

/// All QA logs in `dir`, newest (greatest file name) first
pub(crate) fn find_logs(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let pattern = format!(
        "{}/{LOG_PREFIX}*{LOG_SUFFIX}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    debug_log(&format!("Searching {pattern}"));

    let mut logs: Vec<(String, PathBuf)> = glob::glob(&pattern)?
        .flatten()
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = log_file_name(&path)?.to_string();
            Some((name, path))
        })
        .collect();

    logs.sort_by(|(a, _), (b, _)| b.cmp(a));
    debug_log(&format!("Found {} QA log(s)", logs.len()));
    Ok(logs.into_iter().map(|(_, path)| path).collect())
}

/// The newest QA log in `dir`, or `None` if there is none
pub(crate) fn find_latest(dir: &Path) -> Result<Option<PathBuf>, AppError> {
    Ok(find_logs(dir)?.into_iter().next())
}

/// File name of `path` if it follows the `QA_Log_*.md` convention
fn log_file_name(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let matches = name.len() >= LOG_PREFIX.len() + LOG_SUFFIX.len()
        && name.starts_with(LOG_PREFIX)
        && name.ends_with(LOG_SUFFIX);
    matches.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "### ✅ Tasks Done\n- x\n").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn latest_is_greatest_date() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "QA_Log_2024-01-01.md");
        touch(dir.path(), "QA_Log_2024-02-15.md");

        let latest = find_latest(dir.path()).unwrap().unwrap();
        assert_eq!(latest, dir.path().join("QA_Log_2024-02-15.md"));
    }

    #[test]
    fn empty_dir_has_no_latest() {
        let dir = TempDir::new().unwrap();
        assert!(find_latest(dir.path()).unwrap().is_none());
    }

    #[test]
    fn missing_dir_has_no_latest() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(find_latest(&missing).unwrap().is_none());
    }

    #[test]
    fn ignores_other_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "QA_Log_2099-01-01.txt");
        touch(dir.path(), "qa_log_2099-01-01.md");
        touch(dir.path(), "QA_Log_2023-05-05.md");
        fs::create_dir(dir.path().join("QA_Log_2100-01-01.md")).unwrap();

        let logs = find_logs(dir.path()).unwrap();
        assert_eq!(names(&logs), ["QA_Log_2023-05-05.md"]);
    }

    #[test]
    fn order_is_lexicographic_not_date_aware() {
        let dir = TempDir::new().unwrap();
        for name in [
            "QA_Log_2024-03-01.md",
            "QA_Log_2024-03-01_b.md",
            "QA_Log_2024-03-01_a.md",
            "QA_Log_2024-3-9.md",
            "QA_Log_draft.md",
        ] {
            touch(dir.path(), name);
        }

        let logs = find_logs(dir.path()).unwrap();
        assert_eq!(
            names(&logs),
            [
                "QA_Log_draft.md",
                "QA_Log_2024-3-9.md",
                "QA_Log_2024-03-01_b.md",
                "QA_Log_2024-03-01_a.md",
                "QA_Log_2024-03-01.md",
            ]
        );
    }

    #[test]
    fn dir_with_glob_chars_is_escaped() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("logs [march]");
        fs::create_dir(&dir).unwrap();
        touch(&dir, "QA_Log_2024-03-01.md");

        let latest = find_latest(&dir).unwrap().unwrap();
        assert_eq!(latest, dir.join("QA_Log_2024-03-01.md"));
    }
}
