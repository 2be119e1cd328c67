use serde::Serialize;
use std::path::Path;

use crate::output::report::ReportGroups;
use crate::qa::{ParsedLog, SectionsView};

#[derive(Serialize)]
struct ReportView<'a> {
    file: Option<String>,
    date: &'a str,
    sections: SectionsView<'a>,
    #[serde(flatten)]
    groups: ReportGroups,
}

#[derive(Serialize)]
struct LogEntry {
    file: String,
    date: Option<String>,
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// JSON form of a rendered report: the raw sections plus the derived groups
pub(crate) fn output_report_json(log: &ParsedLog, date: &str, file: Option<&Path>) -> String {
    let view = ReportView {
        file: file.map(display_path),
        date,
        sections: log.to_view(),
        groups: ReportGroups::from_log(log),
    };
    serde_json::to_string_pretty(&view).unwrap_or_else(|_| "{}".to_string())
}

/// JSON array of logs with the date embedded in each name (null if none)
pub(crate) fn output_logs_json<'a>(
    logs: impl IntoIterator<Item = (&'a Path, Option<&'a str>)>,
) -> String {
    let entries: Vec<LogEntry> = logs
        .into_iter()
        .map(|(path, date)| LogEntry {
            file: display_path(path),
            date: date.map(str::to_string),
        })
        .collect();
    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qa::parse;
    use serde_json::Value;

    #[test]
    fn report_json_has_sections_and_groups() {
        let log = parse("### 🐛 Bugs Found\n- Crash on save\n### 🛠 Fixes Verified\n- Login fixed\n");
        let json = output_report_json(&log, "2024-03-01", Some(Path::new("QA_Log_2024-03-01.md")));
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["file"], "QA_Log_2024-03-01.md");
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["sections"]["bugs_found"][0], "Crash on save");
        assert_eq!(
            value["sections"]["tasks_done"][0],
            "No data provided for ✅ Tasks Done"
        );
        assert_eq!(value["bugs"][0], "Crash on save");
        assert_eq!(value["progress_summary"][0], "Login fixed");
        assert_eq!(value["key_takeaways"].as_array().unwrap().len(), 3);
        assert_eq!(value["next_steps"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn report_json_file_is_null_without_path() {
        let json = output_report_json(&parse(""), "2026-10-16", None);
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value["file"].is_null());
    }

    #[test]
    fn logs_json_keeps_order() {
        let json = output_logs_json([
            (Path::new("QA_Log_2024-02-15.md"), Some("2024-02-15")),
            (Path::new("QA_Log_draft.md"), None),
        ]);
        let value: Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["file"], "QA_Log_2024-02-15.md");
        assert_eq!(arr[0]["date"], "2024-02-15");
        assert!(arr[1]["date"].is_null());
    }
}
