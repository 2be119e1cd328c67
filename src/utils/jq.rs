use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{AppError, JqError};

/// Print JSON to stdout, piping it through `jq` first when a filter is given
pub(crate) fn print_json(json: &str, jq_filter: Option<&str>) -> Result<(), AppError> {
    match jq_filter {
        Some(filter) => {
            let filtered = filter_json(json, filter)?;
            print!("{filtered}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn filter_json(json: &str, filter: &str) -> Result<String, JqError> {
    let mut child = Command::new("jq")
        .arg(filter)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => JqError::NotFound,
            _ => JqError::Spawn(e),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(json.as_bytes()).map_err(JqError::Stdin)?;
    }

    let output = child.wait_with_output().map_err(JqError::Wait)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(JqError::Filter(stderr.trim().to_string()));
    }
    String::from_utf8(output.stdout).map_err(JqError::Utf8)
}
