use std::fs;
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::consts::NO_LOG_MESSAGE;
use crate::error::AppError;
use crate::output::{output_logs_json, output_report_json, render};
use crate::qa::{Clock, SystemClock, embedded_date, extract_date, find_latest, find_logs, parse};
use crate::utils::{Timezone, debug_log, print_json};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) dir: &'a Path,
    pub(crate) clock: &'a dyn Clock,
    pub(crate) jq_filter: Option<&'a str>,
}

/// Resolve the timezone and dispatch the selected command
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let clock = SystemClock::new(timezone);
    let ctx = CommandContext {
        cli,
        dir: cli.search_dir(),
        clock: &clock,
        jq_filter: cli.jq.as_deref(),
    };

    match cli.command() {
        Commands::Report => handle_report(&ctx),
        Commands::Latest => handle_latest(&ctx),
        Commands::List => handle_list(&ctx),
    }
}

fn handle_report(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let (path, text) = match &ctx.cli.file {
        Some(path) => {
            let bytes = fs::read(path).map_err(|source| AppError::ReadLog {
                path: path.clone(),
                source,
            })?;
            (path.clone(), String::from_utf8_lossy(&bytes).into_owned())
        }
        None => {
            let Some(path) = find_latest(ctx.dir)? else {
                // JSON consumers get an empty stdout rather than prose
                if ctx.cli.wants_json() {
                    eprintln!("{NO_LOG_MESSAGE}");
                } else {
                    println!("{NO_LOG_MESSAGE}");
                }
                return Ok(());
            };
            let text = read_log_lossy(&path);
            (path, text)
        }
    };
    debug_log(&format!("Using {}", path.display()));

    let log = parse(&text);
    let date = extract_date(&file_name(&path), ctx.clock);

    if ctx.cli.wants_json() {
        let json = output_report_json(&log, &date, Some(&path));
        print_json(&json, ctx.jq_filter)
    } else {
        println!("{}", render(&log, &date));
        Ok(())
    }
}

fn handle_latest(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let latest = find_latest(ctx.dir)?;
    if ctx.cli.wants_json() {
        // An empty array when there is no log
        let name = latest.as_deref().map(file_name);
        let json = output_logs_json(
            latest
                .as_deref()
                .zip(name.as_deref())
                .map(|(path, name)| (path, embedded_date(name))),
        );
        return print_json(&json, ctx.jq_filter);
    }
    match latest {
        Some(path) => println!("{}", path.display()),
        None => println!("{NO_LOG_MESSAGE}"),
    }
    Ok(())
}

fn handle_list(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let logs = find_logs(ctx.dir)?;
    if logs.is_empty() && !ctx.cli.wants_json() {
        println!("{NO_LOG_MESSAGE}");
        return Ok(());
    }
    if ctx.cli.wants_json() {
        let names: Vec<String> = logs.iter().map(|path| file_name(path)).collect();
        let json = output_logs_json(
            logs.iter()
                .zip(&names)
                .map(|(path, name)| (path.as_path(), embedded_date(name))),
        );
        print_json(&json, ctx.jq_filter)
    } else {
        for path in &logs {
            println!("{}", path.display());
        }
        Ok(())
    }
}

/// Read a discovered log; an unreadable file is treated as empty
fn read_log_lossy(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            eprintln!("Warning: Failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
