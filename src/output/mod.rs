mod json;
mod report;

pub(crate) use json::{output_logs_json, output_report_json};
pub(crate) use report::render;
