//! QA log model: discovery, parsing and dating of `QA_Log_<date>.md` files

pub(crate) mod date;
pub(crate) mod locator;
pub(crate) mod parser;
pub(crate) mod section;

pub(crate) use date::{Clock, SystemClock, embedded_date, extract_date};
pub(crate) use locator::{find_latest, find_logs};
pub(crate) use parser::parse;
pub(crate) use section::{ParsedLog, SectionName, SectionsView};
