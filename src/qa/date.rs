//! Report date extraction

use chrono::{NaiveDate, Utc};

use crate::consts::{DATE_FORMAT, LOG_PREFIX, LOG_SUFFIX};
use crate::utils::Timezone;

/// Source of "today" for logs whose name carries no date
pub(crate) trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, read in the configured timezone
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub(crate) fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.timezone.date_of(Utc::now())
    }
}

/// Clock pinned to one date
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Date label for a log: the `YYYY-MM-DD` in `QA_Log_YYYY-MM-DD.md`, else today
///
/// The embedded date is returned as written; `QA_Log_2024-13-45.md` yields
/// `2024-13-45`.
pub(crate) fn extract_date(file_name: &str, clock: &dyn Clock) -> String {
    match embedded_date(file_name) {
        Some(date) => date.to_string(),
        None => clock.today().format(DATE_FORMAT).to_string(),
    }
}

/// First `QA_Log_DDDD-DD-DD.md` occurrence anywhere in the name
pub(crate) fn embedded_date(file_name: &str) -> Option<&str> {
    file_name.match_indices(LOG_PREFIX).find_map(|(start, _)| {
        let rest = &file_name[start + LOG_PREFIX.len()..];
        let date = rest.get(..10)?;
        (is_date_shaped(date) && rest[10..].starts_with(LOG_SUFFIX)).then_some(date)
    })
}

/// `DDDD-DD-DD` with ASCII digits, no range checks
fn is_date_shaped(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}
