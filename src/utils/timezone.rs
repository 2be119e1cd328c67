use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Timezone used to decide what "today" is when a log name carries no date
#[derive(Debug, Clone, Copy, Default)]
pub(crate) enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                local.with_timezone(&local.offset().fix())
            }
            Timezone::Named(tz) => {
                let zoned = utc.with_timezone(&tz);
                zoned.with_timezone(&zoned.offset().fix())
            }
        }
    }

    /// Calendar date of `utc` as seen in this timezone
    pub(crate) fn date_of(self, utc: DateTime<Utc>) -> NaiveDate {
        self.to_fixed_offset(utc).date_naive()
    }
}
