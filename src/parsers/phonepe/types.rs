use std::sync::LazyLock;

use crate::errors::StatementParseError;
use chrono::NaiveDate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "Jan 02, 2026": three-letter month, one or two digit day, comma, four digit year.
///
/// Anchors both segmentation and per-chunk date extraction. The `regex` crate
/// guarantees linear-time matching, so scanning a multi-page statement with it
/// cannot blow up.
pub(crate) static DATE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+([0-9]{1,2}),\s*([0-9]{4})")
        .expect("valid date header regex")
});

/// Date header text as printed in a PhonePe statement, e.g. `"Jan 02, 2026"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonePeDate(String);

impl PhonePeDate {
    /// First date header in `text`, if any.
    pub fn find(text: &str) -> Option<Self> {
        DATE_HEADER.find(text).map(|m| Self(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_captures(caps: &Captures<'_>) -> Result<NaiveDate, StatementParseError> {
        let month = MONTHS
            .iter()
            .position(|m| *m == &caps[1])
            .ok_or(StatementParseError::DateInvalidFormat)? as u32
            + 1;
        let day = caps[2].parse().map_err(|_| StatementParseError::DateInvalidFormat)?;
        let year = caps[3].parse().map_err(|_| StatementParseError::DateInvalidFormat)?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or(StatementParseError::DateInvalidFormat)
    }
}

impl From<String> for PhonePeDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PhonePeDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<PhonePeDate> for NaiveDate {
    type Error = StatementParseError;

    fn try_from(date: PhonePeDate) -> Result<Self, Self::Error> {
        let text = date.0.trim();
        let caps = DATE_HEADER
            .captures(text)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0 && m.end() == text.len()))
            .ok_or(StatementParseError::DateInvalidFormat)?;

        PhonePeDate::from_captures(&caps)
    }
}
