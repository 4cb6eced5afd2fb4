//! Derived display values
//!
//! Pure functions of a result; both front-ends render from these so the TUI
//! and the CLI show the same text.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::models::{AnalyticsResult, ShortenResult};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Shown for a timestamp that is absent
pub const NEVER: &str = "Never";

/// Shown in the "Days Left" cell when a link never expires
pub const NO_EXPIRY: &str = "No expiry";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// "Never" for an absent value, else the instant in the local timezone
pub fn format_timestamp(value: Option<&DateTime<Utc>>) -> String {
    format_timestamp_in(value, &Local)
}

/// [`format_timestamp`] for an explicit timezone
pub fn format_timestamp_in<Tz>(value: Option<&DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match value {
        Some(dt) => dt.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
        None => NEVER.to_string(),
    }
}

/// Whole days until `expiry`, rounded up and never negative
///
/// `None` means the link does not expire.
pub fn days_remaining(expiry: Option<&DateTime<Utc>>, now: DateTime<Utc>) -> Option<i64> {
    let expiry = expiry?;
    let millis = (*expiry - now).num_milliseconds();
    if millis <= 0 {
        return Some(0);
    }
    Some((millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY)
}

/// Whether a link with `days` left deserves the danger highlight
pub fn is_expiring_soon(days: Option<i64>, threshold: i64) -> bool {
    matches!(days, Some(d) if d <= threshold)
}

/// "N days" or "No expiry"
pub fn format_days_left(days: Option<i64>) -> String {
    match days {
        Some(1) => "1 day".to_string(),
        Some(d) => format!("{} days", d),
        None => NO_EXPIRY.to_string(),
    }
}

/// Emphasis a row should get
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Code,
    Success,
    Danger,
}

/// One labelled value of a result panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label,
            value: value.into(),
            tone,
        }
    }
}

/// Metadata rows under a fresh short link
pub fn shorten_rows(result: &ShortenResult) -> Vec<DetailRow> {
    vec![
        DetailRow::new("Original URL", &result.original_url, Tone::Plain),
        DetailRow::new("Short Code", &result.short_code, Tone::Code),
        DetailRow::new(
            "Expires",
            format_timestamp(result.expires_at.as_ref()),
            Tone::Plain,
        ),
        DetailRow::new(
            "Created",
            format_timestamp(Some(&result.created_at)),
            Tone::Plain,
        ),
    ]
}

/// Stat rows of an analytics lookup (the click count is rendered apart)
pub fn analytics_rows(
    result: &AnalyticsResult,
    now: DateTime<Utc>,
    expiring_soon_days: i64,
) -> Vec<DetailRow> {
    let days = days_remaining(result.expires_at.as_ref(), now);
    let days_tone = if is_expiring_soon(days, expiring_soon_days) {
        Tone::Danger
    } else {
        Tone::Success
    };

    vec![
        DetailRow::new("Short URL", &result.short_url, Tone::Code),
        DetailRow::new("Original URL", &result.original_url, Tone::Plain),
        DetailRow::new(
            "Created At",
            format_timestamp(Some(&result.created_at)),
            Tone::Plain,
        ),
        DetailRow::new(
            "Last Clicked",
            format_timestamp(result.last_clicked.as_ref()),
            Tone::Plain,
        ),
        DetailRow::new(
            "Expires At",
            format_timestamp(result.expires_at.as_ref()),
            Tone::Plain,
        ),
        DetailRow::new("Days Left", format_days_left(days), days_tone),
    ]
}

/// Shorten `text` to at most `max` characters, marking the cut with "..."
///
/// Below three characters there is no room for text, only dots.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max < 3 {
        return ".".repeat(max);
    }
    let keep = max - 3;
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
