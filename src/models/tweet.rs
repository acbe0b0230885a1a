use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_AUTHOR: &str = "John Doe";
pub const PLACEHOLDER_TEXT: &str = "...";

/// Per-tweet record stored as `<assets>/data/<id>.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    #[serde(default)]
    pub author: String,
    /// ISO-8601 date or timestamp.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub text: String,
}

impl Tweet {
    pub fn display_author(&self) -> &str {
        if self.author.trim().is_empty() {
            PLACEHOLDER_AUTHOR
        } else {
            &self.author
        }
    }

    pub fn display_date(&self) -> Option<String> {
        format_tweet_date(&self.date)
    }
}

/// Formats an ISO date as `Mar 5, 2021`. Returns `None` when the input is not a date.
pub fn format_tweet_date(iso: &str) -> Option<String> {
    let iso = iso.trim();
    if iso.is_empty() {
        return None;
    }

    let date = match DateTime::parse_from_rfc3339(iso) {
        Ok(ts) => ts.date_naive(),
        Err(_) => {
            let day = iso.get(..10).unwrap_or(iso);
            NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?
        }
    };
    Some(date.format("%b %-d, %Y").to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/models/tweet.rs"]
mod tests;
