//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the feed loader and the UI layer.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Wire format of feed dates (e.g., "2024-04-05")
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the default range, counted back from today
pub const DEFAULT_RANGE_DAYS: i64 = 7;

/// Shown in the detail view when an entry has no explanation
pub const NO_EXPLANATION: &str = "No explanation available.";

/// The full feed, in the feed's own order
pub type Dataset = Vec<Entry>;

/// Kind of media an entry points at
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// Represents a single day in the feed
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Calendar date, unique within the dataset
    pub date: NaiveDate,
    pub title: String,
    /// Long-form description (absent on a few days)
    pub explanation: Option<String>,
    pub media_type: MediaType,
    /// Image URL or video URL, depending on `media_type`
    pub url: String,
    /// Higher-resolution image, preferred in the detail view
    pub hdurl: Option<String>,
    /// Preview frame for videos
    pub thumbnail_url: Option<String>,
    /// Image credit
    pub copyright: Option<String>,
}

impl Entry {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// URL used for the gallery card
    ///
    /// Videos prefer their preview frame and fall back to `url`.
    pub fn gallery_image_url(&self) -> &str {
        match self.media_type {
            MediaType::Video => self.thumbnail_url.as_deref().unwrap_or(&self.url),
            MediaType::Image => &self.url,
        }
    }

    /// URL used for the full-size image in the detail view
    pub fn full_image_url(&self) -> &str {
        self.hdurl.as_deref().unwrap_or(&self.url)
    }

    pub fn explanation_text(&self) -> &str {
        self.explanation.as_deref().unwrap_or(NO_EXPLANATION)
    }

    /// Human-formatted date (e.g., "April 5, 2024")
    pub fn display_date(&self) -> String {
        format_long_date(self.date)
    }
}

/// Format a date with the long month name (e.g., "April 5, 2024")
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Inclusive calendar date range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedRange);
        }
        Ok(Self { start, end })
    }

    /// Parse the raw text of the two date inputs
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(ValidationError::MissingDate);
        }

        let parse = |value: &str| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map_err(|_| ValidationError::InvalidDate(value.to_string()))
        };

        Self::new(parse(start)?, parse(end)?)
    }

    /// The range from `days` days before `today` up to `today`
    ///
    /// A span that runs past the calendar falls back to
    /// `DEFAULT_RANGE_DAYS`.
    pub fn ending_on(today: NaiveDate, days: i64) -> Self {
        let start = Duration::try_days(days.max(0))
            .and_then(|span| today.checked_sub_signed(span))
            .unwrap_or_else(|| {
                tracing::warn!(
                    "⚠️  Range of {days} days is out of bounds, using {DEFAULT_RANGE_DAYS}"
                );
                today
                    .checked_sub_signed(Duration::days(DEFAULT_RANGE_DAYS))
                    .unwrap_or(today)
            });
        Self { start, end: today }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, DATE_FORMAT).unwrap()
    }

    pub fn image(day: &str) -> Entry {
        Entry {
            date: date(day),
            title: format!("Image of {day}"),
            explanation: Some("A picture of the sky.".to_string()),
            media_type: MediaType::Image,
            url: format!("https://apod.nasa.gov/apod/image/{day}.jpg"),
            hdurl: None,
            thumbnail_url: None,
            copyright: None,
        }
    }

    pub fn video(day: &str, url: &str) -> Entry {
        Entry {
            media_type: MediaType::Video,
            url: url.to_string(),
            ..image(day)
        }
    }

    /// Ten consecutive image entries, 2024-04-01 through 2024-04-10
    pub fn april_dataset() -> Dataset {
        (1..=10).map(|day| image(&format!("2024-04-{day:02}"))).collect()
    }
}
