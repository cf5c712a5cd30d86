use crate::calendar::days_in_month;
use crate::errors::TrackerError;
use chrono::NaiveDate;
use std::collections::BTreeMap;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn mood_key(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{:02}-{day:02}", month + 1)
}

/// Accepts only canonical, zero-padded keys naming a real calendar date.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, TrackerError> {
    let key = key.trim();
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_KEY_FORMAT).to_string() == key)
        .ok_or_else(|| TrackerError::InvalidDateKey(key.to_string()))
}

/// Entries of `moods` that fall inside the given month, in date order.
pub fn moods_in_month(
    moods: &BTreeMap<String, String>,
    month: u32,
    year: i32,
) -> BTreeMap<String, String> {
    let days = days_in_month(month, year);
    if days == 0 {
        return BTreeMap::new();
    }
    moods
        .range(mood_key(year, month, 1)..=mood_key(year, month, days))
        .map(|(key, token)| (key.clone(), token.clone()))
        .collect()
}
