use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::warn;

/// Week/weekday partition of a single month.
///
/// Weekdays are numbered Sunday-first (Sun = 0 .. Sat = 6). Buckets are aligned
/// to the first of the month: day `d` lands in week `(d + offset - 1) / 7`,
/// where `offset` is the weekday number of the 1st.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub weeks: Vec<Vec<u32>>,
    pub week_days: Vec<Vec<String>>,
}

impl CalendarGrid {
    /// Builds the grid for a 0-indexed `month` of `year`. Months outside 0..=11
    /// or years chrono cannot represent yield an empty grid.
    pub fn build(month: u32, year: i32) -> Self {
        let Some(first) = first_of_month(month, year) else {
            warn!("no calendar grid for month {month} of year {year}");
            return Self::empty();
        };

        let days = days_in_month(month, year);
        let offset = first.weekday().num_days_from_sunday();
        let total_weeks = (days + offset).div_ceil(7) as usize;

        let mut weeks = vec![Vec::with_capacity(7); total_weeks];
        let mut week_days = vec![Vec::with_capacity(7); total_weeks];
        for (date, day) in first.iter_days().zip(1..=days) {
            let week = ((day + offset - 1) / 7) as usize;
            weeks[week].push(day);
            week_days[week].push(date.format("%a").to_string());
        }

        Self { weeks, week_days }
    }

    pub fn empty() -> Self {
        Self {
            weeks: Vec::new(),
            week_days: Vec::new(),
        }
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn week_len(&self, week: usize) -> Option<usize> {
        self.weeks.get(week).map(Vec::len)
    }

    pub fn days_in_month(&self) -> u32 {
        self.weeks.iter().map(|week| week.len() as u32).sum()
    }

    pub fn locate(&self, day: u32) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(week_index, week)| {
            week.iter()
                .position(|candidate| *candidate == day)
                .map(|day_index| (week_index, day_index))
        })
    }
}

/// Gregorian month length: the last day chrono accepts for the month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    if month > 11 {
        return 0;
    }
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month + 1, *day).is_some())
        .unwrap_or(0)
}

fn first_of_month(month: u32, year: i32) -> Option<NaiveDate> {
    if month > 11 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)
}
