use crate::daily::DailyRecord;
use serde::{Deserialize, Serialize};

/// Second-half mean must differ from the first-half mean by more than this
/// many percentage points to count as a trend.
pub const TREND_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySeries {
    pub completed: Vec<u32>,
    pub not_completed: Vec<u32>,
    pub percentage_completed: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub series: DailySeries,
    pub average_completion: f64,
    pub best_day: Option<DailyRecord>,
    pub worst_day: Option<DailyRecord>,
    pub streak: u32,
    pub trend: Trend,
    pub total_tasks: u32,
    pub total_completed: u32,
}

pub fn build_stats(records: &[DailyRecord]) -> Statistics {
    let valid: Vec<DailyRecord> = records
        .iter()
        .copied()
        .filter(DailyRecord::is_valid)
        .collect();
    let rates: Vec<f64> = valid.iter().map(DailyRecord::rate).collect();

    Statistics {
        series: daily_series(records),
        average_completion: mean(&rates),
        best_day: first_extreme(&rates, |candidate, best| candidate > best).map(|i| valid[i]),
        worst_day: first_extreme(&rates, |candidate, worst| candidate < worst).map(|i| valid[i]),
        streak: streak(records),
        trend: trend(&rates),
        total_tasks: records.iter().map(|r| r.total).sum(),
        total_completed: records.iter().map(|r| r.completed).sum(),
    }
}

pub fn daily_series(records: &[DailyRecord]) -> DailySeries {
    let mut series = DailySeries {
        completed: Vec::with_capacity(records.len()),
        not_completed: Vec::with_capacity(records.len()),
        percentage_completed: Vec::with_capacity(records.len()),
    };
    for record in records {
        series.completed.push(record.completed);
        series.not_completed.push(record.not_completed());
        series.percentage_completed.push(record.percentage());
    }
    series
}

/// Fully completed days counted backwards from the last day of the month.
/// A day without tasks ends the run.
pub fn streak(records: &[DailyRecord]) -> u32 {
    records
        .iter()
        .rev()
        .take_while(|r| r.is_valid() && r.completed == r.total)
        .count() as u32
}

/// Compares the mean rate of the later half of `rates` with the earlier half.
/// On odd counts the earlier half is the shorter one.
pub fn trend(rates: &[f64]) -> Trend {
    if rates.is_empty() {
        return Trend::Stable;
    }
    let (first, second) = rates.split_at(rates.len() / 2);
    let (first, second) = (mean(first), mean(second));

    if second > first + TREND_THRESHOLD {
        Trend::Improving
    } else if second < first - TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn first_extreme(values: &[f64], beats: impl Fn(f64, f64) -> bool) -> Option<usize> {
    let mut found: Option<usize> = None;
    for (index, value) in values.iter().enumerate() {
        match found {
            Some(current) if !beats(*value, values[current]) => {}
            _ => found = Some(index),
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, completed: u32, total: u32) -> DailyRecord {
        DailyRecord { day, completed, total }
    }

    #[test]
    fn empty_month_uses_defaults() {
        let records: Vec<DailyRecord> = (1..=30).map(|day| record(day, 0, 0)).collect();
        let stats = build_stats(&records);
        assert_eq!(stats.average_completion, 0.0);
        assert_eq!(stats.best_day, None);
        assert_eq!(stats.worst_day, None);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.trend, Trend::Stable);
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.series.percentage_completed, vec![0; 30]);
    }

    #[test]
    fn fully_completed_month() {
        let records: Vec<DailyRecord> = (1..=31).map(|day| record(day, 1, 1)).collect();
        let stats = build_stats(&records);
        assert_eq!(stats.streak, 31);
        assert_eq!(stats.average_completion, 100.0);
        assert_eq!(stats.trend, Trend::Stable);
        assert_eq!(stats.best_day.map(|d| d.day), Some(1));
        assert_eq!(stats.total_tasks, 31);
        assert_eq!(stats.total_completed, 31);
    }

    #[test]
    fn only_first_day_completed() {
        let records: Vec<DailyRecord> = (1..=28)
            .map(|day| record(day, u32::from(day == 1), 1))
            .collect();
        let stats = build_stats(&records);
        assert!((stats.average_completion - 100.0 / 28.0).abs() < 1e-9);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.best_day.map(|d| d.day), Some(1));
        assert_eq!(stats.worst_day.map(|d| d.day), Some(2));
        assert_eq!(stats.trend, Trend::Declining);
        assert_eq!(stats.series.completed[0], 1);
        assert_eq!(stats.series.not_completed[1], 1);
        assert_eq!(stats.series.percentage_completed[0], 100);
    }

    #[test]
    fn zero_task_day_breaks_streak() {
        let records = vec![
            record(1, 2, 2),
            record(2, 0, 0),
            record(3, 2, 2),
            record(4, 2, 2),
        ];
        assert_eq!(streak(&records), 2);

        let trailing_gap = vec![record(1, 2, 2), record(2, 2, 2), record(3, 0, 0)];
        assert_eq!(streak(&trailing_gap), 0);

        let last_incomplete = vec![record(1, 2, 2), record(2, 1, 2)];
        assert_eq!(streak(&last_incomplete), 0);
    }

    #[test]
    fn trend_needs_more_than_five_points() {
        let improving = [40.0, 40.0, 40.0, 40.0, 40.0, 80.0, 80.0, 80.0, 80.0, 80.0];
        assert_eq!(trend(&improving), Trend::Improving);
        assert_eq!(trend(&[80.0, 80.0, 40.0, 40.0]), Trend::Declining);
        assert_eq!(trend(&[50.0, 55.0]), Trend::Stable);
        assert_eq!(trend(&[50.0, 55.5]), Trend::Improving);
    }

    #[test]
    fn odd_count_gives_first_half_the_smaller_share() {
        // first half [0], second half [100, 0] -> 0 vs 50
        assert_eq!(trend(&[0.0, 100.0, 0.0]), Trend::Improving);
    }

    #[test]
    fn ties_resolve_to_earliest_day() {
        let records = vec![
            record(1, 1, 2),
            record(2, 2, 2),
            record(3, 0, 2),
            record(4, 2, 2),
            record(5, 0, 2),
        ];
        let stats = build_stats(&records);
        assert_eq!(stats.best_day.map(|d| d.day), Some(2));
        assert_eq!(stats.worst_day.map(|d| d.day), Some(3));
    }

    #[test]
    fn zero_task_days_are_excluded_from_average() {
        let records = vec![record(1, 1, 1), record(2, 0, 0), record(3, 0, 1)];
        let stats = build_stats(&records);
        assert_eq!(stats.average_completion, 50.0);
        assert_eq!(stats.total_tasks, 2);
        assert_eq!(stats.total_completed, 1);
    }
}
