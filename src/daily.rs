use crate::calendar::CalendarGrid;
use crate::models::Goal;
use serde::{Deserialize, Serialize};

/// Completed vs. assigned task count for one day of the active month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub day: u32,
    pub completed: u32,
    pub total: u32,
}

impl DailyRecord {
    pub fn is_valid(&self) -> bool {
        self.total > 0
    }

    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.completed) / f64::from(self.total) * 100.0
        }
    }

    /// Completion rate rounded half-up to a whole percent.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let completed = u64::from(self.completed);
        let total = u64::from(self.total);
        ((200 * completed + total) / (2 * total)) as u32
    }

    pub fn not_completed(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }
}

/// One record per calendar day of `grid`, counting every task of every goal.
pub fn daily_records(goals: &[Goal], grid: &CalendarGrid) -> Vec<DailyRecord> {
    let task_count: u32 = goals.iter().map(|goal| goal.tasks.len() as u32).sum();

    (1..=grid.days_in_month())
        .map(|day| {
            let completed = match grid.locate(day) {
                Some((week, day_in_week)) => goals
                    .iter()
                    .flat_map(|goal| &goal.tasks)
                    .filter(|task| task.week_completions.is_set(week, day_in_week))
                    .count() as u32,
                None => 0,
            };
            DailyRecord {
                day,
                completed,
                total: task_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CompletionMatrix;
    use crate::models::Task;

    fn goal_with_tasks(grid: &CalendarGrid, count: usize) -> Goal {
        let mut goal = Goal::new();
        for index in 0..count {
            goal.tasks.push(Task::with_id(format!("t{index}"), "task", "", grid));
        }
        goal
    }

    #[test]
    fn no_goals_yields_empty_days() {
        let grid = CalendarGrid::build(1, 2023);
        let records = daily_records(&[], &grid);
        assert_eq!(records.len(), 28);
        assert!(records.iter().all(|r| r.total == 0 && r.completed == 0));
        assert_eq!(records[27].day, 28);
    }

    #[test]
    fn counts_completed_cells_across_goals() {
        let grid = CalendarGrid::build(0, 2024);
        let mut first = goal_with_tasks(&grid, 2);
        let mut second = goal_with_tasks(&grid, 1);

        let (week, day) = grid.locate(10).unwrap();
        first.tasks[0].week_completions.toggle(&grid, week, day);
        second.tasks[0].week_completions.toggle(&grid, week, day);
        let (week, day) = grid.locate(31).unwrap();
        first.tasks[1].week_completions.toggle(&grid, week, day);

        let records = daily_records(&[first, second], &grid);
        assert_eq!(records.len(), 31);
        assert_eq!(records[9], DailyRecord { day: 10, completed: 2, total: 3 });
        assert_eq!(records[30], DailyRecord { day: 31, completed: 1, total: 3 });
        assert!(records.iter().all(|r| r.completed <= r.total));
    }

    #[test]
    fn misshaped_matrix_reads_as_incomplete() {
        let grid = CalendarGrid::build(0, 2024);
        let mut goal = goal_with_tasks(&grid, 1);
        goal.tasks[0].week_completions = CompletionMatrix::from(vec![vec![true]]);

        let records = daily_records(&[goal], &grid);
        assert_eq!(records[0].completed, 1);
        assert!(records[1..].iter().all(|r| r.completed == 0 && r.total == 1));
    }

    #[test]
    fn percentage_rounds_half_up() {
        let third = DailyRecord { day: 1, completed: 1, total: 3 };
        assert_eq!(third.percentage(), 33);
        let two_thirds = DailyRecord { day: 1, completed: 2, total: 3 };
        assert_eq!(two_thirds.percentage(), 67);
        let eighth = DailyRecord { day: 1, completed: 1, total: 8 };
        assert_eq!(eighth.percentage(), 13);
        let empty = DailyRecord { day: 1, completed: 0, total: 0 };
        assert_eq!(empty.percentage(), 0);
        assert_eq!(empty.not_completed(), 0);
    }
}
