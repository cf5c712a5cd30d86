//! Goal/task store operations on [`AppData`].
//!
//! Every mutation leaves each task's completion matrix shaped like the grid of
//! the selected month. Derived views (`grid`, `daily_records`, `statistics`)
//! are recomputed from scratch on each call.

use crate::calendar::CalendarGrid;
use crate::daily::{daily_records, DailyRecord};
use crate::errors::TrackerError;
use crate::matrix::CompletionMatrix;
use crate::models::{AppData, Goal, MonthView, Task};
use crate::mood::{moods_in_month, parse_date_key};
use crate::stats::{build_stats, Statistics};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

impl AppData {
    /// Sample dataset used when nothing usable has been persisted.
    pub fn seeded(month: u32, year: i32) -> Self {
        let month = month.min(11);
        let grid = CalendarGrid::build(month, year);
        let goals = vec![
            Goal {
                id: "1".to_string(),
                name: "Read for 10 minutes".to_string(),
                tasks: vec![Task::with_id(
                    "1-1",
                    "Read before bed",
                    "Read at least 10 minutes before sleeping",
                    &grid,
                )],
            },
            Goal {
                id: "2".to_string(),
                name: "Exercise".to_string(),
                tasks: vec![Task::with_id(
                    "2-1",
                    "Morning workout",
                    "30 minutes of exercise",
                    &grid,
                )],
            },
        ];

        Self {
            goals,
            moods: BTreeMap::new(),
            selected_month: month,
            selected_year: year,
        }
    }

    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::build(self.selected_month, self.selected_year)
    }

    pub fn daily_records(&self) -> Vec<DailyRecord> {
        daily_records(&self.goals, &self.grid())
    }

    pub fn statistics(&self) -> Statistics {
        build_stats(&self.daily_records())
    }

    pub fn month_view(&self) -> MonthView {
        MonthView {
            month: self.selected_month,
            year: self.selected_year,
            grid: self.grid(),
            goals: self.goals.clone(),
            moods: moods_in_month(&self.moods, self.selected_month, self.selected_year),
        }
    }

    pub fn select_month(&mut self, month: u32) -> Result<(), TrackerError> {
        self.select_period(month, self.selected_year)
    }

    pub fn select_year(&mut self, year: i32) -> Result<(), TrackerError> {
        self.select_period(self.selected_month, year)
    }

    /// Switches to `(month, year)` and resets every completion matrix to the
    /// new grid. Completions never carry over between periods.
    pub fn select_period(&mut self, month: u32, year: i32) -> Result<(), TrackerError> {
        if month > 11 {
            return Err(TrackerError::InvalidMonth(month));
        }
        self.selected_month = month;
        self.selected_year = year;
        self.reset_completions();
        info!("selected period {year}-{:02}", month + 1);
        Ok(())
    }

    pub fn step_month(&mut self, delta: i32) -> Result<(), TrackerError> {
        let index = i64::from(self.selected_year) * 12
            + i64::from(self.selected_month)
            + i64::from(delta);
        let year = i32::try_from(index.div_euclid(12))
            .map_err(|_| TrackerError::InvalidMonth(self.selected_month))?;
        let month = index.rem_euclid(12) as u32;
        self.select_period(month, year)
    }

    fn reset_completions(&mut self) {
        let grid = self.grid();
        for task in self.goals.iter_mut().flat_map(|goal| goal.tasks.iter_mut()) {
            task.week_completions = CompletionMatrix::shaped_for(&grid);
        }
    }

    /// Reshapes persisted matrices to the selected grid, keeping in-bounds values.
    pub fn normalize_completions(&mut self) {
        let grid = self.grid();
        for goal in &mut self.goals {
            for task in &mut goal.tasks {
                if task.week_completions.normalize_to(&grid) {
                    warn!("reshaped completions of task {} in goal {}", task.id, goal.id);
                }
            }
        }
    }

    pub fn add_goal(&mut self) -> &Goal {
        let goal = Goal::new();
        debug!("added goal {}", goal.id);
        self.goals.push(goal);
        &self.goals[self.goals.len() - 1]
    }

    pub fn delete_goal(&mut self, goal_id: &str) -> Result<Goal, TrackerError> {
        let index = self
            .goals
            .iter()
            .position(|goal| goal.id == goal_id)
            .ok_or_else(|| TrackerError::GoalNotFound(goal_id.to_string()))?;
        debug!("deleted goal {goal_id}");
        Ok(self.goals.remove(index))
    }

    pub fn rename_goal(&mut self, goal_id: &str, name: &str) -> Result<&Goal, TrackerError> {
        let goal = self.goal_mut(goal_id)?;
        goal.name = name.to_string();
        Ok(goal)
    }

    pub fn add_task(&mut self, goal_id: &str) -> Result<&Task, TrackerError> {
        let grid = self.grid();
        let goal = self.goal_mut(goal_id)?;
        let task = Task::new(&grid);
        debug!("added task {} to goal {goal_id}", task.id);
        goal.tasks.push(task);
        Ok(&goal.tasks[goal.tasks.len() - 1])
    }

    pub fn delete_task(&mut self, goal_id: &str, task_id: &str) -> Result<Task, TrackerError> {
        let goal = self.goal_mut(goal_id)?;
        let index = goal
            .tasks
            .iter()
            .position(|task| task.id == task_id)
            .ok_or_else(|| task_not_found(goal_id, task_id))?;
        debug!("deleted task {task_id} from goal {goal_id}");
        Ok(goal.tasks.remove(index))
    }

    pub fn update_task(
        &mut self,
        goal_id: &str,
        task_id: &str,
        name: &str,
        description: &str,
    ) -> Result<&Task, TrackerError> {
        let task = self.task_mut(goal_id, task_id)?;
        task.name = name.to_string();
        task.description = description.to_string();
        Ok(task)
    }

    /// Flips one completion cell. Returns the new value, or `None` when the
    /// cell lies outside the selected grid and nothing was changed.
    pub fn toggle_completion(
        &mut self,
        goal_id: &str,
        task_id: &str,
        week_index: usize,
        day_index: usize,
    ) -> Result<Option<bool>, TrackerError> {
        let grid = self.grid();
        let task = self.task_mut(goal_id, task_id)?;
        let toggled = task.week_completions.toggle(&grid, week_index, day_index);
        match toggled {
            Some(value) => debug!("task {task_id} cell ({week_index}, {day_index}) -> {value}"),
            None => warn!(
                "ignored toggle of task {task_id} outside grid at ({week_index}, {day_index})"
            ),
        }
        Ok(toggled)
    }

    pub fn set_mood(&mut self, date_key: &str, token: &str) -> Result<(), TrackerError> {
        let date = parse_date_key(date_key)?;
        let token = token.trim();
        if token.is_empty() {
            return Err(TrackerError::EmptyMoodToken);
        }
        self.moods.insert(date.format("%Y-%m-%d").to_string(), token.to_string());
        Ok(())
    }

    fn goal_mut(&mut self, goal_id: &str) -> Result<&mut Goal, TrackerError> {
        self.goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or_else(|| TrackerError::GoalNotFound(goal_id.to_string()))
    }

    fn task_mut(&mut self, goal_id: &str, task_id: &str) -> Result<&mut Task, TrackerError> {
        self.goal_mut(goal_id)?
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| task_not_found(goal_id, task_id))
    }
}

fn task_not_found(goal_id: &str, task_id: &str) -> TrackerError {
    TrackerError::TaskNotFound {
        goal_id: goal_id.to_string(),
        task_id: task_id.to_string(),
    }
}
