use crate::calendar::CalendarGrid;
use crate::matrix::CompletionMatrix;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub week_completions: CompletionMatrix,
}

impl Task {
    pub fn new(grid: &CalendarGrid) -> Self {
        Self::with_id(new_id(), "New Task", "Task description", grid)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        grid: &CalendarGrid,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            week_completions: CompletionMatrix::shaped_for(grid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Goal {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            name: "New Goal".to_string(),
            tasks: Vec::new(),
        }
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the tracker persists: goals, the mood log and the selected period.
/// `selected_month` is 0-indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub moods: BTreeMap<String, String>,
    #[serde(default = "current_month")]
    pub selected_month: u32,
    #[serde(default = "current_year")]
    pub selected_year: i32,
}

impl Default for AppData {
    fn default() -> Self {
        Self::seeded(current_month(), current_year())
    }
}

pub fn current_month() -> u32 {
    Local::now().date_naive().month0()
}

pub fn current_year() -> i32 {
    Local::now().date_naive().year()
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct StepRequest {
    pub delta: i32,
}

#[derive(Debug, Deserialize)]
pub struct RenameGoalRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub week_index: usize,
    pub day_index: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub goal_id: String,
    pub task_id: String,
    pub week_index: usize,
    pub day_index: usize,
    /// `None` when the cell was outside the active grid and nothing changed.
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub date: String,
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct MonthView {
    pub month: u32,
    pub year: i32,
    pub grid: CalendarGrid,
    pub goals: Vec<Goal>,
    pub moods: BTreeMap<String, String>,
}
