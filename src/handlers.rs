use crate::calendar::CalendarGrid;
use crate::daily::DailyRecord;
use crate::errors::AppError;
use crate::models::{
    Goal, MonthView, MoodRequest, RenameGoalRequest, SelectionRequest, StepRequest, Task,
    ToggleRequest, ToggleResponse, UpdateTaskRequest,
};
use crate::state::AppState;
use crate::stats::Statistics;
use crate::storage::persist_best_effort;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::collections::BTreeMap;

pub async fn get_month(State(state): State<AppState>) -> Json<MonthView> {
    let data = state.data.lock().await;
    Json(data.month_view())
}

pub async fn get_grid(State(state): State<AppState>) -> Json<CalendarGrid> {
    let data = state.data.lock().await;
    Json(data.grid())
}

pub async fn get_daily(State(state): State<AppState>) -> Json<Vec<DailyRecord>> {
    let data = state.data.lock().await;
    Json(data.daily_records())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<Statistics> {
    let data = state.data.lock().await;
    Json(data.statistics())
}

pub async fn select(
    State(state): State<AppState>,
    Json(payload): Json<SelectionRequest>,
) -> Result<Json<MonthView>, AppError> {
    let mut data = state.data.lock().await;
    match (payload.month, payload.year) {
        (Some(month), Some(year)) => data.select_period(month, year)?,
        (Some(month), None) => data.select_month(month)?,
        (None, Some(year)) => data.select_year(year)?,
        (None, None) => return Err(AppError::bad_request("month or year is required")),
    }

    persist_best_effort(&state.data_path, &data).await;
    Ok(Json(data.month_view()))
}

pub async fn step(
    State(state): State<AppState>,
    Json(payload): Json<StepRequest>,
) -> Result<Json<MonthView>, AppError> {
    let mut data = state.data.lock().await;
    data.step_month(payload.delta)?;

    persist_best_effort(&state.data_path, &data).await;
    Ok(Json(data.month_view()))
}

pub async fn add_goal(State(state): State<AppState>) -> (StatusCode, Json<Goal>) {
    let mut data = state.data.lock().await;
    let goal = data.add_goal().clone();

    persist_best_effort(&state.data_path, &data).await;
    (StatusCode::CREATED, Json(goal))
}

pub async fn rename_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
    Json(payload): Json<RenameGoalRequest>,
) -> Result<Json<Goal>, AppError> {
    let mut data = state.data.lock().await;
    let goal = data.rename_goal(&goal_id, &payload.name)?.clone();

    persist_best_effort(&state.data_path, &data).await;
    Ok(Json(goal))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
) -> Result<Json<Goal>, AppError> {
    let mut data = state.data.lock().await;
    let goal = data.delete_goal(&goal_id)?;

    persist_best_effort(&state.data_path, &data).await;
    Ok(Json(goal))
}

pub async fn add_task(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let mut data = state.data.lock().await;
    let task = data.add_task(&goal_id)?.clone();

    persist_best_effort(&state.data_path, &data).await;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path((goal_id, task_id)): Path<(String, String)>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    let mut data = state.data.lock().await;
    let task = data
        .update_task(&goal_id, &task_id, &payload.name, &payload.description)?
        .clone();

    persist_best_effort(&state.data_path, &data).await;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((goal_id, task_id)): Path<(String, String)>,
) -> Result<Json<Task>, AppError> {
    let mut data = state.data.lock().await;
    let task = data.delete_task(&goal_id, &task_id)?;

    persist_best_effort(&state.data_path, &data).await;
    Ok(Json(task))
}

pub async fn toggle(
    State(state): State<AppState>,
    Path((goal_id, task_id)): Path<(String, String)>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut data = state.data.lock().await;
    let completed =
        data.toggle_completion(&goal_id, &task_id, payload.week_index, payload.day_index)?;

    if completed.is_some() {
        persist_best_effort(&state.data_path, &data).await;
    }
    Ok(Json(ToggleResponse {
        goal_id,
        task_id,
        week_index: payload.week_index,
        day_index: payload.day_index,
        completed,
    }))
}

pub async fn set_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<BTreeMap<String, String>>, AppError> {
    let mut data = state.data.lock().await;
    data.set_mood(&payload.date, &payload.mood)?;

    persist_best_effort(&state.data_path, &data).await;
    Ok(Json(data.month_view().moods))
}
