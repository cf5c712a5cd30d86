use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/month", get(handlers::get_month))
        .route("/api/grid", get(handlers::get_grid))
        .route("/api/daily", get(handlers::get_daily))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/selection", post(handlers::select))
        .route("/api/selection/step", post(handlers::step))
        .route("/api/goals", post(handlers::add_goal))
        .route(
            "/api/goals/:goal_id",
            put(handlers::rename_goal).delete(handlers::delete_goal),
        )
        .route("/api/goals/:goal_id/tasks", post(handlers::add_task))
        .route(
            "/api/goals/:goal_id/tasks/:task_id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .route("/api/goals/:goal_id/tasks/:task_id/toggle", post(handlers::toggle))
        .route("/api/moods", post(handlers::set_mood))
        .with_state(state)
}
