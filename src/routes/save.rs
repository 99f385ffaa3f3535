use axum::{Json, extract::State, http::StatusCode};
use mealgrid_mealplan::{PlanDetails, format_date, today};
use serde::Serialize;

use super::AppState;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct SavedView {
    pub start: String,
    pub end: String,
    pub title: String,
    pub slots: usize,
}

#[tracing::instrument(skip(state, details), fields(title = %details.title))]
pub async fn save(
    State(state): State<AppState>,
    Json(details): Json<PlanDetails>,
) -> Result<(StatusCode, Json<SavedView>), AppError> {
    let plan = {
        let planner = state.planner.lock().await;
        planner.to_plan(details)
    };

    plan.check(today(&state.timezone))?;
    state.sink.save(&plan).await?;

    Ok((
        StatusCode::CREATED,
        Json(SavedView {
            start: format_date(plan.window.start()),
            end: format_date(plan.window.end()),
            title: plan.details.title.to_owned(),
            slots: plan.grid.len(),
        }),
    ))
}
