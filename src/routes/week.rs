use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use super::{AppState, PlannerView};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct GoToQuery {
    pub date: String,
}

pub async fn show(State(state): State<AppState>) -> Json<PlannerView> {
    let planner = state.planner.lock().await;

    Json(PlannerView::from(&*planner))
}

#[tracing::instrument(skip(state))]
pub async fn next(State(state): State<AppState>) -> Result<Json<PlannerView>, AppError> {
    let mut planner = state.planner.lock().await;
    planner.next_week()?;
    state.restore_saved(&mut planner).await?;

    Ok(Json(PlannerView::from(&*planner)))
}

#[tracing::instrument(skip(state))]
pub async fn prev(State(state): State<AppState>) -> Result<Json<PlannerView>, AppError> {
    let mut planner = state.planner.lock().await;
    planner.prev_week()?;
    state.restore_saved(&mut planner).await?;

    Ok(Json(PlannerView::from(&*planner)))
}

#[tracing::instrument(skip(state))]
pub async fn go_to(
    State(state): State<AppState>,
    Query(query): Query<GoToQuery>,
) -> Result<Json<PlannerView>, AppError> {
    let date = mealgrid_mealplan::parse_date(&query.date)?;

    let mut planner = state.planner.lock().await;
    planner.go_to(date)?;
    state.restore_saved(&mut planner).await?;

    Ok(Json(PlannerView::from(&*planner)))
}
