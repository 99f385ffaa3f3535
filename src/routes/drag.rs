use axum::{
    Json,
    extract::{Path, State},
};
use mealgrid_mealplan::DropOutcome;
use serde::Serialize;

use super::{AppState, PlannerView, slot};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct DropView {
    pub outcome: &'static str,
    pub discarded_recipe_id: Option<i64>,
    pub planner: PlannerView,
}

pub async fn begin(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
) -> Result<Json<PlannerView>, AppError> {
    let slot = slot(&day, &meal)?;

    let mut planner = state.planner.lock().await;
    planner.begin_drag(slot);

    Ok(Json(PlannerView::from(&*planner)))
}

pub async fn over(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
) -> Result<Json<PlannerView>, AppError> {
    let slot = slot(&day, &meal)?;

    let mut planner = state.planner.lock().await;
    planner.drag_over(slot);

    Ok(Json(PlannerView::from(&*planner)))
}

pub async fn leave(State(state): State<AppState>) -> Json<PlannerView> {
    let mut planner = state.planner.lock().await;
    planner.drag_leave();

    Json(PlannerView::from(&*planner))
}

#[tracing::instrument(skip(state))]
pub async fn drop_on(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
) -> Result<Json<DropView>, AppError> {
    let slot = slot(&day, &meal)?;

    let mut planner = state.planner.lock().await;
    let outcome = planner.drop_on(slot);

    let (outcome, discarded_recipe_id) = match outcome {
        DropOutcome::NoPayload => ("no_payload", None),
        DropOutcome::SameSlot => ("same_slot", None),
        DropOutcome::Moved { discarded } => ("moved", discarded.map(|r| r.id)),
        DropOutcome::Swapped => ("swapped", None),
        DropOutcome::Rejected => ("rejected", None),
    };

    Ok(Json(DropView {
        outcome,
        discarded_recipe_id,
        planner: PlannerView::from(&*planner),
    }))
}

pub async fn end(State(state): State<AppState>) -> Json<PlannerView> {
    let mut planner = state.planner.lock().await;
    planner.end_drag();

    Json(PlannerView::from(&*planner))
}
