use axum::{
    Json,
    extract::{Path, State},
};

use super::{AppState, PlannerView, slot};
use crate::error::AppError;

/// Click on a cell. Occupied cells leave the picker closed.
pub async fn open(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
) -> Result<Json<PlannerView>, AppError> {
    let slot = slot(&day, &meal)?;

    let mut planner = state.planner.lock().await;
    planner.open_slot(slot);

    Ok(Json(PlannerView::from(&*planner)))
}

#[tracing::instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
) -> Result<Json<PlannerView>, AppError> {
    let slot = slot(&day, &meal)?;

    let mut planner = state.planner.lock().await;
    if let Some(recipe) = planner.remove(slot) {
        tracing::debug!(%slot, recipe_id = recipe.id, "assignment removed");
    }

    Ok(Json(PlannerView::from(&*planner)))
}
