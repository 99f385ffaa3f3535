use axum::{Json, extract::State};
use mealgrid_shared::recipe::RecipeId;
use serde::Deserialize;

use super::{AppState, PlannerView};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SearchInput {
    #[serde(default)]
    pub term: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectInput {
    pub recipe_id: RecipeId,
}

pub async fn search(
    State(state): State<AppState>,
    Json(input): Json<SearchInput>,
) -> Json<PlannerView> {
    let mut planner = state.planner.lock().await;
    planner.search(input.term);

    Json(PlannerView::from(&*planner))
}

pub async fn reset(State(state): State<AppState>) -> Json<PlannerView> {
    let mut planner = state.planner.lock().await;
    planner.reset_search();

    Json(PlannerView::from(&*planner))
}

#[tracing::instrument(skip(state))]
pub async fn select(
    State(state): State<AppState>,
    Json(input): Json<SelectInput>,
) -> Result<Json<PlannerView>, AppError> {
    let mut planner = state.planner.lock().await;
    planner.select_recipe(input.recipe_id)?;

    Ok(Json(PlannerView::from(&*planner)))
}

pub async fn close(State(state): State<AppState>) -> Json<PlannerView> {
    let mut planner = state.planner.lock().await;
    planner.close_picker();

    Json(PlannerView::from(&*planner))
}
