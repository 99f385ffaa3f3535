use std::{str::FromStr, sync::Arc};

use axum::{
    Router,
    routing::{delete, get, post},
};
use mealgrid_mealplan::{PlanSink, PlannerState};
use mealgrid_shared::mealplan::{Day, MealType, SlotKey};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::error::AppError;

mod drag;
mod health;
mod picker;
mod save;
mod slots;
mod view;
mod week;

pub use view::*;

#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<Mutex<PlannerState>>,
    pub sink: Arc<dyn PlanSink>,
    pub timezone: String,
}

impl AppState {
    pub fn new(planner: PlannerState, sink: Arc<dyn PlanSink>, timezone: impl Into<String>) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            sink,
            timezone: timezone.into(),
        }
    }

    /// Loads the displayed week from the sink unless it was already touched
    /// during this session.
    async fn restore_saved(&self, planner: &mut PlannerState) -> Result<(), AppError> {
        let start = planner.window().start();
        if planner.is_known(start) {
            return Ok(());
        }

        if let Some(plan) = self.sink.load(start).await? {
            tracing::debug!(week = %plan.window, "saved week restored");
            planner.restore(plan);
        }

        Ok(())
    }
}

/// Parses the `{day}/{meal}` path segments of a cell.
fn slot(day: &str, meal: &str) -> Result<SlotKey, AppError> {
    let day = Day::from_str(&day.to_lowercase())
        .map_err(|_| AppError::BadRequest(format!("unknown day '{day}'")))?;
    let meal = MealType::from_str(&meal.to_lowercase())
        .map_err(|_| AppError::BadRequest(format!("unknown meal '{meal}'")))?;

    Ok(SlotKey::new(day, meal))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/planner", get(week::show))
        .route("/planner/week", post(week::go_to))
        .route("/planner/week/next", post(week::next))
        .route("/planner/week/prev", post(week::prev))
        .route("/planner/slots/{day}/{meal}", delete(slots::remove))
        .route("/planner/slots/{day}/{meal}/open", post(slots::open))
        .route("/planner/picker/search", post(picker::search))
        .route("/planner/picker/reset", post(picker::reset))
        .route("/planner/picker/select", post(picker::select))
        .route("/planner/picker/close", post(picker::close))
        .route("/planner/drag/{day}/{meal}", post(drag::begin))
        .route("/planner/drag/over/{day}/{meal}", post(drag::over))
        .route("/planner/drag/leave", post(drag::leave))
        .route("/planner/drag/end", post(drag::end))
        .route("/planner/drop/{day}/{meal}", post(drag::drop_on))
        .route("/planner/save", post(save::save))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
