use std::sync::Arc;

use anyhow::Result;
use mealgrid_backend::Backend;
use mealgrid_mealplan::{FixedCatalog, PlanSink, PlannerState, RecipeSource, SqlitePlanStore};
use sqlx::SqlitePool;
use time::Date;

use crate::{
    config::{CatalogKind, Config, SinkKind},
    routes::AppState,
};

pub fn backend(config: &Config) -> Result<Backend> {
    Ok(Backend::new(
        config.backend.url.to_owned(),
        config.backend.timeout(),
    )?)
}

/// Candidates offered by the picker, read once at startup.
pub fn recipe_source(config: &Config) -> Result<Arc<dyn RecipeSource>> {
    let source: Arc<dyn RecipeSource> = match config.planner.catalog {
        CatalogKind::Fixed => Arc::new(FixedCatalog::default()),
        CatalogKind::Backend => Arc::new(backend(config)?),
    };

    Ok(source)
}

pub fn plan_sink(config: &Config, pool: SqlitePool) -> Result<Arc<dyn PlanSink>> {
    let sink: Arc<dyn PlanSink> = match config.planner.sink {
        SinkKind::Sqlite => Arc::new(SqlitePlanStore(pool)),
        SinkKind::Backend => Arc::new(backend(config)?),
    };

    Ok(sink)
}

/// Planner opened on the week holding `reference`, with that week restored
/// from the sink when it was saved before.
pub async fn build_state(config: &Config, pool: SqlitePool, reference: Date) -> Result<AppState> {
    let candidates = recipe_source(config)?.candidates().await?;
    tracing::info!(
        catalog = ?config.planner.catalog,
        recipes = candidates.len(),
        "Recipe candidates loaded"
    );

    let mut planner = PlannerState::new(reference, candidates, config.planner.on_drop_conflict)?;
    let sink = plan_sink(config, pool)?;

    if let Some(plan) = sink.load(planner.window().start()).await? {
        planner.restore(plan);
    }

    Ok(AppState::new(planner, sink, config.planner.timezone.to_owned()))
}
