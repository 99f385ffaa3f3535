use async_trait::async_trait;
use mealgrid_shared::recipe::Recipe;
use time::Date;

use crate::WeekPlan;

/// Supplies the candidates offered by the recipe picker.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn candidates(&self) -> mealgrid_shared::Result<Vec<Recipe>>;
}

/// Persists finished weeks.
#[async_trait]
pub trait PlanSink: Send + Sync {
    async fn save(&self, plan: &WeekPlan) -> mealgrid_shared::Result<()>;

    /// Week previously saved with the given Monday, if the sink can read back.
    async fn load(&self, _start: Date) -> mealgrid_shared::Result<Option<WeekPlan>> {
        Ok(None)
    }
}
