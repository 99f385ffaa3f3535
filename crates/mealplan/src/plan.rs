use std::collections::BTreeMap;

use mealgrid_shared::{
    mealplan::{Day, DietType, MealType},
    recipe::RecipeId,
};
use serde::Deserialize;
use time::Date;
use validator::Validate;

use crate::{Grid, WeekWindow};

/// Information asked for when a week is saved.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct PlanDetails {
    #[validate(length(min = 1, max = 120, message = "Plan title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,
    #[serde(default)]
    #[validate(required(message = "Diet type is required"))]
    pub diet_type: Option<DietType>,
}

/// A finished week handed to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlan {
    pub window: WeekWindow,
    pub details: PlanDetails,
    pub grid: Grid,
}

impl WeekPlan {
    /// Validates the details and refuses weeks that ended before the week
    /// holding `today`.
    pub fn check(&self, today: Date) -> mealgrid_shared::Result<()> {
        self.details.validate()?;

        let current = WeekWindow::containing(today)?;
        if self.window.start() < current.start() {
            mealgrid_shared::user!("Cannot save past weeks");
        }

        Ok(())
    }

    /// `day -> meal -> recipe id` mapping of the occupied cells.
    pub fn meal_ids(&self) -> BTreeMap<Day, BTreeMap<MealType, RecipeId>> {
        let mut meals: BTreeMap<Day, BTreeMap<MealType, RecipeId>> = BTreeMap::new();
        for (slot, recipe) in self.grid.assignments() {
            meals.entry(slot.day).or_default().insert(slot.meal, recipe.id);
        }

        meals
    }
}
