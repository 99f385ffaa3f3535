use std::collections::BTreeMap;

use mealgrid_mealplan::{PLACEHOLDER_IMAGE, WeekPlan, format_date, parse_date};
use mealgrid_shared::{
    mealplan::{Day, DietType, MealType},
    recipe::{Recipe, RecipeId},
};
use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDto {
    pub id: RecipeId,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub media_url: Option<String>,
}

impl From<RecipeDto> for Recipe {
    fn from(dto: RecipeDto) -> Self {
        Recipe {
            id: dto.id,
            title: dto.title,
            image_ref: dto
                .media_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            category: dto.category.unwrap_or_default(),
            prep_time_minutes: 0,
            cook_time_minutes: 0,
            description: dto.description.unwrap_or_default(),
        }
    }
}

/// Meal plan as listed by the backend. Dates may carry a time part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl MealDto {
    pub fn start(&self) -> mealgrid_shared::Result<Option<Date>> {
        self.start_date.as_deref().map(date_prefix).transpose()
    }

    pub fn end(&self) -> mealgrid_shared::Result<Option<Date>> {
        self.end_date.as_deref().map(date_prefix).transpose()
    }
}

fn date_prefix(value: &str) -> mealgrid_shared::Result<Date> {
    parse_date(value.get(..10).unwrap_or(value))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRequest {
    pub title: String,
    pub description: String,
    pub diet_type: Option<DietType>,
    pub start_date: String,
    pub end_date: String,
    pub meals: BTreeMap<Day, BTreeMap<MealType, RecipeId>>,
}

impl From<&WeekPlan> for MealRequest {
    fn from(plan: &WeekPlan) -> Self {
        MealRequest {
            title: plan.details.title.to_owned(),
            description: plan.details.description.to_owned(),
            diet_type: plan.details.diet_type,
            start_date: format_date(plan.window.start()),
            end_date: format_date(plan.window.end()),
            meals: plan.meal_ids(),
        }
    }
}
