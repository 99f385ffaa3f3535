use mealgrid_mealplan::{DropConflict, PickerResults, PlannerState, format_date};
use mealgrid_shared::{
    mealplan::{Day, MealType, SlotKey},
    recipe::{Recipe, RecipeId},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecipeView {
    pub id: RecipeId,
    pub title: String,
    pub image_ref: String,
    pub category: String,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub total_time_minutes: u32,
    pub description: String,
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.to_owned(),
            image_ref: recipe.image_ref.to_owned(),
            category: recipe.category.to_owned(),
            prep_time_minutes: recipe.prep_time_minutes,
            cook_time_minutes: recipe.cook_time_minutes,
            total_time_minutes: recipe.total_time_minutes(),
            description: recipe.description.to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WeekView {
    pub start: String,
    pub end: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct CellView {
    pub meal: MealType,
    /// Placeholder text of an empty cell, e.g. `Add Dinner`.
    pub empty_label: String,
    pub recipe: Option<RecipeView>,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub day: Day,
    pub short: &'static str,
    pub date: String,
    pub day_of_month: u8,
    pub meals: Vec<CellView>,
}

#[derive(Debug, Serialize)]
pub struct PickerView {
    pub open: bool,
    pub target: Option<SlotKey>,
    pub term: String,
    pub results: Vec<RecipeView>,
    pub no_results: bool,
}

#[derive(Debug, Serialize)]
pub struct DragView {
    pub source: SlotKey,
    pub recipe_id: RecipeId,
}

/// Everything needed to draw the planner screen.
#[derive(Debug, Serialize)]
pub struct PlannerView {
    pub week: WeekView,
    pub days: Vec<DayView>,
    pub picker: PickerView,
    pub drag: Option<DragView>,
    pub hover: Option<SlotKey>,
    pub on_drop_conflict: DropConflict,
}

impl From<&PlannerState> for PlannerView {
    fn from(planner: &PlannerState) -> Self {
        let window = planner.window();
        let grid = planner.grid();

        let days = window
            .days()
            .map(|(day, date)| DayView {
                day,
                short: day.short(),
                date: format_date(date),
                day_of_month: window.day_of_month(day),
                meals: MealType::ALL
                    .into_iter()
                    .map(|meal| CellView {
                        meal,
                        empty_label: format!("Add {}", meal.label()),
                        recipe: grid.get(SlotKey::new(day, meal)).map(RecipeView::from),
                    })
                    .collect(),
            })
            .collect();

        let picker = planner.picker();
        let (results, no_results) = match picker.results(planner.candidates()) {
            PickerResults::Found(found) => (found.into_iter().map(RecipeView::from).collect(), false),
            PickerResults::NoResults => (vec![], true),
        };

        Self {
            week: WeekView {
                start: format_date(window.start()),
                end: format_date(window.end()),
                label: window.label(),
            },
            days,
            picker: PickerView {
                open: picker.is_open(),
                target: picker.target(),
                term: picker.term().to_owned(),
                results,
                no_results,
            },
            drag: planner.drag().map(|payload| DragView {
                source: payload.source,
                recipe_id: payload.recipe.id,
            }),
            hover: planner.hover(),
            on_drop_conflict: planner.on_drop_conflict(),
        }
    }
}
