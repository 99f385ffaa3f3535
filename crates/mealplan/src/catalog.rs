use async_trait::async_trait;
use mealgrid_shared::recipe::Recipe;

use crate::RecipeSource;

pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/200/200";

/// Built-in candidate list used when no backend is configured.
#[derive(Debug, Clone)]
pub struct FixedCatalog {
    recipes: Vec<Recipe>,
}

impl FixedCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }
}

fn recipe(
    id: i64,
    title: &str,
    category: &str,
    prep_time_minutes: u32,
    cook_time_minutes: u32,
    description: &str,
) -> Recipe {
    Recipe {
        id,
        title: title.to_owned(),
        image_ref: PLACEHOLDER_IMAGE.to_owned(),
        category: category.to_owned(),
        prep_time_minutes,
        cook_time_minutes,
        description: description.to_owned(),
    }
}

impl Default for FixedCatalog {
    fn default() -> Self {
        Self::new(vec![
            recipe(
                1,
                "Avocado Toast with Eggs",
                "Breakfast",
                10,
                5,
                "A nutritious breakfast with mashed avocado and perfectly poached eggs on toast.",
            ),
            recipe(
                2,
                "Greek Yogurt Parfait",
                "Breakfast",
                5,
                0,
                "Layers of Greek yogurt, fresh berries, and honey granola.",
            ),
            recipe(
                3,
                "Chicken Caesar Salad",
                "Lunch",
                15,
                10,
                "Classic Caesar salad with grilled chicken, romaine lettuce, and homemade dressing.",
            ),
            recipe(
                4,
                "Mediterranean Quinoa Bowl",
                "Lunch",
                10,
                20,
                "Protein-packed quinoa with chickpeas, cucumber, tomatoes, and feta cheese.",
            ),
            recipe(
                5,
                "Grilled Salmon with Asparagus",
                "Dinner",
                10,
                20,
                "Omega-rich salmon fillet with roasted asparagus and lemon butter sauce.",
            ),
            recipe(
                6,
                "Vegetable Stir Fry",
                "Dinner",
                15,
                10,
                "Colorful mix of stir-fried vegetables with tofu in a savory sauce.",
            ),
        ])
    }
}

#[async_trait]
impl RecipeSource for FixedCatalog {
    async fn candidates(&self) -> mealgrid_shared::Result<Vec<Recipe>> {
        Ok(self.recipes.to_vec())
    }
}
