use mealgrid_shared::{
    mealplan::{Day, MealType, SlotKey},
    recipe::Recipe,
};

/// Recipe assignments of one week, one cell per (day, meal).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    cells: [[Option<Recipe>; MealType::COUNT]; Day::COUNT],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: SlotKey) -> Option<&Recipe> {
        self.cells[slot.day.index()][slot.meal.index()].as_ref()
    }

    pub fn is_occupied(&self, slot: SlotKey) -> bool {
        self.get(slot).is_some()
    }

    /// Places `recipe` at `slot`, returning whatever was there before.
    pub fn assign(&mut self, slot: SlotKey, recipe: Recipe) -> Option<Recipe> {
        self.cell_mut(slot).replace(recipe)
    }

    pub fn clear(&mut self, slot: SlotKey) -> Option<Recipe> {
        self.cell_mut(slot).take()
    }

    fn cell_mut(&mut self, slot: SlotKey) -> &mut Option<Recipe> {
        &mut self.cells[slot.day.index()][slot.meal.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.assignments().count()
    }

    /// Every cell in display order, empty ones included.
    pub fn cells(&self) -> impl Iterator<Item = (SlotKey, Option<&Recipe>)> + '_ {
        SlotKey::all().map(|slot| (slot, self.get(slot)))
    }

    pub fn assignments(&self) -> impl Iterator<Item = (SlotKey, &Recipe)> + '_ {
        self.cells()
            .filter_map(|(slot, recipe)| recipe.map(|recipe| (slot, recipe)))
    }
}

impl FromIterator<(SlotKey, Recipe)> for Grid {
    fn from_iter<T: IntoIterator<Item = (SlotKey, Recipe)>>(iter: T) -> Self {
        let mut grid = Grid::new();
        for (slot, recipe) in iter {
            grid.assign(slot, recipe);
        }

        grid
    }
}
