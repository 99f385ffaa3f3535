use mealgrid_shared::{
    mealplan::SlotKey,
    recipe::{Recipe, RecipeId},
};

/// Candidates whose title or category contains `term`, ignoring case.
/// Order is preserved and an empty term keeps everything.
pub fn filter<'a>(candidates: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    let needle = term.to_lowercase();

    candidates.iter().filter(|r| r.matches(&needle)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open(SlotKey),
}

/// Search overlay used to fill one empty slot at a time.
///
/// The search term outlives the overlay: closing and reopening keeps it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipePicker {
    state: PickerState,
    term: String,
}

#[derive(Debug, PartialEq)]
pub enum PickerResults<'a> {
    Found(Vec<&'a Recipe>),
    NoResults,
}

impl RecipePicker {
    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn target(&self) -> Option<SlotKey> {
        match self.state {
            PickerState::Open(slot) => Some(slot),
            PickerState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.target().is_some()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn open(&mut self, slot: SlotKey) {
        self.state = PickerState::Open(slot);
    }

    /// Explicit close and backdrop dismissal both land here.
    pub fn close(&mut self) {
        self.state = PickerState::Closed;
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn reset_search(&mut self) {
        self.term.clear();
    }

    pub fn results<'a>(&self, candidates: &'a [Recipe]) -> PickerResults<'a> {
        let found = filter(candidates, &self.term);
        if found.is_empty() {
            return PickerResults::NoResults;
        }

        PickerResults::Found(found)
    }

    /// Takes the visible candidate `recipe_id` for the open slot and closes
    /// the overlay.
    pub fn select(
        &mut self,
        candidates: &[Recipe],
        recipe_id: RecipeId,
    ) -> mealgrid_shared::Result<(SlotKey, Recipe)> {
        let Some(target) = self.target() else {
            mealgrid_shared::user!("recipe picker is not open");
        };

        let Some(recipe) = filter(candidates, &self.term)
            .into_iter()
            .find(|r| r.id == recipe_id)
        else {
            return Err(mealgrid_shared::Error::NotFound(format!(
                "recipe {recipe_id}"
            )));
        };

        self.close();

        Ok((target, recipe.clone()))
    }
}
