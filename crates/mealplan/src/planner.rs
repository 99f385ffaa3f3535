use std::collections::{BTreeMap, BTreeSet};

use mealgrid_shared::{
    mealplan::SlotKey,
    recipe::{Recipe, RecipeId},
};
use time::Date;

use crate::{
    DragPayload, DropConflict, DropOutcome, Grid, PlanDetails, RecipePicker, WeekPlan, WeekWindow,
};

/// Everything the planner screen owns. Each user interaction maps to one
/// method call.
#[derive(Debug, Clone)]
pub struct PlannerState {
    window: WeekWindow,
    grid: Grid,
    visited: BTreeMap<Date, Grid>,
    known: BTreeSet<Date>,
    candidates: Vec<Recipe>,
    picker: RecipePicker,
    drag: Option<DragPayload>,
    hover: Option<SlotKey>,
    on_drop_conflict: DropConflict,
}

impl PlannerState {
    pub fn new(
        reference: Date,
        candidates: Vec<Recipe>,
        on_drop_conflict: DropConflict,
    ) -> mealgrid_shared::Result<Self> {
        Ok(Self {
            window: WeekWindow::containing(reference)?,
            grid: Grid::new(),
            visited: BTreeMap::new(),
            known: BTreeSet::new(),
            candidates,
            picker: RecipePicker::default(),
            drag: None,
            hover: None,
            on_drop_conflict,
        })
    }

    pub fn window(&self) -> &WeekWindow {
        &self.window
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn candidates(&self) -> &[Recipe] {
        &self.candidates
    }

    pub fn picker(&self) -> &RecipePicker {
        &self.picker
    }

    pub fn drag(&self) -> Option<&DragPayload> {
        self.drag.as_ref()
    }

    pub fn hover(&self) -> Option<SlotKey> {
        self.hover
    }

    pub fn on_drop_conflict(&self) -> DropConflict {
        self.on_drop_conflict
    }

    pub fn next_week(&mut self) -> mealgrid_shared::Result<()> {
        let window = self.window.next()?;
        self.show(window);

        Ok(())
    }

    pub fn prev_week(&mut self) -> mealgrid_shared::Result<()> {
        let window = self.window.prev()?;
        self.show(window);

        Ok(())
    }

    /// Jumps to the week holding `reference`.
    pub fn go_to(&mut self, reference: Date) -> mealgrid_shared::Result<()> {
        let window = WeekWindow::containing(reference)?;
        self.show(window);

        Ok(())
    }

    fn show(&mut self, window: WeekWindow) {
        if window == self.window {
            return;
        }

        let grid = self.visited.remove(&window.start()).unwrap_or_default();
        let previous = std::mem::replace(&mut self.grid, grid);
        self.visited.insert(self.window.start(), previous);
        self.known.insert(self.window.start());

        self.window = window;
        self.picker.close();
        self.end_drag();

        tracing::debug!(week = %self.window, "week displayed");
    }

    /// Whether the week was already displayed or restored this session, in
    /// which case its grid, even an emptied one, wins over any saved copy.
    pub fn is_known(&self, start: Date) -> bool {
        self.known.contains(&start)
    }

    /// Loads a saved week into the session. Replaces the displayed grid when
    /// the plan is for the displayed week.
    pub fn restore(&mut self, plan: WeekPlan) {
        self.known.insert(plan.window.start());

        if plan.window == self.window {
            self.grid = plan.grid;
            return;
        }

        self.visited.insert(plan.window.start(), plan.grid);
    }

    /// Click on a cell. Only an empty cell opens the picker; returns whether
    /// it did.
    pub fn open_slot(&mut self, slot: SlotKey) -> bool {
        if self.grid.is_occupied(slot) {
            return false;
        }

        self.picker.open(slot);

        true
    }

    pub fn close_picker(&mut self) {
        self.picker.close();
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.picker.search(term);
    }

    pub fn reset_search(&mut self) {
        self.picker.reset_search();
    }

    /// Assigns a visible picker candidate to the slot the picker was opened
    /// for. Any previous occupant is overwritten.
    pub fn select_recipe(&mut self, recipe_id: RecipeId) -> mealgrid_shared::Result<SlotKey> {
        let (slot, recipe) = self.picker.select(&self.candidates, recipe_id)?;

        tracing::debug!(%slot, recipe_id, "recipe assigned");
        self.assign(slot, recipe);

        Ok(slot)
    }

    pub fn assign(&mut self, slot: SlotKey, recipe: Recipe) -> Option<Recipe> {
        self.cancel_drag_from(slot);
        self.grid.assign(slot, recipe)
    }

    pub fn remove(&mut self, slot: SlotKey) -> Option<Recipe> {
        self.cancel_drag_from(slot);
        self.grid.clear(slot)
    }

    /// A payload no longer matches its source once that cell is edited.
    fn cancel_drag_from(&mut self, slot: SlotKey) {
        if self.drag.as_ref().is_some_and(|payload| payload.source == slot) {
            tracing::debug!(%slot, "drag source edited, drag cancelled");
            self.end_drag();
        }
    }

    /// Returns whether a drag started, which needs an occupied cell.
    pub fn begin_drag(&mut self, slot: SlotKey) -> bool {
        self.drag = crate::begin_drag(&self.grid, slot);

        self.drag.is_some()
    }

    pub fn drag_over(&mut self, slot: SlotKey) {
        if self.drag.is_some() {
            self.hover = Some(slot);
        }
    }

    pub fn drag_leave(&mut self) {
        self.hover = None;
    }

    pub fn drop_on(&mut self, target: SlotKey) -> DropOutcome {
        self.hover = None;

        let outcome = crate::drop_on(
            &mut self.grid,
            self.drag.as_ref(),
            target,
            self.on_drop_conflict,
        );

        match &outcome {
            DropOutcome::Moved {
                discarded: Some(recipe),
            } => {
                tracing::debug!(%target, discarded = recipe.id, "drop overwrote an assignment");
            }
            DropOutcome::Rejected => {
                tracing::debug!(%target, "drop onto an occupied cell refused");
            }
            _ => {}
        }

        if outcome.changed() {
            self.drag = None;
        }

        outcome
    }

    /// Called when the gesture finishes, dropped or not.
    pub fn end_drag(&mut self) {
        self.drag = None;
        self.hover = None;
    }

    pub fn to_plan(&self, details: PlanDetails) -> WeekPlan {
        WeekPlan {
            window: self.window,
            details,
            grid: self.grid.clone(),
        }
    }
}
