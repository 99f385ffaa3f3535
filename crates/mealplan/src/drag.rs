use mealgrid_shared::{mealplan::SlotKey, recipe::Recipe};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::Grid;

/// What a drop does when the target cell already holds a recipe.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DropConflict {
    /// The previous occupant of the target is discarded.
    #[default]
    Overwrite,
    /// The previous occupant of the target moves to the source cell.
    Swap,
    /// The drop is refused and the grid is left untouched.
    Reject,
}

/// What is being moved while a drag gesture is in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub source: SlotKey,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// No drag was in progress, or its source cell changed since it began.
    NoPayload,
    /// Dropped back onto the source cell.
    SameSlot,
    Moved {
        /// Recipe that occupied the target and was overwritten.
        discarded: Option<Recipe>,
    },
    Swapped,
    Rejected,
}

impl DropOutcome {
    /// Whether the grid was modified by the drop.
    pub fn changed(&self) -> bool {
        matches!(self, DropOutcome::Moved { .. } | DropOutcome::Swapped)
    }
}

/// Starts dragging the recipe at `slot`. An empty cell cannot be dragged.
pub fn begin_drag(grid: &Grid, slot: SlotKey) -> Option<DragPayload> {
    grid.get(slot).map(|recipe| DragPayload {
        source: slot,
        recipe: recipe.clone(),
    })
}

/// Moves the dragged recipe onto `target`, clearing its source cell.
pub fn drop_on(
    grid: &mut Grid,
    payload: Option<&DragPayload>,
    target: SlotKey,
    on_conflict: DropConflict,
) -> DropOutcome {
    let Some(payload) = payload else {
        return DropOutcome::NoPayload;
    };

    if grid.get(payload.source) != Some(&payload.recipe) {
        return DropOutcome::NoPayload;
    }

    if payload.source == target {
        return DropOutcome::SameSlot;
    }

    let occupied = grid.is_occupied(target);

    match on_conflict {
        DropConflict::Reject if occupied => DropOutcome::Rejected,
        DropConflict::Swap if occupied => {
            grid.clear(payload.source);
            if let Some(previous) = grid.assign(target, payload.recipe.clone()) {
                grid.assign(payload.source, previous);
            }

            DropOutcome::Swapped
        }
        _ => {
            grid.clear(payload.source);
            let discarded = grid.assign(target, payload.recipe.clone());

            DropOutcome::Moved { discarded }
        }
    }
}

#[cfg(test)]
mod tests {
    use mealgrid_shared::mealplan::{Day, MealType};

    use super::*;
    use crate::FixedCatalog;

    fn slot(day: Day, meal: MealType) -> SlotKey {
        SlotKey::new(day, meal)
    }

    fn setup() -> (Grid, Vec<Recipe>) {
        let recipes = FixedCatalog::default().into_recipes();
        let mut grid = Grid::new();
        grid.assign(slot(Day::Monday, MealType::Lunch), recipes[0].clone());
        grid.assign(slot(Day::Tuesday, MealType::Lunch), recipes[2].clone());

        (grid, recipes)
    }

    #[test]
    fn test_empty_cell_does_not_start_a_drag() {
        let (grid, _) = setup();
        assert_eq!(begin_drag(&grid, slot(Day::Sunday, MealType::Dinner)), None);
    }

    #[test]
    fn test_move_to_empty_cell() {
        let (mut grid, recipes) = setup();
        let before = grid.clone();
        let source = slot(Day::Monday, MealType::Lunch);
        let target = slot(Day::Wednesday, MealType::Dinner);

        let payload = begin_drag(&grid, source);
        let outcome = drop_on(&mut grid, payload.as_ref(), target, DropConflict::Overwrite);

        assert_eq!(outcome, DropOutcome::Moved { discarded: None });
        assert_eq!(grid.get(source), None);
        assert_eq!(grid.get(target), Some(&recipes[0]));
        for (key, recipe) in before.cells() {
            if key != source && key != target {
                assert_eq!(grid.get(key), recipe);
            }
        }
    }

    #[test]
    fn test_same_slot_is_a_no_op() {
        let (mut grid, _) = setup();
        let before = grid.clone();
        let source = slot(Day::Monday, MealType::Lunch);

        let payload = begin_drag(&grid, source);
        let outcome = drop_on(&mut grid, payload.as_ref(), source, DropConflict::Overwrite);

        assert_eq!(outcome, DropOutcome::SameSlot);
        assert!(!outcome.changed());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_drop_without_payload() {
        let (mut grid, _) = setup();
        let before = grid.clone();

        let outcome = drop_on(
            &mut grid,
            None,
            slot(Day::Friday, MealType::Breakfast),
            DropConflict::Overwrite,
        );

        assert_eq!(outcome, DropOutcome::NoPayload);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_stale_payload_is_ignored() {
        let (mut grid, recipes) = setup();
        let source = slot(Day::Monday, MealType::Lunch);
        let target = slot(Day::Friday, MealType::Lunch);

        let payload = begin_drag(&grid, source);
        grid.assign(source, recipes[3].clone());
        let before = grid.clone();

        let outcome = drop_on(&mut grid, payload.as_ref(), target, DropConflict::Overwrite);

        assert_eq!(outcome, DropOutcome::NoPayload);
        assert_eq!(grid, before);

        grid.clear(source);
        let outcome = drop_on(&mut grid, payload.as_ref(), target, DropConflict::Overwrite);
        assert_eq!(outcome, DropOutcome::NoPayload);
        assert_eq!(grid.get(target), None);
    }

    #[test]
    fn test_overwrite_discards_target() {
        let (mut grid, recipes) = setup();
        let source = slot(Day::Monday, MealType::Lunch);
        let target = slot(Day::Tuesday, MealType::Lunch);

        let payload = begin_drag(&grid, source);
        let outcome = drop_on(&mut grid, payload.as_ref(), target, DropConflict::Overwrite);

        assert_eq!(
            outcome,
            DropOutcome::Moved {
                discarded: Some(recipes[2].clone())
            }
        );
        assert_eq!(grid.get(target), Some(&recipes[0]));
        assert_eq!(grid.get(source), None);
        assert!(grid.assignments().all(|(_, r)| r.id != recipes[2].id));
    }

    #[test]
    fn test_swap_exchanges_cells() {
        let (mut grid, recipes) = setup();
        let source = slot(Day::Monday, MealType::Lunch);
        let target = slot(Day::Tuesday, MealType::Lunch);

        let payload = begin_drag(&grid, source);
        let outcome = drop_on(&mut grid, payload.as_ref(), target, DropConflict::Swap);

        assert_eq!(outcome, DropOutcome::Swapped);
        assert_eq!(grid.get(target), Some(&recipes[0]));
        assert_eq!(grid.get(source), Some(&recipes[2]));
    }

    #[test]
    fn test_swap_onto_empty_cell_moves() {
        let (mut grid, recipes) = setup();
        let source = slot(Day::Monday, MealType::Lunch);
        let target = slot(Day::Monday, MealType::Dinner);

        let payload = begin_drag(&grid, source);
        let outcome = drop_on(&mut grid, payload.as_ref(), target, DropConflict::Swap);

        assert_eq!(outcome, DropOutcome::Moved { discarded: None });
        assert_eq!(grid.get(source), None);
        assert_eq!(grid.get(target), Some(&recipes[0]));
    }

    #[test]
    fn test_reject_keeps_grid() {
        let (mut grid, _) = setup();
        let before = grid.clone();

        let payload = begin_drag(&grid, slot(Day::Monday, MealType::Lunch));
        let outcome = drop_on(
            &mut grid,
            payload.as_ref(),
            slot(Day::Tuesday, MealType::Lunch),
            DropConflict::Reject,
        );

        assert_eq!(outcome, DropOutcome::Rejected);
        assert_eq!(grid, before);
    }
}
