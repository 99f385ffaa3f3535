use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

pub type RecipeId = i64;

/// A recipe that can be placed in a meal slot.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub image_ref: String,
    pub category: String,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub description: String,
}

impl Recipe {
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }

    /// Case-insensitive substring match on title or category.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}
