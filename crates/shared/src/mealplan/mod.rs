use std::fmt;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    Encode,
    Decode,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const COUNT: usize = 7;

    pub const ALL: [Day; Day::COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position inside the week, Monday being 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Three letter header label, e.g. `Mon`.
    pub fn short(self) -> &'static str {
        match self {
            Day::Monday => "Mon",
            Day::Tuesday => "Tue",
            Day::Wednesday => "Wed",
            Day::Thursday => "Thu",
            Day::Friday => "Fri",
            Day::Saturday => "Sat",
            Day::Sunday => "Sun",
        }
    }

    pub fn weekday(self) -> time::Weekday {
        match self {
            Day::Monday => time::Weekday::Monday,
            Day::Tuesday => time::Weekday::Tuesday,
            Day::Wednesday => time::Weekday::Wednesday,
            Day::Thursday => time::Weekday::Thursday,
            Day::Friday => time::Weekday::Friday,
            Day::Saturday => time::Weekday::Saturday,
            Day::Sunday => time::Weekday::Sunday,
        }
    }
}

impl From<time::Weekday> for Day {
    fn from(value: time::Weekday) -> Self {
        Day::ALL[value.number_days_from_monday() as usize]
    }
}

#[derive(
    Encode,
    Decode,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const COUNT: usize = 3;

    pub const ALL: [MealType; MealType::COUNT] =
        [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Capitalized name used in labels such as `Add Breakfast`.
    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }
}

/// Address of one cell of the weekly grid.
#[derive(Encode, Decode, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: Day,
    pub meal: MealType,
}

impl SlotKey {
    pub fn new(day: Day, meal: MealType) -> Self {
        Self { day, meal }
    }

    /// All 21 slots, day by day, breakfast first.
    pub fn all() -> impl Iterator<Item = SlotKey> {
        Day::ALL
            .into_iter()
            .flat_map(|day| MealType::ALL.into_iter().map(move |meal| SlotKey::new(day, meal)))
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day, self.meal)
    }
}

#[derive(
    Encode,
    Decode,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum DietType {
    Vegan,
    Vegetarian,
    Keto,
    Paleo,
    #[strum(serialize = "Gluten-Free")]
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    Mediterranean,
    #[strum(serialize = "Low-Carb")]
    #[serde(rename = "Low-Carb")]
    LowCarb,
}
