mod command;
pub mod mealplan;
pub mod recipe;

pub use command::*;
