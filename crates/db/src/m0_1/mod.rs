mod meal_plan_week;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealgrid",
    "m0_1",
    vec_box![],
    vec_box![meal_plan_week::CreateTable, meal_plan_week::CreateIdx1]
);
