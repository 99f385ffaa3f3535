use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum MealPlanWeek {
    Table,
    Start,
    End,
    Title,
    Description,
    DietType,
    Slots,
    UpdatedAt,
}
