use std::str::FromStr;

use async_trait::async_trait;
use mealgrid_db::table::MealPlanWeek;
use mealgrid_shared::{
    mealplan::{Day, DietType, MealType, SlotKey},
    recipe::Recipe,
};
use sea_query::{Expr, ExprTrait, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::{Date, OffsetDateTime};

use crate::{PlanDetails, PlanSink, WeekPlan, WeekWindow};

#[derive(bitcode::Encode, bitcode::Decode)]
struct StoredSlot {
    day: Day,
    meal: MealType,
    recipe: Recipe,
}

#[derive(Default, FromRow)]
pub struct WeekRow {
    pub start: i64,
    pub end: i64,
    pub title: String,
    pub description: String,
    pub diet_type: Option<String>,
    pub slots: Vec<u8>,
    pub updated_at: i64,
}

#[derive(Debug, Default, FromRow)]
pub struct WeekListRow {
    pub start: i64,
    pub end: i64,
    pub title: String,
    pub diet_type: Option<String>,
    pub updated_at: i64,
}

impl WeekListRow {
    pub fn start_date(&self) -> anyhow::Result<Date> {
        Ok(OffsetDateTime::from_unix_timestamp(self.start)?.date())
    }

    pub fn end_date(&self) -> anyhow::Result<Date> {
        Ok(OffsetDateTime::from_unix_timestamp(self.end)?.date())
    }
}

fn timestamp(date: Date) -> i64 {
    date.midnight().assume_utc().unix_timestamp()
}

impl WeekRow {
    pub fn into_plan(self) -> anyhow::Result<WeekPlan> {
        let start = OffsetDateTime::from_unix_timestamp(self.start)?.date();
        let slots: Vec<StoredSlot> = bitcode::decode(&self.slots)?;
        let diet_type = match self.diet_type {
            Some(value) => Some(DietType::from_str(&value)?),
            _ => None,
        };

        Ok(WeekPlan {
            window: WeekWindow::containing(start)?,
            details: PlanDetails {
                title: self.title,
                description: self.description,
                diet_type,
            },
            grid: slots
                .into_iter()
                .map(|slot| (SlotKey::new(slot.day, slot.meal), slot.recipe))
                .collect(),
        })
    }
}

/// Weeks saved into the local SQLite database, one row per week start.
#[derive(Clone)]
pub struct SqlitePlanStore(pub SqlitePool);

impl SqlitePlanStore {
    pub async fn upsert(&self, plan: &WeekPlan) -> anyhow::Result<()> {
        let slots = plan
            .grid
            .assignments()
            .map(|(slot, recipe)| StoredSlot {
                day: slot.day,
                meal: slot.meal,
                recipe: recipe.clone(),
            })
            .collect::<Vec<_>>();
        let slots = bitcode::encode(&slots);
        let diet_type = plan.details.diet_type.map(|d| d.to_string());

        let statement = Query::insert()
            .into_table(MealPlanWeek::Table)
            .columns([
                MealPlanWeek::Start,
                MealPlanWeek::End,
                MealPlanWeek::Title,
                MealPlanWeek::Description,
                MealPlanWeek::DietType,
                MealPlanWeek::Slots,
                MealPlanWeek::UpdatedAt,
            ])
            .values_panic([
                timestamp(plan.window.start()).into(),
                timestamp(plan.window.end()).into(),
                plan.details.title.to_owned().into(),
                plan.details.description.to_owned().into(),
                diet_type.into(),
                slots.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::column(MealPlanWeek::Start)
                    .update_columns([
                        MealPlanWeek::Title,
                        MealPlanWeek::Description,
                        MealPlanWeek::DietType,
                        MealPlanWeek::Slots,
                        MealPlanWeek::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::info!(week = %plan.window, slots = plan.grid.len(), "week saved");

        Ok(())
    }

    pub async fn find(&self, start: Date) -> anyhow::Result<Option<WeekRow>> {
        let statement = Query::select()
            .columns([
                MealPlanWeek::Start,
                MealPlanWeek::End,
                MealPlanWeek::Title,
                MealPlanWeek::Description,
                MealPlanWeek::DietType,
                MealPlanWeek::Slots,
                MealPlanWeek::UpdatedAt,
            ])
            .from(MealPlanWeek::Table)
            .and_where(Expr::col(MealPlanWeek::Start).eq(timestamp(start)))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, WeekRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// Saved weeks, most recent week first.
    pub async fn list(&self) -> anyhow::Result<Vec<WeekListRow>> {
        let statement = Query::select()
            .columns([
                MealPlanWeek::Start,
                MealPlanWeek::End,
                MealPlanWeek::Title,
                MealPlanWeek::DietType,
                MealPlanWeek::UpdatedAt,
            ])
            .from(MealPlanWeek::Table)
            .order_by(MealPlanWeek::Start, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, WeekListRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Returns whether a week was removed.
    pub async fn delete(&self, start: Date) -> anyhow::Result<bool> {
        let statement = Query::delete()
            .from_table(MealPlanWeek::Table)
            .and_where(Expr::col(MealPlanWeek::Start).eq(timestamp(start)))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PlanSink for SqlitePlanStore {
    async fn save(&self, plan: &WeekPlan) -> mealgrid_shared::Result<()> {
        Ok(self.upsert(plan).await?)
    }

    async fn load(&self, start: Date) -> mealgrid_shared::Result<Option<WeekPlan>> {
        let Some(row) = self.find(start).await? else {
            return Ok(None);
        };

        Ok(Some(row.into_plan()?))
    }
}

