use mealgrid_mealplan::SqlitePlanStore;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<SqlitePlanStore> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealgrid_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(SqlitePlanStore(pool))
}
