use anyhow::Result;
use clap::Subcommand;
use mealgrid::config::{Config, SinkKind};
use mealgrid_mealplan::{SqlitePlanStore, WeekWindow, format_date, parse_date};

#[derive(Subcommand)]
pub enum PlansCommand {
    /// List saved weeks
    List,
    /// Delete a saved week (any date of the week for sqlite, meal id for backend)
    Delete { id: String },
}

pub async fn plans(config: Config, command: PlansCommand) -> Result<()> {
    match config.planner.sink {
        SinkKind::Sqlite => sqlite(config, command).await,
        SinkKind::Backend => backend(config, command).await,
    }
}

/// Monday of the week holding the `YYYY-MM-DD` date.
fn week_start(id: &str) -> Result<time::Date> {
    Ok(WeekWindow::containing(parse_date(id)?)?.start())
}

async fn sqlite(config: Config, command: PlansCommand) -> Result<()> {
    let pool = mealgrid::db::create_pool(&config.database.url, 1).await?;
    let store = SqlitePlanStore(pool);

    match command {
        PlansCommand::List => {
            for week in store.list().await? {
                println!(
                    "{}  {}  {}  {}",
                    format_date(week.start_date()?),
                    format_date(week.end_date()?),
                    week.diet_type.as_deref().unwrap_or("-"),
                    week.title
                );
            }
        }
        PlansCommand::Delete { id } => {
            let start = week_start(&id)?;
            if !store.delete(start).await? {
                anyhow::bail!("no week saved for {id}");
            }
            tracing::info!("week {id} deleted");
        }
    }

    Ok(())
}

async fn backend(config: Config, command: PlansCommand) -> Result<()> {
    let backend = mealgrid::server::backend(&config)?;

    match command {
        PlansCommand::List => {
            for meal in backend.meals().await? {
                println!(
                    "{:>5}  {}  {}  {}",
                    meal.id,
                    meal.start()?.map(format_date).unwrap_or_default(),
                    meal.end()?.map(format_date).unwrap_or_default(),
                    meal.title
                );
            }
        }
        PlansCommand::Delete { id } => {
            let id = id.parse::<i64>()?;
            backend.delete_meal(id).await?;
            tracing::info!("meal {id} deleted");
        }
    }

    Ok(())
}
