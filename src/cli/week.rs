use anyhow::Result;
use mealgrid::config::{Config, SinkKind};
use mealgrid_mealplan::{Grid, SqlitePlanStore, WeekWindow, format_date, parse_date, today};
use mealgrid_shared::mealplan::{MealType, SlotKey};

fn reference(config: &Config, date: Option<String>) -> Result<time::Date> {
    Ok(match date {
        Some(date) => parse_date(&date)?,
        None => today(&config.planner.timezone),
    })
}

/// Prints the week window holding the date, one line per day.
pub fn week(config: Config, date: Option<String>) -> Result<()> {
    let window = WeekWindow::containing(reference(&config, date)?)?;

    println!("{window}");
    for (day, date) in window.days() {
        println!("{} {:>2}  {}", day.short(), date.day(), format_date(date));
    }

    Ok(())
}

/// Prints the saved grid of the week holding the date.
pub async fn show(config: Config, date: Option<String>) -> Result<()> {
    let window = WeekWindow::containing(reference(&config, date)?)?;

    if config.planner.sink != SinkKind::Sqlite {
        anyhow::bail!("show reads the local database, set planner.sink = \"sqlite\"");
    }

    let pool = mealgrid::db::create_pool(&config.database.url, 1).await?;
    let store = SqlitePlanStore(pool);

    let Some(row) = store.find(window.start()).await? else {
        println!("{window}: nothing saved");
        return Ok(());
    };
    let plan = row.into_plan()?;

    println!("{} ({window})", plan.details.title);
    if let Some(diet_type) = plan.details.diet_type {
        println!("Diet: {diet_type}");
    }
    print_grid(&window, &plan.grid);

    Ok(())
}

fn print_grid(window: &WeekWindow, grid: &Grid) {
    for (day, date) in window.days() {
        println!("{} {:>2}", day.short(), date.day());
        for meal in MealType::ALL {
            let title = grid
                .get(SlotKey::new(day, meal))
                .map(|r| r.title.as_str())
                .unwrap_or("-");
            println!("  {:<10} {title}", meal.label());
        }
    }
}
