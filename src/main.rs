use anyhow::Result;
use clap::{Parser, Subcommand};
use sqlx::migrate::MigrateDatabase;

mod cli;

/// mealgrid - Weekly meal planning grid
#[derive(Parser)]
#[command(name = "mealgrid")]
#[command(about = "Plan a week of meals on a day by meal grid", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Print the Monday to Sunday window holding a date
    Week {
        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Print the saved grid of a week
    Show {
        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Manage saved weeks
    Plans {
        #[command(subcommand)]
        command: cli::plans::PlansCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealgrid::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealgrid::observability::init_observability(
        "mealgrid",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::Week { date } => cli::week::week(config, date),
        Commands::Show { date } => cli::week::show(config, date).await,
        Commands::Plans { command } => cli::plans::plans(config, command).await,
    }
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: mealgrid::config::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    mealgrid::db::ensure_database(&config.database.url).await?;
    let pool = mealgrid::db::create_pool(&config.database.url, 1).await?;
    mealgrid::db::run_migrations(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: mealgrid::config::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
        tracing::info!("Database dropped successfully");
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
