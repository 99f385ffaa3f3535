//! Tests for configuration loading

use mealgrid::config::{CatalogKind, Config, SinkKind};
use mealgrid_mealplan::DropConflict;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() -> anyhow::Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml");
    let config = Config::load(Some(path.to_string()))?;

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.backend.url, "http://localhost:8095");
    assert_eq!(config.planner.timezone, "UTC");
    assert_eq!(config.planner.on_drop_conflict, DropConflict::Overwrite);
    assert_eq!(config.planner.catalog, CatalogKind::Fixed);
    assert_eq!(config.planner.sink, SinkKind::Sqlite);
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("mealgrid.toml");
    std::fs::write(
        &path,
        r#"
        [server]
        port = 8088

        [planner]
        timezone = "Europe/Paris"
        on_drop_conflict = "reject"
        "#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8088);
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.planner.timezone, "Europe/Paris");
    assert_eq!(config.planner.on_drop_conflict, DropConflict::Reject);
    assert_eq!(config.observability.log_level, "info");

    Ok(())
}

#[test]
fn test_missing_config_file_uses_defaults() -> anyhow::Result<()> {
    let config = Config::load(Some("does/not/exist.toml".to_string()))?;

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.planner.sink, SinkKind::Sqlite);

    Ok(())
}
