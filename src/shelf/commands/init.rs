use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::json::write_catalog;
use crate::store::memory::InMemorySource;
use crate::store::{RecordSource, USERS_FILE};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes the built-in sample catalog to `target` and points the config in
/// `config_dir` at it. An existing catalog in `target` is never overwritten.
pub fn run(target: &Path, config_dir: &Path) -> Result<CmdResult> {
    let users_path = target.join(USERS_FILE);
    if users_path.exists() {
        return Err(ShelfError::Source {
            path: users_path,
            message: "a catalog already exists here".to_string(),
        });
    }

    let catalog = InMemorySource::sample().load()?;
    write_catalog(target, &catalog)?;
    let target = fs::canonicalize(target)?;

    let mut config = ShelfConfig::load(config_dir)?;
    config.data_dir = Some(target.clone());
    config.save(config_dir)?;
    debug!(data_dir = %target.display(), config_dir = %config_dir.display(), "catalog initialized");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Wrote sample catalog to {}",
        target.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "data_dir set in {}",
        config_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::init::initialize;
    use crate::store::json::JsonDirSource;

    #[test]
    fn test_init_writes_sample_and_config() {
        let cfg = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        let target = data.path().join("catalog");

        let result = run(&target, cfg.path()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let written = JsonDirSource::new(&target).load().unwrap();
        assert_eq!(written, InMemorySource::sample().load().unwrap());

        let config = ShelfConfig::load(cfg.path()).unwrap();
        assert_eq!(config.data_dir, Some(fs::canonicalize(&target).unwrap()));
    }

    #[test]
    fn test_init_keeps_other_config_fields() {
        let cfg = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        ShelfConfig {
            data_dir: None,
            color: false,
        }
        .save(cfg.path())
        .unwrap();

        run(data.path(), cfg.path()).unwrap();
        let config = ShelfConfig::load(cfg.path()).unwrap();
        assert!(!config.color);
        assert!(config.data_dir.is_some());
    }

    #[test]
    fn test_init_refuses_existing_catalog() {
        let cfg = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        run(data.path(), cfg.path()).unwrap();

        let err = run(data.path(), cfg.path()).unwrap_err();
        assert!(matches!(err, ShelfError::Source { .. }));
    }

    #[test]
    fn test_initialized_catalog_is_picked_up() {
        let cfg = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        run(data.path(), cfg.path()).unwrap();

        let ctx = initialize(None, Some(cfg.path())).unwrap();
        assert!(matches!(ctx.api.source(), crate::init::CatalogSource::Dir(_)));
        assert_eq!(ctx.api.visible().len(), 9);
    }
}
