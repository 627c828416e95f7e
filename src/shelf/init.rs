use crate::api::CatalogApi;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::Catalog;
use crate::store::json::JsonDirSource;
use crate::store::memory::InMemorySource;
use crate::store::RecordSource;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the catalog is read from, decided once at startup.
pub enum CatalogSource {
    Dir(JsonDirSource),
    Sample(InMemorySource),
}

impl RecordSource for CatalogSource {
    fn load(&self) -> Result<Catalog> {
        match self {
            CatalogSource::Dir(source) => source.load(),
            CatalogSource::Sample(source) => source.load(),
        }
    }

    fn describe(&self) -> String {
        match self {
            CatalogSource::Dir(source) => source.describe(),
            CatalogSource::Sample(source) => source.describe(),
        }
    }
}

pub struct ShelfContext {
    pub api: CatalogApi<CatalogSource>,
    pub config: ShelfConfig,
}

/// The platform config dir, e.g. `~/.config/shelf` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Picks the data dir: the explicit one first (flag or `SHELF_DATA`), then the
/// config file. `None` means the built-in sample.
pub fn resolve_data_dir(
    explicit: Option<&Path>,
    config: &ShelfConfig,
    config_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.to_path_buf());
    }
    match config_dir {
        Some(base) => config.resolved_data_dir(base),
        None => config.data_dir.clone(),
    }
}

pub fn initialize(data_dir: Option<&Path>, config_dir: Option<&Path>) -> Result<ShelfContext> {
    let config = match config_dir {
        Some(dir) => ShelfConfig::load(dir)?,
        None => ShelfConfig::default(),
    };

    let source = match resolve_data_dir(data_dir, &config, config_dir) {
        Some(dir) => CatalogSource::Dir(JsonDirSource::new(dir)),
        None => CatalogSource::Sample(InMemorySource::sample()),
    };
    debug!(source = %source.describe(), "catalog source selected");

    let api = CatalogApi::new(source)?;
    Ok(ShelfContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::json::write_catalog;

    #[test]
    fn test_explicit_dir_wins_over_config() {
        let config = ShelfConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            color: true,
        };
        let resolved = resolve_data_dir(Some(Path::new("/explicit")), &config, None);
        assert_eq!(resolved, Some(PathBuf::from("/explicit")));
    }

    #[test]
    fn test_config_dir_used_when_no_explicit_dir() {
        let config = ShelfConfig {
            data_dir: Some(PathBuf::from("records")),
            color: true,
        };
        let resolved = resolve_data_dir(None, &config, Some(Path::new("/cfg")));
        assert_eq!(resolved, Some(PathBuf::from("/cfg/records")));
    }

    #[test]
    fn test_no_dir_means_sample() {
        let cfg = tempfile::tempdir().unwrap();
        let ctx = initialize(None, Some(cfg.path())).unwrap();
        assert!(matches!(ctx.api.source(), CatalogSource::Sample(_)));
        assert_eq!(ctx.api.visible().len(), 9);
    }

    #[test]
    fn test_data_dir_is_loaded() {
        let data = tempfile::tempdir().unwrap();
        let catalog = crate::store::memory::fixtures::milk_and_bread().load().unwrap();
        write_catalog(data.path(), &catalog).unwrap();

        let ctx = initialize(Some(data.path()), None).unwrap();
        assert!(matches!(ctx.api.source(), CatalogSource::Dir(_)));
        assert_eq!(ctx.api.visible().len(), 2);
    }

    #[test]
    fn test_data_dir_from_config_file() {
        let cfg = tempfile::tempdir().unwrap();
        let catalog = crate::store::memory::fixtures::milk_and_bread().load().unwrap();
        write_catalog(cfg.path().join("data"), &catalog).unwrap();
        ShelfConfig {
            data_dir: Some(PathBuf::from("data")),
            color: false,
        }
        .save(cfg.path())
        .unwrap();

        let ctx = initialize(None, Some(cfg.path())).unwrap();
        assert!(!ctx.config.color);
        assert_eq!(ctx.api.catalog().users.len(), 2);
    }
}
