use super::{RecordSource, CATEGORIES_FILE, PRODUCTS_FILE, USERS_FILE};
use crate::error::{Result, ShelfError};
use crate::model::Catalog;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads `users.json`, `categories.json` and `products.json` from one directory.
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_collection<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Err(ShelfError::Source {
                path,
                message: "collection file not found".to_string(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| ShelfError::Source {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let records: Vec<T> = serde_json::from_str(&content).map_err(|e| ShelfError::Source {
            path: path.clone(),
            message: e.to_string(),
        })?;

        debug!(file = %path.display(), records = records.len(), "collection loaded");
        Ok(records)
    }
}

impl RecordSource for JsonDirSource {
    fn load(&self) -> Result<Catalog> {
        Ok(Catalog {
            users: self.read_collection(USERS_FILE)?,
            categories: self.read_collection(CATEGORIES_FILE)?,
            products: self.read_collection(PRODUCTS_FILE)?,
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Writes a catalog in the layout [`JsonDirSource`] reads.
pub fn write_catalog<P: AsRef<Path>>(root: P, catalog: &Catalog) -> Result<()> {
    let root = root.as_ref();
    if !root.exists() {
        fs::create_dir_all(root).map_err(ShelfError::Io)?;
    }

    let files = [
        (USERS_FILE, serde_json::to_string_pretty(&catalog.users)?),
        (CATEGORIES_FILE, serde_json::to_string_pretty(&catalog.categories)?),
        (PRODUCTS_FILE, serde_json::to_string_pretty(&catalog.products)?),
    ];
    for (name, content) in files {
        fs::write(root.join(name), content).map_err(ShelfError::Io)?;
    }
    Ok(())
}
