use super::RecordSource;
use crate::error::{Result, ShelfError};
use crate::model::{Catalog, Category, Product, User};

const SAMPLE_USERS: &str = include_str!("sample/users.json");
const SAMPLE_CATEGORIES: &str = include_str!("sample/categories.json");
const SAMPLE_PRODUCTS: &str = include_str!("sample/products.json");

/// In-memory records for tests and the built-in sample catalog.
/// Nothing is read from disk.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    catalog: Catalog,
    label: Option<String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog compiled into the binary.
    pub fn sample() -> Self {
        Self {
            catalog: Catalog::default(),
            label: Some("built-in sample".to_string()),
        }
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.catalog.users = users;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.catalog.categories = categories;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.catalog.products = products;
        self
    }

    fn is_sample(&self) -> bool {
        self.label.is_some()
    }
}

fn parse_sample() -> Result<Catalog> {
    Ok(Catalog {
        users: serde_json::from_str(SAMPLE_USERS).map_err(ShelfError::Serialization)?,
        categories: serde_json::from_str(SAMPLE_CATEGORIES).map_err(ShelfError::Serialization)?,
        products: serde_json::from_str(SAMPLE_PRODUCTS).map_err(ShelfError::Serialization)?,
    })
}

impl RecordSource for InMemorySource {
    fn load(&self) -> Result<Catalog> {
        if self.is_sample() {
            return parse_sample();
        }
        Ok(self.catalog.clone())
    }

    fn describe(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| "in-memory".to_string())
    }
}

// --- Test Fixtures ---
