use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id,
            name: name.into(),
            sex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub icon: String,
    // Not guaranteed to reference an existing user
    pub owner_id: u32,
}

impl Category {
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>, owner_id: u32) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            owner_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    // Not guaranteed to reference an existing category
    pub category_id: u32,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }
}

/// A product with its category and the category's owner resolved.
///
/// `None` marks a reference that did not resolve; it is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedProduct {
    pub product: Product,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn id(&self) -> u32 {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

/// The three base collections, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}
