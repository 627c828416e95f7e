use crate::model::{Category, EnrichedProduct, Product, User};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, warn};

/// Joins every product with its category and that category's owner.
///
/// Output order follows `products`. References that do not resolve become
/// `None`. When ids repeat inside a collection the first record wins.
pub fn enrich(products: &[Product], categories: &[Category], users: &[User]) -> Vec<EnrichedProduct> {
    let categories_by_id = index_by(categories, "category", |c| c.id);
    let users_by_id = index_by(users, "user", |u| u.id);

    let enriched: Vec<EnrichedProduct> = products
        .iter()
        .map(|product| {
            let category = categories_by_id.get(&product.category_id).copied();
            let user = category.and_then(|c| users_by_id.get(&c.owner_id).copied());

            EnrichedProduct {
                product: product.clone(),
                category: category.cloned(),
                user: user.cloned(),
            }
        })
        .collect();

    debug!(
        products = enriched.len(),
        unresolved_categories = enriched.iter().filter(|e| e.category.is_none()).count(),
        unresolved_users = enriched.iter().filter(|e| e.user.is_none()).count(),
        "catalog enriched"
    );

    enriched
}

fn index_by<'a, T, K, F>(records: &'a [T], kind: &str, key: F) -> HashMap<K, &'a T>
where
    K: Eq + Hash + Copy + std::fmt::Display,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        let id = key(record);
        if index.contains_key(&id) {
            warn!(kind, id = %id, "duplicate id, keeping the first record");
            continue;
        }
        index.insert(id, record);
    }
    index
}
