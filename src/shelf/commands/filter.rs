use crate::model::EnrichedProduct;
use crate::state::FilterState;

/// Returns the products visible under `state`, in their original order.
///
/// A product is visible when it passes the owner step and the name step. An
/// empty result is a regular outcome.
pub fn filter(products: &[EnrichedProduct], state: &FilterState) -> Vec<EnrichedProduct> {
    let query = state.query.to_lowercase();

    products
        .iter()
        .filter(|p| owner_matches(p, &state.owner) && name_matches(p, &query))
        .cloned()
        .collect()
}

/// Single-row form of [`filter`].
pub fn matches(product: &EnrichedProduct, state: &FilterState) -> bool {
    owner_matches(product, &state.owner) && name_matches(product, &state.query.to_lowercase())
}

fn owner_matches(product: &EnrichedProduct, owner: &str) -> bool {
    owner.is_empty() || product.owner_name() == Some(owner)
}

// `lowered_query` must already be lowercase
fn name_matches(product: &EnrichedProduct, lowered_query: &str) -> bool {
    product.name().to_lowercase().contains(lowered_query)
}
