//! Search and category filtering.

use shared::{Category, Product};

/// Derive the customer-visible product set.
///
/// Hidden products never appear. A non-empty search query (case-folded,
/// trimmed) matches as a substring against name or description and takes
/// precedence over the category filter; with no query active, products
/// are matched by category, with [`Category::All`] passing everything
/// through.
pub fn visible_products(
    catalog: &[Product],
    search_query: &str,
    category: Category,
) -> Vec<Product> {
    if catalog.is_empty() {
        return Vec::new();
    }

    let query = search_query.to_lowercase();
    let query = query.trim();

    catalog
        .iter()
        .filter(|product| {
            if product.hidden_on_home {
                return false;
            }

            // Search takes precedence over category filtering
            if !query.is_empty() {
                return product.name.to_lowercase().contains(query)
                    || product.description.to_lowercase().contains(query);
            }

            category == Category::All || Category::from_tag(&product.category) == category
        })
        .cloned()
        .collect()
}
