//! Local pagination engine for order-scoped browsing
//!
//! The order endpoint returns the full override-priced product set once;
//! every query change recomputes filter → sort → slice from that cached set.

use std::cmp::Ordering;

use shared::models::Product;
use shared::response::Page;

use super::query::{CatalogQuery, SortDirection, SortField};

/// Compute one page of the cached set for the given query
pub fn paginate(products: &[Product], query: &CatalogQuery) -> Page<Product> {
    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|p| matches_filters(p, query))
        .collect();

    filtered.sort_by(|a, b| {
        let ord = compare(a, b, query.sort_by);
        match query.sort_direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    let total_elements = filtered.len() as u64;
    let total_pages = total_pages(filtered.len(), query.page_size);

    let start = (query.page as usize).saturating_mul(query.page_size as usize);
    let content: Vec<Product> = filtered
        .into_iter()
        .skip(start)
        .take(query.page_size as usize)
        .cloned()
        .collect();

    Page::of(content, total_pages, total_elements)
}

fn matches_filters(product: &Product, query: &CatalogQuery) -> bool {
    if let Some(category) = &query.category
        && product.category_id.as_deref() != Some(category.as_str())
    {
        return false;
    }
    if let Some(brand) = &query.brand
        && product.brand_id.as_deref() != Some(brand.as_str())
    {
        return false;
    }
    true
}

fn total_pages(count: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size as usize) as u32
}

/// Ascending comparison for one sort field
///
/// Descending order is always the reverse of this, never a second comparator.
fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_names(&a.name, &b.name),
        SortField::SpecialPrice => a.special_price.total_cmp(&b.special_price),
        SortField::OriginalPrice => a.original_price.total_cmp(&b.original_price),
    }
}

/// Case-folded name comparison with a deterministic raw tiebreak
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}
