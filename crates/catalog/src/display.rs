//! Presentation rules shared by the featured carousel and the card grid.

use crate::product::Product;

/// Characters of the description shown before expansion.
pub const TEASER_CHARS: usize = 100;

/// Maximum number of products in the featured carousel.
pub const FEATURED_LIMIT: usize = 5;

/// Truncated description: the first [`TEASER_CHARS`] characters with an
/// ellipsis marker appended unconditionally, even when the description is
/// already shorter.
pub fn teaser(description: &str) -> String {
    let mut out: String = description.chars().take(TEASER_CHARS).collect();
    out.push_str("...");
    out
}

/// The slice shown in the featured carousel: the first `min(5, N)` records.
pub fn featured(products: &[Product]) -> &[Product] {
    &products[..products.len().min(FEATURED_LIMIT)]
}

/// Discount badge text, present iff the discount percentage is strictly
/// positive.
pub fn discount_badge(product: &Product) -> Option<String> {
    product
        .has_discount()
        .then(|| format!("{}% OFF", product.discount_percentage))
}

/// Star-rating summary line, e.g. `⭐ 4.5 (120 reviews)`.
pub fn rating_summary(product: &Product) -> String {
    format!("⭐ {} ({} reviews)", product.rating, product.rating_count)
}
