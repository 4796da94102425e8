use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// A product record as returned by the content backend.
///
/// Read-only and never mutated locally: whatever the backend returns is
/// rendered as-is. The optional shapes mirror the wire format — a record may
/// lack an image asset, additional images, tags, or sizes. No client-side
/// validation of numeric ranges or string shape is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    /// Resolved primary image URL; `None` when the record has no image asset.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Resolved URLs of any additional images; absent on the wire decodes empty.
    #[serde(default)]
    pub additional_images: Vec<String>,
    /// Currency-less numeric price.
    pub price: f64,
    pub description: String,
    /// `0` means no discount badge is shown.
    #[serde(default)]
    pub discount_percentage: f64,
    /// Present in the data but unused in rendering.
    #[serde(default)]
    pub price_without_discount: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl Product {
    /// Slides for the per-card image carousel: the primary image first, then
    /// each additional image in order.
    pub fn image_slides(&self) -> Vec<&str> {
        self.image_url
            .iter()
            .map(String::as_str)
            .chain(self.additional_images.iter().map(String::as_str))
            .collect()
    }

    /// Whether a discount badge is shown for this record.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let product: Product = serde_json::from_str(
            r#"{
                "_id": "prod-1",
                "name": "Library Stool",
                "imageUrl": "https://cdn.example/images/stool.jpg",
                "additionalImages": [
                    "https://cdn.example/images/stool-side.jpg",
                    "https://cdn.example/images/stool-top.jpg"
                ],
                "price": 89.5,
                "description": "A sturdy stool.",
                "discountPercentage": 15,
                "priceWithoutDiscount": 105.3,
                "rating": 4.5,
                "ratingCount": 120,
                "tags": ["wood", "seating"],
                "sizes": ["S", "M"]
            }"#,
        )
        .unwrap();

        assert_eq!(product.id, ProductId::from("prod-1"));
        assert_eq!(product.name, "Library Stool");
        assert_eq!(
            product.image_url.as_deref(),
            Some("https://cdn.example/images/stool.jpg")
        );
        assert_eq!(product.additional_images.len(), 2);
        assert_eq!(product.price, 89.5);
        assert_eq!(product.discount_percentage, 15.0);
        assert_eq!(product.rating_count, 120);
        assert_eq!(product.tags, vec!["wood", "seating"]);
        assert_eq!(product.sizes, vec!["S", "M"]);
    }

    #[test]
    fn absent_optional_fields_decode_to_defaults() {
        let product: Product = serde_json::from_str(
            r#"{
                "_id": "prod-2",
                "name": "Bare Record",
                "price": 10,
                "description": "minimal record"
            }"#,
        )
        .unwrap();

        assert_eq!(product.image_url, None);
        assert!(product.additional_images.is_empty());
        assert_eq!(product.discount_percentage, 0.0);
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.rating_count, 0);
        assert!(product.tags.is_empty());
        assert!(product.sizes.is_empty());
    }

    #[test]
    fn list_decode_preserves_backend_order() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"_id": "c", "name": "C", "price": 1, "description": "c"},
                {"_id": "a", "name": "A", "price": 2, "description": "a"},
                {"_id": "b", "name": "B", "price": 3, "description": "b"}
            ]"#,
        )
        .unwrap();

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn image_slides_lead_with_primary_image() {
        let product: Product = serde_json::from_str(
            r#"{
                "_id": "prod-3",
                "name": "Armchair",
                "imageUrl": "primary.jpg",
                "additionalImages": ["second.jpg", "third.jpg"],
                "price": 1,
                "description": "chair"
            }"#,
        )
        .unwrap();

        assert_eq!(
            product.image_slides(),
            vec!["primary.jpg", "second.jpg", "third.jpg"]
        );
    }

    #[test]
    fn absent_additional_images_yield_a_single_slide() {
        let product: Product = serde_json::from_str(
            r#"{
                "_id": "prod-4",
                "name": "Lamp",
                "imageUrl": "lamp.jpg",
                "price": 1,
                "description": "lamp"
            }"#,
        )
        .unwrap();

        assert_eq!(product.image_slides(), vec!["lamp.jpg"]);
    }

    #[test]
    fn record_without_any_image_has_no_slides() {
        let product: Product = serde_json::from_str(
            r#"{"_id": "prod-5", "name": "Ghost", "price": 1, "description": "no assets"}"#,
        )
        .unwrap();

        assert!(product.image_slides().is_empty());
    }

    #[test]
    fn has_discount_only_for_strictly_positive_percentage() {
        let mut product: Product = serde_json::from_str(
            r#"{"_id": "prod-6", "name": "P", "price": 1, "description": "d"}"#,
        )
        .unwrap();

        assert!(!product.has_discount());
        product.discount_percentage = 15.0;
        assert!(product.has_discount());
    }
}
