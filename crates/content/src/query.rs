//! The product projection query.
//!
//! One read-only query: every document of type `product`, projected to the
//! fields the storefront renders. Image asset references are dereferenced to
//! URLs by the backend as part of the projection, so the client never sees a
//! raw asset reference.

/// Query returning every product record, in backend order.
pub fn product_query() -> String {
    let fields = [
        "_id",
        "name",
        "\"imageUrl\": image.asset->url",
        "\"additionalImages\": images[].asset->url",
        "price",
        "description",
        "discountPercentage",
        "priceWithoutDiscount",
        "rating",
        "ratingCount",
        "tags",
        "sizes",
    ];
    format!("*[_type == \"product\"] {{{}}}", fields.join(", "))
}
