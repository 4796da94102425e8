//! The full product grid.

use leptos::*;

use shopfront_catalog::{ExpansionState, Product};

use super::card::ProductCard;

/// One card per fetched record, in backend order, keyed by product id.
#[component]
pub fn ProductGrid(products: Vec<Product>, expanded: RwSignal<ExpansionState>) -> impl IntoView {
    view! {
        <div class="product-grid">
            <For
                each=move || products.clone()
                key=|product| product.id.clone()
                children=move |product| view! { <ProductCard product=product expanded=expanded/> }
            />
        </div>
    }
}
