//! The storefront page.

use leptos::*;

use shopfront_catalog::{ExpansionMode, ExpansionState};
use shopfront_content::{ContentClient, ContentConfig};

use crate::components::{FeaturedCarousel, ProductGrid};
use crate::state::FetchState;

// Static connection parameters, baked into the view.
const PROJECT_ID: &str = "cturxqmc";
const DATASET: &str = "production";

fn content_client() -> ContentClient {
    ContentClient::new(ContentConfig::new(PROJECT_ID, DATASET))
}

/// Single-page storefront view.
#[component]
pub fn StorefrontPage() -> impl IntoView {
    // One fetch per mount. The resource is owned by this component's reactive
    // scope, so a response arriving after unmount is dropped with it.
    let products = create_local_resource(
        || (),
        |_| async {
            match content_client().fetch_products().await {
                Ok(products) => Ok(products),
                Err(error) => {
                    tracing::warn!(%error, "product fetch failed");
                    Err(error.to_string())
                }
            }
        },
    );

    // Shared across the whole page: expanding one description collapses any
    // other. See ExpansionMode for the per-card alternative.
    let expanded = create_rw_signal(ExpansionState::new(ExpansionMode::Shared));

    view! {
        <div class="storefront">
            <h1>"Our Exclusive Products"</h1>
            {move || match FetchState::from_read(products.get()) {
                FetchState::Loading => {
                    view! { <p class="loading">"Loading products..."</p> }.into_view()
                }
                FetchState::Failed(message) => {
                    view! {
                        <div class="fetch-error">
                            <p>"Could not load products: " {message}</p>
                            <button on:click=move |_| products.refetch()>"Retry"</button>
                        </div>
                    }
                    .into_view()
                }
                FetchState::Loaded(list) if list.is_empty() => {
                    view! { <p class="empty">"No products found."</p> }.into_view()
                }
                FetchState::Loaded(list) => {
                    view! {
                        <FeaturedCarousel products=list.clone() expanded=expanded/>
                        <ProductGrid products=list expanded=expanded/>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
