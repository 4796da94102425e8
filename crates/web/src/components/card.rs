//! One product card in the full grid.

use leptos::*;

use shopfront_catalog::{ExpansionState, Product, display};
use shopfront_content::image;

use super::carousel::{Carousel, CarouselOptions};

/// A grid card: per-card image carousel, name, teaser with expand toggle,
/// price, discount badge, rating, tags, sizes, and an inert Add to Cart
/// control.
#[component]
pub fn ProductCard(product: Product, expanded: RwSignal<ExpansionState>) -> impl IntoView {
    let slides: Vec<String> = product
        .image_slides()
        .into_iter()
        .map(str::to_string)
        .collect();
    let slide_count = slides.len();
    let slides = store_value(slides);
    let name = product.name.clone();

    let is_expanded = create_memo({
        let id = product.id.clone();
        move |_| expanded.with(|state| state.is_expanded(&id))
    });
    let toggle = {
        let id = product.id.clone();
        move |_| expanded.update(|state| state.toggle(&id))
    };
    let teaser = display::teaser(&product.description);
    let description = product.description.clone();
    let badge = display::discount_badge(&product);
    let rating = display::rating_summary(&product);

    view! {
        <article class="product-card">
            <Carousel
                options=CarouselOptions {
                    spacing: 0,
                    slides_per_view: 1,
                    centered: false,
                    looped: true,
                    autoplay_ms: 3000,
                }
                count=slide_count
                render_slide=move |index| {
                    let url = slides.with_value(|s| s[index].clone());
                    view! { <img src=image::sized(&url, 400, 400) alt=name.clone()/> }
                }
            />
            <div class="card-body">
                <h3>{product.name.clone()}</h3>
                <p class="description">
                    {move || if is_expanded.get() { description.clone() } else { teaser.clone() }}
                </p>
                <button class="toggle" on:click=toggle>
                    {move || if is_expanded.get() { "Show less" } else { "Read more" }}
                </button>
                <div class="price-row">
                    <span class="price">{format!("${}", product.price)}</span>
                    {badge.map(|text| view! { <span class="discount">{text}</span> })}
                </div>
                <div class="rating">{rating}</div>
                {(!product.tags.is_empty())
                    .then(|| view! {
                        <ul class="tags">
                            {product
                                .tags
                                .iter()
                                .map(|tag| view! { <li class="tag">{tag.clone()}</li> })
                                .collect_view()}
                        </ul>
                    })}
                {(!product.sizes.is_empty())
                    .then(|| view! {
                        <ul class="sizes">
                            {product
                                .sizes
                                .iter()
                                .map(|size| view! { <li class="size">{size.clone()}</li> })
                                .collect_view()}
                        </ul>
                    })}
            </div>
            <button class="add-to-cart">"Add to Cart"</button>
        </article>
    }
}
