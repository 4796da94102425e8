//! Hero carousel of the first few records.

use leptos::*;

use shopfront_catalog::{ExpansionState, Product, display};
use shopfront_content::image;

use super::carousel::{Carousel, CarouselOptions};

/// The featured strip: first `min(5, N)` products, centered active slide,
/// looping autoplay.
#[component]
pub fn FeaturedCarousel(products: Vec<Product>, expanded: RwSignal<ExpansionState>) -> impl IntoView {
    let featured: Vec<Product> = display::featured(&products).to_vec();
    let count = featured.len();
    let options = CarouselOptions {
        spacing: 24,
        slides_per_view: 2,
        centered: true,
        looped: true,
        autoplay_ms: 3000,
    };

    view! {
        <section class="featured">
            <Carousel
                options=options
                count=count
                render_slide=move |index| {
                    let product = featured[index].clone();
                    view! { <FeaturedSlide product=product expanded=expanded/> }
                }
            />
        </section>
    }
}

#[component]
fn FeaturedSlide(product: Product, expanded: RwSignal<ExpansionState>) -> impl IntoView {
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

    view! {
        <article class="featured-slide">
            {product
                .image_url
                .as_ref()
                .map(|url| view! { <img src=image::sized(url, 800, 400) alt=product.name.clone()/> })}
            <h2>{product.name.clone()}</h2>
            <p class="description">
                {move || if is_expanded.get() { description.clone() } else { teaser.clone() }}
            </p>
            <button class="toggle" on:click=toggle>
                {move || if is_expanded.get() { "Show less" } else { "Read more" }}
            </button>
        </article>
    }
}
