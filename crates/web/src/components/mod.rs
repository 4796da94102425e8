//! View components for the storefront page.

pub mod card;
pub mod carousel;
pub mod featured;
pub mod grid;

pub use card::ProductCard;
pub use carousel::{Carousel, CarouselOptions};
pub use featured::FeaturedCarousel;
pub use grid::ProductGrid;
