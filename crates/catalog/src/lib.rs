//! `shopfront-catalog` — product records and presentation rules.
//!
//! This crate contains **pure domain** logic (no HTTP, no UI framework):
//! the externally-sourced [`Product`] record, the rules that shape it for
//! display, and the description-expansion state machine.

pub mod display;
pub mod expansion;
pub mod id;
pub mod product;

pub use display::{FEATURED_LIMIT, TEASER_CHARS, discount_badge, featured, rating_summary, teaser};
pub use expansion::{ExpansionMode, ExpansionState};
pub use id::ProductId;
pub use product::Product;
