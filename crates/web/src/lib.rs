//! `shopfront-web`
//!
//! **Responsibility:** the single storefront page — wire one fetch to the
//! rendered view.
//!
//! The page has exactly three states: loading, failed (with a retry
//! control), and loaded (hero carousel + card grid). Fetch-state
//! classification lives in [`state`] and compiles on every target; the
//! components only exist on `wasm32`, which is how the crate ships.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point; called automatically when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::StorefrontPage);
}
