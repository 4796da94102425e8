//! Fetch-state classification for the storefront page.

use shopfront_catalog::Product;

/// The three view states of the page.
///
/// `Loading` is the initial state while the query is in flight. `Failed`
/// carries a display message and renders with a retry control — a failure is
/// never left looking like a pending load. `Loaded` holds the records in
/// backend order; an empty list renders an explicit empty state, not the
/// loading message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

impl FetchState {
    /// Classify a resource read: `None` while the future is still pending.
    pub fn from_read(read: Option<Result<Vec<Product>, String>>) -> Self {
        match read {
            None => Self::Loading,
            Some(Ok(products)) => Self::Loaded(products),
            Some(Err(message)) => Self::Failed(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
