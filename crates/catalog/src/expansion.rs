//! Description-expansion state for the storefront view.
//!
//! The shipped view keeps a single expanded description shared across the
//! whole page: expanding one card collapses any other. Independent per-card
//! expansion is supported as well; the caller picks a policy at
//! construction.

use std::collections::HashSet;

use crate::id::ProductId;

/// Which expansion policy the view runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionMode {
    /// At most one description expanded across the entire view.
    Shared,
    /// Each card expands and collapses independently.
    PerCard,
}

/// Tracks which product descriptions are currently expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionState {
    Shared(Option<ProductId>),
    PerCard(HashSet<ProductId>),
}

impl ExpansionState {
    pub fn new(mode: ExpansionMode) -> Self {
        match mode {
            ExpansionMode::Shared => Self::Shared(None),
            ExpansionMode::PerCard => Self::PerCard(HashSet::new()),
        }
    }

    /// Expand `id` if collapsed, collapse it if expanded.
    ///
    /// In [`ExpansionMode::Shared`] expanding also collapses whichever
    /// product was expanded before.
    pub fn toggle(&mut self, id: &ProductId) {
        match self {
            Self::Shared(current) => {
                if current.as_ref() == Some(id) {
                    *current = None;
                } else {
                    *current = Some(id.clone());
                }
            }
            Self::PerCard(expanded) => {
                if !expanded.remove(id) {
                    expanded.insert(id.clone());
                }
            }
        }
    }

    pub fn is_expanded(&self, id: &ProductId) -> bool {
        match self {
            Self::Shared(current) => current.as_ref() == Some(id),
            Self::PerCard(expanded) => expanded.contains(id),
        }
    }

    /// Number of descriptions currently expanded.
    pub fn expanded_count(&self) -> usize {
        match self {
            Self::Shared(current) => usize::from(current.is_some()),
            Self::PerCard(expanded) => expanded.len(),
        }
    }
}
