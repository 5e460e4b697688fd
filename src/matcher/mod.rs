// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Indexes answering "which diagrams apply to this lookup?".
//!
//! Every matcher is frozen once built; queries only read. Results are de-duplicated by diagram
//! identity and keep the order in which diagrams were added.

use std::sync::Arc;

use crate::diagram::{Diagram, RecipeType};
use crate::model::Component;

mod component;
mod custom;
mod predicate;

pub use component::{ComponentDiagramMatcher, ComponentDiagramMatcherBuilder, ComponentSubBuilder};
pub use custom::{CustomDiagramMatcher, DynamicDiagramMatcher, MatchFn};
pub use predicate::{
    predicate, DiagramPredicate, PredicateDiagramMatcher, PredicateDiagramMatcherBuilder,
};

/// A frozen `(RecipeType, Component) -> diagrams` index.
pub trait DiagramMatcher: Send + Sync {
    /// Every diagram reachable through this matcher's index.
    ///
    /// Empty means "listing is unsupported", not "no diagrams exist".
    fn all(&self) -> Vec<Arc<Diagram>>;

    fn match_diagrams(&self, recipe_type: RecipeType, component: &Component) -> Vec<Arc<Diagram>>;
}

/// Drops repeated diagrams (by pointer), keeping first occurrences in order.
pub(crate) fn dedup_by_identity(diagrams: impl IntoIterator<Item = Arc<Diagram>>) -> Vec<Arc<Diagram>> {
    let mut out: Vec<Arc<Diagram>> = Vec::new();
    for diagram in diagrams {
        if !out.iter().any(|seen| Arc::ptr_eq(seen, &diagram)) {
            out.push(diagram);
        }
    }
    out
}
