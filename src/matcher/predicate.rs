// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::DiagramMatcher;
use crate::diagram::{Diagram, RecipeType};
use crate::model::Component;

/// Shared predicate handle. Clones of one handle are treated as the same predicate.
pub type DiagramPredicate = Arc<dyn Fn(RecipeType, &Component) -> bool + Send + Sync>;

pub fn predicate(
    f: impl Fn(RecipeType, &Component) -> bool + Send + Sync + 'static,
) -> DiagramPredicate {
    Arc::new(f)
}

struct PredicateEntry {
    predicate: DiagramPredicate,
    diagrams: Vec<usize>,
}

/// Evaluates every registered predicate per query.
#[derive(Default)]
pub struct PredicateDiagramMatcher {
    diagrams: Vec<Arc<Diagram>>,
    entries: Vec<PredicateEntry>,
}

impl fmt::Debug for PredicateDiagramMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateDiagramMatcher")
            .field("diagrams", &self.diagrams.len())
            .field("predicates", &self.entries.len())
            .finish()
    }
}

impl PredicateDiagramMatcher {
    pub fn builder() -> PredicateDiagramMatcherBuilder {
        PredicateDiagramMatcherBuilder::default()
    }

    pub fn predicate_count(&self) -> usize {
        self.entries.len()
    }
}

impl DiagramMatcher for PredicateDiagramMatcher {
    /// Diagrams registered under at least one predicate, in registration order.
    fn all(&self) -> Vec<Arc<Diagram>> {
        let linked: BTreeSet<usize> = self
            .entries
            .iter()
            .flat_map(|entry| entry.diagrams.iter().copied())
            .collect();
        linked
            .into_iter()
            .filter_map(|idx| self.diagrams.get(idx).cloned())
            .collect()
    }

    fn match_diagrams(&self, recipe_type: RecipeType, component: &Component) -> Vec<Arc<Diagram>> {
        let mut indices: Vec<usize> = self
            .entries
            .iter()
            .filter(|entry| (entry.predicate)(recipe_type, component))
            .flat_map(|entry| entry.diagrams.iter().copied())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
            .into_iter()
            .filter_map(|idx| self.diagrams.get(idx).cloned())
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct PredicateDiagramMatcherBuilder {
    matcher: PredicateDiagramMatcher,
}

impl PredicateDiagramMatcherBuilder {
    /// Registers `diagram` under each of `predicates`. Registering the same `Arc` again reuses
    /// its entry.
    pub fn add_diagram(
        &mut self,
        predicates: impl IntoIterator<Item = DiagramPredicate>,
        diagram: impl Into<Arc<Diagram>>,
    ) -> &mut Self {
        let diagram = diagram.into();
        let diagrams = &mut self.matcher.diagrams;
        let index = match diagrams.iter().position(|known| Arc::ptr_eq(known, &diagram)) {
            Some(index) => index,
            None => {
                diagrams.push(diagram);
                diagrams.len() - 1
            }
        };
        for predicate in predicates {
            match self
                .matcher
                .entries
                .iter_mut()
                .find(|entry| Arc::ptr_eq(&entry.predicate, &predicate))
            {
                Some(entry) => {
                    if !entry.diagrams.contains(&index) {
                        entry.diagrams.push(index);
                    }
                }
                None => self.matcher.entries.push(PredicateEntry {
                    predicate,
                    diagrams: vec![index],
                }),
            }
        }
        self
    }

    pub fn build(self) -> PredicateDiagramMatcher {
        tracing::debug!(
            diagrams = self.matcher.diagrams.len(),
            predicates = self.matcher.entries.len(),
            "built predicate matcher"
        );
        self.matcher
    }
}
