// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::Arc;

use super::{dedup_by_identity, DiagramMatcher};
use crate::diagram::{Diagram, RecipeType};
use crate::model::Component;

pub type MatchFn = Arc<dyn Fn(RecipeType, &Component) -> Vec<Arc<Diagram>> + Send + Sync>;

/// A precomputed diagram set with caller-supplied lookup logic.
pub struct CustomDiagramMatcher {
    diagrams: Vec<Arc<Diagram>>,
    matcher: MatchFn,
}

impl fmt::Debug for CustomDiagramMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDiagramMatcher")
            .field("diagrams", &self.diagrams.len())
            .finish_non_exhaustive()
    }
}

impl CustomDiagramMatcher {
    pub fn new(
        diagrams: Vec<Arc<Diagram>>,
        matcher: impl Fn(RecipeType, &Component) -> Vec<Arc<Diagram>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            diagrams,
            matcher: Arc::new(matcher),
        }
    }
}

impl DiagramMatcher for CustomDiagramMatcher {
    fn all(&self) -> Vec<Arc<Diagram>> {
        self.diagrams.clone()
    }

    fn match_diagrams(&self, recipe_type: RecipeType, component: &Component) -> Vec<Arc<Diagram>> {
        dedup_by_identity((self.matcher)(recipe_type, component))
    }
}

/// Generates diagrams on demand; there is no diagram set to list.
pub struct DynamicDiagramMatcher {
    matcher: MatchFn,
}

impl fmt::Debug for DynamicDiagramMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicDiagramMatcher").finish_non_exhaustive()
    }
}

impl DynamicDiagramMatcher {
    pub fn new(
        matcher: impl Fn(RecipeType, &Component) -> Vec<Arc<Diagram>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            matcher: Arc::new(matcher),
        }
    }
}

impl DiagramMatcher for DynamicDiagramMatcher {
    fn all(&self) -> Vec<Arc<Diagram>> {
        Vec::new()
    }

    fn match_diagrams(&self, recipe_type: RecipeType, component: &Component) -> Vec<Arc<Diagram>> {
        dedup_by_identity((self.matcher)(recipe_type, component))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{CustomDiagramMatcher, DynamicDiagramMatcher};
    use crate::diagram::{Diagram, RecipeType};
    use crate::matcher::test_support::{diagram, fluid, item};
    use crate::matcher::DiagramMatcher;

    #[test]
    fn dynamic_all_is_always_empty() {
        let matcher = DynamicDiagramMatcher::new(|_, _| vec![Arc::new(Diagram::builder().build())]);
        for _ in 0..3 {
            assert_eq!(
                matcher
                    .match_diagrams(RecipeType::Usage, &fluid("water"))
                    .len(),
                1
            );
        }
        assert!(matcher.all().is_empty());
    }

    #[test]
    fn custom_reuses_its_precomputed_set() {
        let diagrams = vec![diagram(), diagram()];
        let lookup = diagrams.clone();
        let matcher = CustomDiagramMatcher::new(diagrams, move |recipe_type, component| {
            if recipe_type == RecipeType::Usage && component.raw_id() == "test:a" {
                vec![lookup[1].clone(), lookup[1].clone()]
            } else {
                Vec::new()
            }
        });

        assert_eq!(matcher.all().len(), 2);
        let found = matcher.match_diagrams(RecipeType::Usage, &item("test:a"));
        assert_eq!(found.len(), 1);
        assert!(Arc::ptr_eq(&found[0], &matcher.all()[1]));
        assert!(matcher
            .match_diagrams(RecipeType::Crafting, &item("test:a"))
            .is_empty());
    }
}
