// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::DiagramMatcher;
use crate::diagram::{Diagram, RecipeType};
use crate::model::{AuxMode, Component};

type IndexKey = (RecipeType, Component);

/// Hash index from components to the diagrams registered for them.
///
/// Entries added with [`AuxMode::Ignore`] live in a separate index keyed by the component
/// without aux data, so they match every aux variant of the same base component.
#[derive(Debug, Default)]
pub struct ComponentDiagramMatcher {
    diagrams: Vec<Arc<Diagram>>,
    exact: HashMap<IndexKey, Vec<usize>>,
    ignoring_aux: HashMap<IndexKey, Vec<usize>>,
}

impl ComponentDiagramMatcher {
    pub fn builder() -> ComponentDiagramMatcherBuilder {
        ComponentDiagramMatcherBuilder::default()
    }

    /// Number of distinct diagrams registered, linked to a component or not.
    pub fn diagram_count(&self) -> usize {
        self.diagrams.len()
    }

    /// Number of `(recipe type, component) -> diagram` edges.
    pub fn edge_count(&self) -> usize {
        self.exact
            .values()
            .chain(self.ignoring_aux.values())
            .map(Vec::len)
            .sum()
    }
}

impl DiagramMatcher for ComponentDiagramMatcher {
    /// Diagrams linked to at least one component, in registration order.
    fn all(&self) -> Vec<Arc<Diagram>> {
        let linked: BTreeSet<usize> = self
            .exact
            .values()
            .chain(self.ignoring_aux.values())
            .flatten()
            .copied()
            .collect();
        linked
            .into_iter()
            .filter_map(|idx| self.diagrams.get(idx).cloned())
            .collect()
    }

    fn match_diagrams(&self, recipe_type: RecipeType, component: &Component) -> Vec<Arc<Diagram>> {
        let exact = self.exact.get(&(recipe_type, component.clone()));
        let ignoring = self
            .ignoring_aux
            .get(&(recipe_type, component.without_aux()));

        let mut indices: Vec<usize> = exact
            .into_iter()
            .chain(ignoring)
            .flatten()
            .copied()
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
pub struct ComponentDiagramMatcherBuilder {
    matcher: ComponentDiagramMatcher,
}

impl ComponentDiagramMatcherBuilder {
    /// Registers `diagram` and returns a sub-builder for the components that select it.
    ///
    /// Registering the same `Arc` again reuses its entry.
    pub fn add_diagram(&mut self, diagram: impl Into<Arc<Diagram>>) -> ComponentSubBuilder<'_> {
        let diagram = diagram.into();
        let diagrams = &mut self.matcher.diagrams;
        let index = match diagrams.iter().position(|known| Arc::ptr_eq(known, &diagram)) {
            Some(index) => index,
            None => {
                diagrams.push(diagram);
                diagrams.len() - 1
            }
        };
        ComponentSubBuilder {
            matcher: &mut self.matcher,
            index,
        }
    }

    pub fn build(self) -> ComponentDiagramMatcher {
        tracing::debug!(
            diagrams = self.matcher.diagram_count(),
            edges = self.matcher.edge_count(),
            "built component matcher"
        );
        self.matcher
    }
}

/// Associates components with one diagram. The aux mode is chosen at every call.
#[derive(Debug)]
pub struct ComponentSubBuilder<'a> {
    matcher: &'a mut ComponentDiagramMatcher,
    index: usize,
}

impl ComponentSubBuilder<'_> {
    pub fn add_component(
        &mut self,
        recipe_type: RecipeType,
        component: impl Into<Component>,
        mode: AuxMode,
    ) -> &mut Self {
        let component = component.into();
        let index = match mode {
            AuxMode::Respect => &mut self.matcher.exact,
            AuxMode::Ignore => &mut self.matcher.ignoring_aux,
        };
        let entry = index
            .entry((recipe_type, component.normalized(mode)))
            .or_default();
        if !entry.contains(&self.index) {
            entry.push(self.index);
        }
        self
    }

    /// Adds `component` under every lookup recipe type.
    pub fn add_component_all(&mut self, component: impl Into<Component>, mode: AuxMode) -> &mut Self {
        let component = component.into();
        for recipe_type in RecipeType::VALID {
            self.add_component(recipe_type, component.clone(), mode);
        }
        self
    }

    pub fn add_all_components<C>(
        &mut self,
        recipe_type: RecipeType,
        components: impl IntoIterator<Item = C>,
        mode: AuxMode,
    ) -> &mut Self
    where
        C: Into<Component>,
    {
        for component in components {
            self.add_component(recipe_type, component, mode);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::ComponentDiagramMatcher;
    use crate::diagram::RecipeType;
    use crate::matcher::test_support::{diagram, fluid, item, item_with_aux};
    use crate::matcher::DiagramMatcher;
    use crate::model::AuxMode;

    #[test]
    fn crafting_only_registration_is_not_a_usage() {
        let iron_diagram = diagram();
        let mut builder = ComponentDiagramMatcher::builder();
        builder.add_diagram(iron_diagram.clone()).add_component(
            RecipeType::Crafting,
            item("minecraft:iron_ingot"),
            AuxMode::Respect,
        );
        let matcher = builder.build();

        let crafting = matcher.match_diagrams(RecipeType::Crafting, &item("minecraft:iron_ingot"));
        assert_eq!(crafting.len(), 1);
        assert!(Arc::ptr_eq(&crafting[0], &iron_diagram));
        assert!(matcher
            .match_diagrams(RecipeType::Usage, &item("minecraft:iron_ingot"))
            .is_empty());
        assert!(matcher
            .match_diagrams(RecipeType::Crafting, &item("minecraft:gold_ingot"))
            .is_empty());
    }

    #[test]
    fn ignore_mode_matches_every_aux_variant() {
        let mut builder = ComponentDiagramMatcher::builder();
        builder.add_diagram(diagram()).add_component_all(
            item_with_aux("ic2:cell", "{charge:1}"),
            AuxMode::Ignore,
        );
        builder.add_diagram(diagram()).add_component(
            RecipeType::Usage,
            item_with_aux("ic2:cell", "{charge:1}"),
            AuxMode::Respect,
        );
        let matcher = builder.build();

        assert_eq!(
            matcher
                .match_diagrams(RecipeType::Usage, &item_with_aux("ic2:cell", "{charge:9}"))
                .len(),
            1
        );
        assert_eq!(
            matcher
                .match_diagrams(RecipeType::Usage, &item_with_aux("ic2:cell", "{charge:1}"))
                .len(),
            2
        );
        assert_eq!(
            matcher
                .match_diagrams(RecipeType::Crafting, &item("ic2:cell"))
                .len(),
            1
        );
    }

    #[test]
    fn results_keep_insertion_order_without_duplicates() {
        let first = diagram();
        let second = diagram();
        let mut builder = ComponentDiagramMatcher::builder();
        builder
            .add_diagram(first.clone())
            .add_component(RecipeType::Usage, fluid("water"), AuxMode::Respect)
            .add_component(RecipeType::Usage, fluid("water"), AuxMode::Ignore);
        builder
            .add_diagram(second.clone())
            .add_all_components(RecipeType::Usage, [fluid("water"), fluid("lava")], AuxMode::Respect);
        let matcher = builder.build();

        let water = matcher.match_diagrams(RecipeType::Usage, &fluid("water"));
        assert_eq!(water.len(), 2);
        assert!(Arc::ptr_eq(&water[0], &first));
        assert!(Arc::ptr_eq(&water[1], &second));
        assert_eq!(matcher.all().len(), 2);
    }

    #[test]
    fn same_diagram_registered_twice_is_listed_once() {
        let shared = diagram();
        let mut builder = ComponentDiagramMatcher::builder();
        builder.add_diagram(shared.clone()).add_component(
            RecipeType::Crafting,
            item("test:a"),
            AuxMode::Respect,
        );
        builder.add_diagram(shared.clone()).add_component(
            RecipeType::Crafting,
            item("test:a"),
            AuxMode::Respect,
        );
        let matcher = builder.build();

        let found = matcher.match_diagrams(RecipeType::Crafting, &item("test:a"));
        assert_eq!(found.len(), 1);
        assert!(Arc::ptr_eq(&found[0], &shared));
        assert_eq!(matcher.all().len(), 1);
        assert_eq!(matcher.diagram_count(), 1);
        assert_eq!(matcher.edge_count(), 1);
    }

    #[test]
    fn unlinked_diagrams_are_not_listed() {
        let linked = diagram();
        let mut builder = ComponentDiagramMatcher::builder();
        builder.add_diagram(diagram());
        builder
            .add_diagram(linked.clone())
            .add_component(RecipeType::Usage, fluid("water"), AuxMode::Ignore);
        let matcher = builder.build();

        let all = matcher.all();
        assert_eq!(all.len(), 1);
        assert!(Arc::ptr_eq(&all[0], &linked));
        assert_eq!(matcher.diagram_count(), 2);
    }
}
