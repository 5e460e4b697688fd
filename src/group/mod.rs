// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Binding of a matcher to the host overlay's lookup protocol.
//!
//! A [`DiagramGroup`] answers lookups with a [`LoadedDiagrams`] page set. The loaded set owns the
//! animation clock and turns clicks and key presses into [`Interaction`]s; the host adapter
//! ([`HostGui`]) supplies the geometry needed to translate screen coordinates.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::diagram::{Diagram, DiagramState, DrawContext, Interaction, Modifiers, RecipeType};
use crate::game::GameDatabase;
use crate::layout::grid::Point;
use crate::matcher::DiagramMatcher;
use crate::model::{Component, FluidComponent, FluidStack, ItemComponent, ItemStack, Tooltip};
use crate::render::DrawTarget;

mod info;

pub use info::{DiagramFilter, DiagramGroupInfo, DiagramGroupInfoBuilder};

/// What the host asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    /// A handler id: the group's own id lists everything, custom ids run custom behavior.
    Id(String),
    Item(ItemStack),
    Fluid(FluidStack),
}

/// Host key bindings that trigger interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKey {
    Recipe,
    Usage,
    Bookmark,
}

impl HostKey {
    pub fn recipe_type(self) -> RecipeType {
        match self {
            Self::Recipe => RecipeType::Crafting,
            Self::Usage => RecipeType::Usage,
            Self::Bookmark => RecipeType::Bookmark,
        }
    }
}

/// Narrow view of the host GUI, implemented by the host integration layer.
pub trait HostGui {
    /// Mouse position in screen pixels.
    fn mouse_position(&self) -> Point;

    /// Top-left corner of the recipe window.
    fn gui_origin(&self) -> Point;

    /// Offset of diagram `index` inside the recipe window.
    fn recipe_offset(&self, index: usize) -> Point;

    fn scroll_offset(&self) -> Point {
        Point::ORIGIN
    }
}

/// Mouse position relative to diagram `index`.
pub fn relative_mouse(gui: &dyn HostGui, index: usize) -> Point {
    let mouse = gui.mouse_position();
    let origin = gui.gui_origin() + gui.recipe_offset(index);
    mouse - origin + gui.scroll_offset()
}

pub type DiagramSupplier = Arc<dyn Fn() -> Vec<Arc<Diagram>> + Send + Sync>;

/// A registered diagram feature: metadata plus the matcher answering its lookups.
#[derive(Clone)]
pub struct DiagramGroup {
    info: Arc<DiagramGroupInfo>,
    matcher: Arc<dyn DiagramMatcher>,
    custom_behavior: BTreeMap<String, DiagramSupplier>,
}

impl fmt::Debug for DiagramGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramGroup")
            .field("info", &self.info)
            .field("custom_behavior", &self.custom_behavior.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl DiagramGroup {
    pub fn new(info: DiagramGroupInfo, matcher: impl DiagramMatcher + 'static) -> Self {
        Self {
            info: Arc::new(info),
            matcher: Arc::new(matcher),
            custom_behavior: BTreeMap::new(),
        }
    }

    /// Answers lookups for `id` with `supplier`. Custom ids are checked before anything else;
    /// prefix them with the group id to stay clear of other handlers.
    pub fn with_custom_behavior(
        mut self,
        id: impl Into<String>,
        supplier: impl Fn() -> Vec<Arc<Diagram>> + Send + Sync + 'static,
    ) -> Self {
        self.custom_behavior.insert(id.into(), Arc::new(supplier));
        self
    }

    pub fn info(&self) -> &DiagramGroupInfo {
        &self.info
    }

    pub fn matcher(&self) -> &dyn DiagramMatcher {
        self.matcher.as_ref()
    }

    pub fn load(&self, query: &LookupQuery, recipe_type: RecipeType, config: &Config) -> LoadedDiagrams {
        let diagrams = match query {
            LookupQuery::Id(id) => match self.custom_behavior.get(id) {
                Some(supplier) => supplier(),
                None if id == self.info.group_id().as_str() => self.list_all(config),
                None => Vec::new(),
            },
            LookupQuery::Item(stack) => {
                let component = if self.info.ignore_aux() {
                    ItemComponent::create(stack)
                } else {
                    ItemComponent::create_with_aux(stack)
                };
                self.match_component(recipe_type, component.map(Component::from))
            }
            LookupQuery::Fluid(stack) => {
                let component = if self.info.ignore_aux() {
                    FluidComponent::create(stack)
                } else {
                    FluidComponent::create_with_aux(stack)
                };
                self.match_component(recipe_type, component.map(Component::from))
            }
        };

        tracing::debug!(
            group = %self.info.group_id(),
            ?recipe_type,
            diagrams = diagrams.len(),
            "loaded diagrams"
        );
        LoadedDiagrams {
            info: Arc::clone(&self.info),
            diagrams,
            state: DiagramState::new(),
        }
    }

    /// Host "recipe handler" entry point.
    pub fn crafting_handler(&self, query: &LookupQuery, config: &Config) -> LoadedDiagrams {
        self.load(query, RecipeType::Crafting, config)
    }

    /// Host "usage handler" entry point.
    pub fn usage_handler(&self, query: &LookupQuery, config: &Config) -> LoadedDiagrams {
        self.load(query, RecipeType::Usage, config)
    }

    fn list_all(&self, config: &Config) -> Vec<Arc<Diagram>> {
        let all = self.matcher.all();
        if config.show_empty_diagrams {
            return all;
        }
        all.into_iter()
            .filter(|diagram| !diagram.is_empty() && !self.info.is_empty_diagram(diagram))
            .collect()
    }

    fn match_component(&self, recipe_type: RecipeType, component: Option<Component>) -> Vec<Arc<Diagram>> {
        match component {
            Some(component) => self.matcher.match_diagrams(recipe_type, &component),
            None => Vec::new(),
        }
    }
}

/// The diagrams answering one lookup, plus the clock that animates them.
#[derive(Debug, Clone)]
pub struct LoadedDiagrams {
    info: Arc<DiagramGroupInfo>,
    diagrams: Vec<Arc<Diagram>>,
    state: DiagramState,
}

impl LoadedDiagrams {
    pub fn info(&self) -> &DiagramGroupInfo {
        &self.info
    }

    pub fn diagrams(&self) -> &[Arc<Diagram>] {
        &self.diagrams
    }

    pub fn num_diagrams(&self) -> usize {
        self.diagrams.len()
    }

    pub fn num_pages(&self) -> usize {
        let per_page = self.info.diagrams_per_page();
        (self.diagrams.len() + per_page - 1) / per_page
    }

    pub fn diagram(&self, index: usize) -> Option<&Diagram> {
        self.diagrams.get(index).map(Arc::as_ref)
    }

    pub fn state(&self) -> &DiagramState {
        &self.state
    }

    pub fn is_visible(&self, config: &Config, modifiers: Modifiers) -> bool {
        config.visibility(&self.info).is_shown(modifiers)
    }

    /// Per-frame update from the host.
    pub fn on_update(&mut self, modifiers: Modifiers, config: &Config) {
        self.state.tick(modifiers, config);
    }

    pub fn mouse_scrolled(&mut self, delta: i64) {
        self.state.scroll(delta);
    }

    /// Draw context over this set's clock.
    pub fn context<'a>(
        &'a self,
        config: &'a Config,
        database: &'a dyn GameDatabase,
        modifiers: Modifiers,
    ) -> DrawContext<'a> {
        DrawContext::new(&self.state, config, database, modifiers)
    }

    pub fn draw_background(&self, index: usize, ctx: &DrawContext<'_>, target: &mut dyn DrawTarget) {
        if let Some(diagram) = self.diagram(index) {
            diagram.draw_background(ctx, target);
        }
    }

    pub fn draw_foreground(
        &self,
        index: usize,
        ctx: &DrawContext<'_>,
        target: &mut dyn DrawTarget,
        mouse: Option<Point>,
    ) {
        if let Some(diagram) = self.diagram(index) {
            diagram.draw_foreground(ctx, target, mouse);
        }
    }

    pub fn tooltip(&self, index: usize, ctx: &DrawContext<'_>, mouse: Point) -> Option<Tooltip> {
        let tooltip = self.diagram(index)?.find_interactable(mouse)?.tooltip(ctx);
        (!tooltip.is_empty()).then_some(tooltip)
    }

    pub fn draw_tooltip(
        &self,
        index: usize,
        ctx: &DrawContext<'_>,
        target: &mut dyn DrawTarget,
        mouse: Point,
        screen_mouse: Point,
    ) {
        if let Some(diagram) = self.diagram(index) {
            diagram.draw_tooltip(ctx, target, mouse, screen_mouse);
        }
    }

    /// Button 0 looks up crafting, button 1 usage; other buttons do nothing.
    pub fn mouse_clicked(
        &self,
        index: usize,
        ctx: &DrawContext<'_>,
        button: u8,
        mouse: Point,
    ) -> Option<Interaction> {
        let recipe_type = match button {
            0 => RecipeType::Crafting,
            1 => RecipeType::Usage,
            _ => return None,
        };
        self.diagram(index)?.interact(ctx, mouse, recipe_type)
    }

    pub fn key_typed(
        &self,
        index: usize,
        ctx: &DrawContext<'_>,
        key: HostKey,
        mouse: Point,
    ) -> Option<Interaction> {
        self.diagram(index)?.interact(ctx, mouse, key.recipe_type())
    }
}

#[cfg(test)]
mod tests;
