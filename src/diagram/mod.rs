// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagrams: layouts instantiated with concrete components.
//!
//! A [`DiagramBuilder`] collects layouts, then fills their slots; [`DiagramBuilder::build`]
//! consumes it and freezes the result into an immutable [`Diagram`]. Hit-testing walks the
//! diagram's interactables front to back; drawing walks them back to front.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::layout::grid::{Dimension, Point};
use crate::layout::{far_corner, Layout};
use crate::model::{DisplayComponent, SlotGroupKey, SlotKey};
use crate::render::DrawTarget;

mod builder;
pub mod interactable;
pub mod state;

pub use builder::{DiagramBuilder, SlotGroupAutoSubBuilder, SlotGroupManualSubBuilder};
pub use interactable::{
    all_diagrams_button, CustomAction, CustomInteractable, CustomInteractableBuilder, Interactable,
    Interaction, InteractionFn, InteractiveComponentGroup, RecipeType,
};
pub use state::{cycle_index, DiagramState, DrawContext, Modifiers, TICKS_PER_CYCLE};


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("no added layout has slot `{0}`")]
    UnknownSlot(SlotKey),
    #[error("no added layout has slot group `{0}`")]
    UnknownSlotGroup(SlotGroupKey),
    #[error("slot `{0}` is already filled")]
    SlotAlreadyFilled(SlotKey),
    #[error("cell ({x}, {y}) of slot group `{key}` is already filled")]
    CellAlreadyFilled { key: SlotGroupKey, x: i32, y: i32 },
    #[error("cell ({x}, {y}) is outside slot group `{key}` ({width}x{height})")]
    CellOutOfBounds {
        key: SlotGroupKey,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    #[error("slot group `{key}` is full ({capacity} slots)")]
    SlotGroupFull { key: SlotGroupKey, capacity: usize },
    #[error("slot `{0}` is defined by more than one layout")]
    DuplicateSlotKey(SlotKey),
    #[error("slot group `{0}` is defined by more than one layout")]
    DuplicateSlotGroupKey(SlotGroupKey),
    #[error("layouts must be added before any slot is filled")]
    LayoutAfterFill,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InsertionKey {
    Slot(SlotKey),
    SlotGroup(SlotGroupKey),
}

/// Multiset of the keys that received insertions while building a diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotInsertions {
    counts: BTreeMap<InsertionKey, usize>,
    total: usize,
}

impl SlotInsertions {
    pub(crate) fn add(&mut self, key: InsertionKey) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, key: &InsertionKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn slot_count(&self, key: &SlotKey) -> usize {
        self.count(&InsertionKey::Slot(key.clone()))
    }

    pub fn slot_group_count(&self, key: &SlotGroupKey) -> usize {
        self.count(&InsertionKey::SlotGroup(key.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InsertionKey, usize)> + '_ {
        self.counts.iter().map(|(key, count)| (key, *count))
    }
}

pub type EmptyPredicate = Arc<dyn Fn(&SlotInsertions) -> bool + Send + Sync>;

/// Flags a diagram as empty when fewer than `min` slots were filled.
pub fn empty_if_fewer_than(min: usize) -> EmptyPredicate {
    Arc::new(move |insertions: &SlotInsertions| insertions.total() < min)
}

/// An immutable, fully laid out diagram page.
#[derive(Debug, Clone)]
pub struct Diagram {
    layouts: Vec<Layout>,
    interactables: Vec<Interactable>,
    insertions: SlotInsertions,
    empty: bool,
}

impl Diagram {
    pub fn builder() -> DiagramBuilder {
        DiagramBuilder::new()
    }

    /// Layouts that made it into the diagram (optional ones only when filled).
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// Front to back: inserted components and custom interactables, layout interactables,
    /// then bare slots.
    pub fn interactables(&self) -> &[Interactable] {
        &self.interactables
    }

    pub fn insertions(&self) -> &SlotInsertions {
        &self.insertions
    }

    pub fn filled_slot_count(&self) -> usize {
        self.insertions.total()
    }

    /// Result of the empty predicate, evaluated once at build time.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn components(&self) -> impl Iterator<Item = &DisplayComponent> + '_ {
        self.interactables
            .iter()
            .flat_map(|interactable| interactable.components().iter())
    }

    pub fn dimension(&self) -> Dimension {
        let mut dimension = self
            .layouts
            .iter()
            .map(Layout::dimension)
            .fold(Dimension::ZERO, Dimension::max);
        for interactable in &self.interactables {
            dimension = dimension.max(far_corner(interactable.position(), interactable.dimension()));
        }
        dimension
    }

    /// First interactable under `point`.
    pub fn find_interactable(&self, point: Point) -> Option<&Interactable> {
        self.interactables
            .iter()
            .find(|interactable| interactable.contains(point))
    }

    pub fn draw_background(&self, ctx: &DrawContext<'_>, target: &mut dyn DrawTarget) {
        for layout in &self.layouts {
            layout.draw(target);
        }
        for interactable in self.interactables.iter().rev() {
            interactable.draw(ctx, target);
        }
    }

    /// Hover highlight for whatever sits under `mouse`.
    pub fn draw_foreground(
        &self,
        _ctx: &DrawContext<'_>,
        target: &mut dyn DrawTarget,
        mouse: Option<Point>,
    ) {
        if let Some(hovered) = mouse.and_then(|mouse| self.find_interactable(mouse)) {
            hovered.draw_overlay(target);
        }
    }

    /// Draws the tooltip of the interactable under `mouse` (diagram-local), placed at
    /// `screen_mouse`.
    pub fn draw_tooltip(
        &self,
        ctx: &DrawContext<'_>,
        target: &mut dyn DrawTarget,
        mouse: Point,
        screen_mouse: Point,
    ) {
        if let Some(hovered) = self.find_interactable(mouse) {
            hovered.draw_tooltip(ctx, target, screen_mouse);
        }
    }

    pub fn interact(
        &self,
        ctx: &DrawContext<'_>,
        mouse: Point,
        recipe_type: RecipeType,
    ) -> Option<Interaction> {
        self.find_interactable(mouse)?.interact(ctx, recipe_type)
    }
}
