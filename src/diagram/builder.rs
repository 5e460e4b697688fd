// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use super::{
    BuildError, Diagram, EmptyPredicate, InsertionKey, Interactable, InteractiveComponentGroup,
    SlotInsertions,
};
use crate::layout::{Layout, Slot};
use crate::model::{DisplayComponent, SlotGroupKey, SlotKey};

type Components = SmallVec<[DisplayComponent; 1]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Accumulating,
    Filling,
}

#[derive(Debug, Clone)]
struct LayoutEntry {
    layout: Layout,
    optional: bool,
}

/// Per slot group fill state: which cells are taken and where auto-fill resumes.
#[derive(Debug, Clone)]
struct GroupFill {
    filled: Vec<bool>,
    cursor: usize,
}

/// Fills layouts with components and freezes the result into a [`Diagram`].
///
/// Layouts are added first; the first insertion moves the builder into its filling phase,
/// after which adding layouts is an error. [`DiagramBuilder::build`] consumes the builder.
pub struct DiagramBuilder {
    phase: Phase,
    layouts: Vec<LayoutEntry>,
    slot_owners: BTreeMap<SlotKey, usize>,
    group_owners: BTreeMap<SlotGroupKey, usize>,
    interactables: Vec<Interactable>,
    filled_slots: BTreeSet<SlotKey>,
    group_fills: BTreeMap<SlotGroupKey, GroupFill>,
    insertions: SlotInsertions,
    empty_predicate: EmptyPredicate,
}

impl fmt::Debug for DiagramBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramBuilder")
            .field("phase", &self.phase)
            .field("layouts", &self.layouts.len())
            .field("interactables", &self.interactables.len())
            .field("insertions", &self.insertions.total())
            .finish_non_exhaustive()
    }
}

impl Default for DiagramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramBuilder {
    pub fn new() -> Self {
        Self {
            phase: Phase::Accumulating,
            layouts: Vec::new(),
            slot_owners: BTreeMap::new(),
            group_owners: BTreeMap::new(),
            interactables: Vec::new(),
            filled_slots: BTreeSet::new(),
            group_fills: BTreeMap::new(),
            insertions: SlotInsertions::default(),
            empty_predicate: Arc::new(|insertions: &SlotInsertions| insertions.is_empty()),
        }
    }

    pub fn add_layout(&mut self, layout: &Layout) -> Result<&mut Self, BuildError> {
        self.push_layout(layout, false)?;
        Ok(self)
    }

    pub fn add_all_layouts<'a>(
        &mut self,
        layouts: impl IntoIterator<Item = &'a Layout>,
    ) -> Result<&mut Self, BuildError> {
        for layout in layouts {
            self.push_layout(layout, false)?;
        }
        Ok(self)
    }

    /// Adds a layout that only shows up in the diagram if one of its slots gets filled.
    pub fn add_optional_layout(&mut self, layout: &Layout) -> Result<&mut Self, BuildError> {
        self.push_layout(layout, true)?;
        Ok(self)
    }

    pub fn add_all_optional_layouts<'a>(
        &mut self,
        layouts: impl IntoIterator<Item = &'a Layout>,
    ) -> Result<&mut Self, BuildError> {
        for layout in layouts {
            self.push_layout(layout, true)?;
        }
        Ok(self)
    }

    fn push_layout(&mut self, layout: &Layout, optional: bool) -> Result<(), BuildError> {
        if self.phase != Phase::Accumulating {
            return Err(BuildError::LayoutAfterFill);
        }
        if let Some(key) = layout
            .slots()
            .keys()
            .find(|key| self.slot_owners.contains_key(*key))
        {
            return Err(BuildError::DuplicateSlotKey(key.clone()));
        }
        if let Some(key) = layout
            .slot_groups()
            .keys()
            .find(|key| self.group_owners.contains_key(*key))
        {
            return Err(BuildError::DuplicateSlotGroupKey(key.clone()));
        }

        let index = self.layouts.len();
        for key in layout.slots().keys() {
            self.slot_owners.insert(key.clone(), index);
        }
        for (key, group) in layout.slot_groups() {
            self.group_owners.insert(key.clone(), index);
            self.group_fills.insert(
                key.clone(),
                GroupFill {
                    filled: vec![false; group.capacity()],
                    cursor: 0,
                },
            );
        }
        self.layouts.push(LayoutEntry {
            layout: layout.clone(),
            optional,
        });
        Ok(())
    }

    /// Adds a diagram-specific interactable, drawn above the layouts' own.
    pub fn add_interactable(&mut self, interactable: impl Into<Interactable>) -> &mut Self {
        self.interactables.push(interactable.into());
        self
    }

    /// Replaces the default "nothing was inserted" emptiness test.
    pub fn set_empty_predicate(
        &mut self,
        predicate: impl Fn(&SlotInsertions) -> bool + Send + Sync + 'static,
    ) -> &mut Self {
        self.empty_predicate = Arc::new(predicate);
        self
    }

    pub fn insert_into_slot(
        &mut self,
        key: &SlotKey,
        component: DisplayComponent,
    ) -> Result<&mut Self, BuildError> {
        self.insert_group_into_slot(key, [component])
    }

    /// Fills `key` with a cycling group. An empty group is a no-op.
    pub fn insert_group_into_slot(
        &mut self,
        key: &SlotKey,
        components: impl IntoIterator<Item = DisplayComponent>,
    ) -> Result<&mut Self, BuildError> {
        let owner = *self
            .slot_owners
            .get(key)
            .ok_or_else(|| BuildError::UnknownSlot(key.clone()))?;
        if self.filled_slots.contains(key) {
            return Err(BuildError::SlotAlreadyFilled(key.clone()));
        }
        let slot = self.layouts[owner]
            .layout
            .slot(key)
            .cloned()
            .ok_or_else(|| BuildError::UnknownSlot(key.clone()))?;

        if self.place(&slot, components.into_iter().collect(), InsertionKey::Slot(key.clone())) {
            self.filled_slots.insert(key.clone());
        }
        Ok(self)
    }

    /// Cursor-based filling of a slot group in row-major order.
    ///
    /// The cursor lives in the builder, so separate sub-builders for the same group continue
    /// where the previous one stopped.
    pub fn auto_insert_into_slot_group(
        &mut self,
        key: &SlotGroupKey,
    ) -> Result<SlotGroupAutoSubBuilder<'_>, BuildError> {
        self.require_group(key)?;
        Ok(SlotGroupAutoSubBuilder {
            builder: self,
            key: key.clone(),
        })
    }

    /// Explicit `(x, y)` filling of a slot group.
    pub fn manual_insert_into_slot_group(
        &mut self,
        key: &SlotGroupKey,
    ) -> Result<SlotGroupManualSubBuilder<'_>, BuildError> {
        self.require_group(key)?;
        Ok(SlotGroupManualSubBuilder {
            builder: self,
            key: key.clone(),
        })
    }

    fn require_group(&self, key: &SlotGroupKey) -> Result<usize, BuildError> {
        self.group_owners
            .get(key)
            .copied()
            .ok_or_else(|| BuildError::UnknownSlotGroup(key.clone()))
    }

    fn group_slot(&self, key: &SlotGroupKey, index: usize) -> Result<Slot, BuildError> {
        let owner = self.require_group(key)?;
        self.layouts[owner]
            .layout
            .slot_group(key)
            .and_then(|group| group.slot_at_index(index))
            .cloned()
            .ok_or_else(|| BuildError::UnknownSlotGroup(key.clone()))
    }

    /// Index of the next free cell at or after the group's cursor.
    fn next_free_cell(&self, key: &SlotGroupKey) -> Option<usize> {
        let fill = self.group_fills.get(key)?;
        (fill.cursor..fill.filled.len()).find(|idx| !fill.filled[*idx])
    }

    fn fill_group_cell(
        &mut self,
        key: &SlotGroupKey,
        index: usize,
        components: Components,
    ) -> Result<bool, BuildError> {
        let slot = self.group_slot(key, index)?;
        let placed = self.place(&slot, components, InsertionKey::SlotGroup(key.clone()));
        if placed {
            if let Some(fill) = self.group_fills.get_mut(key) {
                fill.filled[index] = true;
            }
        }
        Ok(placed)
    }

    /// Returns whether anything was placed.
    fn place(&mut self, slot: &Slot, components: Components, key: InsertionKey) -> bool {
        let Some(group) = InteractiveComponentGroup::new(slot, components) else {
            return false;
        };
        self.phase = Phase::Filling;
        self.interactables.push(Interactable::ComponentGroup(group));
        self.insertions.add(key);
        true
    }

    fn layout_was_filled(&self, layout: &Layout) -> bool {
        layout
            .slots()
            .keys()
            .any(|key| self.insertions.slot_count(key) > 0)
            || layout
                .slot_groups()
                .keys()
                .any(|key| self.insertions.slot_group_count(key) > 0)
    }

    pub fn build(self) -> Diagram {
        let shown: Vec<Layout> = self
            .layouts
            .iter()
            .filter(|entry| !entry.optional || self.layout_was_filled(&entry.layout))
            .map(|entry| entry.layout.clone())
            .collect();

        let mut interactables = self.interactables;
        for layout in &shown {
            interactables.extend(layout.interactables().iter().cloned());
        }
        for layout in &shown {
            interactables.extend(layout.all_slots().cloned().map(Interactable::Slot));
        }

        let empty = (self.empty_predicate)(&self.insertions);
        Diagram {
            layouts: shown,
            interactables,
            insertions: self.insertions,
            empty,
        }
    }
}

/// Fills one slot group in row-major order. Obtained from
/// [`DiagramBuilder::auto_insert_into_slot_group`].
#[derive(Debug)]
pub struct SlotGroupAutoSubBuilder<'a> {
    builder: &'a mut DiagramBuilder,
    key: SlotGroupKey,
}

impl SlotGroupAutoSubBuilder<'_> {
    pub fn key(&self) -> &SlotGroupKey {
        &self.key
    }

    /// Free cells left in the group.
    pub fn remaining(&self) -> usize {
        self.builder
            .group_fills
            .get(&self.key)
            .map(|fill| fill.filled[fill.cursor..].iter().filter(|taken| !**taken).count())
            .unwrap_or(0)
    }

    pub fn insert_into_next_slot(
        &mut self,
        component: DisplayComponent,
    ) -> Result<&mut Self, BuildError> {
        self.insert_group_into_next_slot([component])
    }

    /// Fills the next free cell with a cycling group; an empty group is a no-op.
    pub fn insert_group_into_next_slot(
        &mut self,
        components: impl IntoIterator<Item = DisplayComponent>,
    ) -> Result<&mut Self, BuildError> {
        let components: Components = components.into_iter().collect();
        if components.is_empty() {
            return Ok(self);
        }
        let index = self.builder.next_free_cell(&self.key).ok_or_else(|| {
            BuildError::SlotGroupFull {
                key: self.key.clone(),
                capacity: self
                    .builder
                    .group_fills
                    .get(&self.key)
                    .map_or(0, |fill| fill.filled.len()),
            }
        })?;
        self.builder.fill_group_cell(&self.key, index, components)?;
        if let Some(fill) = self.builder.group_fills.get_mut(&self.key) {
            fill.cursor = index + 1;
        }
        Ok(self)
    }

    /// Inserts every component, failing once the group is full.
    pub fn insert_each(
        &mut self,
        components: impl IntoIterator<Item = DisplayComponent>,
    ) -> Result<&mut Self, BuildError> {
        for component in components {
            self.insert_into_next_slot(component)?;
        }
        Ok(self)
    }

    /// Inserts components until the group is full and drops the rest.
    pub fn insert_each_safe(
        &mut self,
        components: impl IntoIterator<Item = DisplayComponent>,
    ) -> &mut Self {
        self.insert_each_group_safe(components.into_iter().map(|component| [component]))
    }

    /// Inserts cycling groups until the group is full and drops the rest. Empty inner groups are
    /// skipped without using a cell.
    pub fn insert_each_group_safe<G>(&mut self, groups: impl IntoIterator<Item = G>) -> &mut Self
    where
        G: IntoIterator<Item = DisplayComponent>,
    {
        let mut dropped = 0usize;
        for group in groups {
            let components: Components = group.into_iter().collect();
            if components.is_empty() {
                continue;
            }
            if dropped > 0 || self.insert_group_into_next_slot(components).is_err() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::trace!(group = %self.key, dropped, "slot group full, dropping components");
        }
        self
    }
}

/// Fills explicit cells of one slot group. Obtained from
/// [`DiagramBuilder::manual_insert_into_slot_group`].
#[derive(Debug)]
pub struct SlotGroupManualSubBuilder<'a> {
    builder: &'a mut DiagramBuilder,
    key: SlotGroupKey,
}

impl SlotGroupManualSubBuilder<'_> {
    pub fn key(&self) -> &SlotGroupKey {
        &self.key
    }

    pub fn insert_into_slot(
        &mut self,
        x: i32,
        y: i32,
        component: DisplayComponent,
    ) -> Result<&mut Self, BuildError> {
        self.insert_group_into_slot(x, y, [component])
    }

    /// Fills cell `(x, y)` with a cycling group; an empty group is a no-op.
    pub fn insert_group_into_slot(
        &mut self,
        x: i32,
        y: i32,
        components: impl IntoIterator<Item = DisplayComponent>,
    ) -> Result<&mut Self, BuildError> {
        let owner = self.builder.require_group(&self.key)?;
        let group = self.builder.layouts[owner]
            .layout
            .slot_group(&self.key)
            .ok_or_else(|| BuildError::UnknownSlotGroup(self.key.clone()))?;
        let index = group
            .index_of(x, y)
            .ok_or_else(|| BuildError::CellOutOfBounds {
                key: self.key.clone(),
                x,
                y,
                width: group.width(),
                height: group.height(),
            })?;

        let taken = self
            .builder
            .group_fills
            .get(&self.key)
            .map_or(false, |fill| fill.filled[index]);
        if taken {
            return Err(BuildError::CellAlreadyFilled {
                key: self.key.clone(),
                x,
                y,
            });
        }

        self.builder
            .fill_group_cell(&self.key, index, components.into_iter().collect())?;
        Ok(self)
    }
}
