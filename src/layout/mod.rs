// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reusable, coordinate-free diagram templates.
//!
//! A [`Layout`] names its slots and slot groups by key. Generators build a layout once and
//! share it (cheaply, by reference) across every diagram stamped out from it; diagrams only
//! ever read it.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::diagram::Interactable;
use crate::model::{DisplayComponent, IdError, SlotGroupKey, SlotKey};
use crate::render::DrawTarget;

pub mod grid;
pub mod lines;
pub mod slot;
pub mod text;

pub use grid::{Dimension, Direction, Grid, Point};
pub use lines::{Arrow, Lines, LinesBuilder, Segment};
pub use slot::{Slot, SlotBuilder, SlotGroup, SlotGroupBuilder, SlotStyle};
pub use text::{MultiLineTextBuilder, Text, TextBuilder};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("duplicate slot key `{0}`")]
    DuplicateSlotKey(SlotKey),
    #[error("duplicate slot group key `{0}`")]
    DuplicateSlotGroupKey(SlotGroupKey),
    #[error("slot group extent must be positive, got {width}x{height}")]
    InvalidExtent { width: i32, height: i32 },
    #[error("slot override ({x}, {y}) is outside a {width}x{height} slot group")]
    SlotOverrideOutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    #[error("segment {start} -> {end} is neither horizontal nor vertical")]
    NonOrthogonalSegment { start: Point, end: Point },
    #[error("multi-line text needs a direction with a vertical component, got {0:?}")]
    MultiLineNeedsVerticalDirection(Direction),
    #[error(transparent)]
    Id(#[from] IdError),
}

/// A component drawn at a fixed position, outside any slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabel {
    component: DisplayComponent,
    position: Point,
}

impl ComponentLabel {
    pub fn new(component: DisplayComponent, position: Point) -> Self {
        Self {
            component,
            position,
        }
    }

    pub fn component(&self) -> &DisplayComponent {
        &self.component
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// Static, non-slot drawing: a text or a component icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Text(Text),
    Component(ComponentLabel),
}

impl Label {
    pub fn position(&self) -> Point {
        match self {
            Self::Text(text) => text.position(),
            Self::Component(label) => label.position(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Text(text) => text.dimension(),
            Self::Component(_) => Dimension::square(grid::STACK_WIDTH),
        }
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        match self {
            Self::Text(text) => text.draw(target),
            Self::Component(label) => target.draw_component(label.position, &label.component, None),
        }
    }
}

impl From<Text> for Label {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

impl From<ComponentLabel> for Label {
    fn from(value: ComponentLabel) -> Self {
        Self::Component(value)
    }
}

#[derive(Debug, Default)]
struct LayoutData {
    lines: Vec<Lines>,
    labels: Vec<Label>,
    interactables: Vec<Interactable>,
    slots: BTreeMap<SlotKey, Slot>,
    slot_groups: BTreeMap<SlotGroupKey, SlotGroup>,
}

/// Immutable, shareable diagram template. Clones share the same data.
#[derive(Debug, Clone)]
pub struct Layout {
    data: Arc<LayoutData>,
}

impl Layout {
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder::default()
    }

    /// Whether both handles refer to the same built layout.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    pub fn lines(&self) -> &[Lines] {
        &self.data.lines
    }

    pub fn labels(&self) -> &[Label] {
        &self.data.labels
    }

    pub fn interactables(&self) -> &[Interactable] {
        &self.data.interactables
    }

    pub fn slots(&self) -> &BTreeMap<SlotKey, Slot> {
        &self.data.slots
    }

    pub fn slot(&self, key: &SlotKey) -> Option<&Slot> {
        self.data.slots.get(key)
    }

    pub fn slot_groups(&self) -> &BTreeMap<SlotGroupKey, SlotGroup> {
        &self.data.slot_groups
    }

    pub fn slot_group(&self, key: &SlotGroupKey) -> Option<&SlotGroup> {
        self.data.slot_groups.get(key)
    }

    pub fn has_slot(&self, key: &SlotKey) -> bool {
        self.data.slots.contains_key(key)
    }

    pub fn has_slot_group(&self, key: &SlotGroupKey) -> bool {
        self.data.slot_groups.contains_key(key)
    }

    /// Every slot, loose slots first, then slot groups cell by cell.
    pub fn all_slots(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.data.slots.values().chain(
            self.data
                .slot_groups
                .values()
                .flat_map(|group| group.slots().iter()),
        )
    }

    /// Extent of everything this layout draws.
    pub fn dimension(&self) -> Dimension {
        let mut dimension = Dimension::ZERO;
        for lines in &self.data.lines {
            dimension = dimension.max(lines.dimension());
        }
        for label in &self.data.labels {
            dimension = dimension.max(far_corner(label.position(), label.dimension()));
        }
        for interactable in &self.data.interactables {
            dimension = dimension.max(far_corner(interactable.position(), interactable.dimension()));
        }
        for slot in self.all_slots() {
            dimension = dimension.max(far_corner(slot.position(), slot.dimension()));
        }
        dimension
    }

    /// Lines and labels. Slots and interactables are drawn by the owning diagram.
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        for lines in &self.data.lines {
            lines.draw(target);
        }
        for label in &self.data.labels {
            label.draw(target);
        }
    }
}

/// Bottom-right corner (plus one) of a box centred at `position`.
pub(crate) fn far_corner(position: Point, dimension: Dimension) -> Dimension {
    Dimension::covering(position.translate(
        dimension.width - dimension.width / 2,
        dimension.height - dimension.height / 2,
    ))
}

/// Accumulates a [`Layout`]. Key collisions fail at the call that causes them.
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    data: LayoutData,
}

impl LayoutBuilder {
    pub fn add_lines(&mut self, lines: Lines) -> &mut Self {
        self.data.lines.push(lines);
        self
    }

    pub fn add_label(&mut self, label: impl Into<Label>) -> &mut Self {
        self.data.labels.push(label.into());
        self
    }

    pub fn add_interactable(&mut self, interactable: impl Into<Interactable>) -> &mut Self {
        self.data.interactables.push(interactable.into());
        self
    }

    pub fn put_slot(&mut self, key: SlotKey, slot: Slot) -> Result<&mut Self, LayoutError> {
        if self.data.slots.contains_key(&key) {
            return Err(LayoutError::DuplicateSlotKey(key));
        }
        self.data.slots.insert(key, slot);
        Ok(self)
    }

    pub fn put_slot_group(
        &mut self,
        key: SlotGroupKey,
        group: SlotGroup,
    ) -> Result<&mut Self, LayoutError> {
        if self.data.slot_groups.contains_key(&key) {
            return Err(LayoutError::DuplicateSlotGroupKey(key));
        }
        self.data.slot_groups.insert(key, group);
        Ok(self)
    }

    /// Copies everything from `other` into this builder. On a key collision nothing is copied.
    pub fn add_sub_layout(&mut self, other: &Layout) -> Result<&mut Self, LayoutError> {
        if let Some(key) = other
            .slots()
            .keys()
            .find(|key| self.data.slots.contains_key(*key))
        {
            return Err(LayoutError::DuplicateSlotKey(key.clone()));
        }
        if let Some(key) = other
            .slot_groups()
            .keys()
            .find(|key| self.data.slot_groups.contains_key(*key))
        {
            return Err(LayoutError::DuplicateSlotGroupKey(key.clone()));
        }

        self.data.slots.extend(
            other
                .slots()
                .iter()
                .map(|(key, slot)| (key.clone(), slot.clone())),
        );
        self.data.slot_groups.extend(
            other
                .slot_groups()
                .iter()
                .map(|(key, group)| (key.clone(), group.clone())),
        );
        self.data.lines.extend(other.lines().iter().cloned());
        self.data.labels.extend(other.labels().iter().cloned());
        self.data
            .interactables
            .extend(other.interactables().iter().cloned());
        Ok(self)
    }

    pub fn build(self) -> Layout {
        Layout {
            data: Arc::new(self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Label, Layout, LayoutError, Lines, Slot, SlotGroup, Text};
    use crate::layout::grid::{Dimension, Direction, Grid, Point};
    use crate::model::{SlotGroupKey, SlotKey};

    fn key(name: &str) -> SlotKey {
        SlotKey::new(name).expect("slot key")
    }

    #[test]
    fn duplicate_slot_key_fails_before_build() {
        let mut builder = Layout::builder();
        for name in ["a", "b", "c"] {
            builder
                .put_slot(key(name), Slot::builder(Grid::GRID.grid(0, 0)).build())
                .expect("put slot");
        }

        let err = builder
            .put_slot(key("b"), Slot::builder(Grid::GRID.grid(1, 0)).build())
            .unwrap_err();
        assert_eq!(err, LayoutError::DuplicateSlotKey(key("b")));
    }

    #[test]
    fn duplicate_slot_group_key_fails() {
        let group_key = SlotGroupKey::new("inputs").expect("group key");
        let group = SlotGroup::builder(1, 1, Point::ORIGIN, Direction::C)
            .build()
            .expect("group");

        let mut builder = Layout::builder();
        builder
            .put_slot_group(group_key.clone(), group.clone())
            .expect("first put");
        assert!(builder.put_slot_group(group_key, group).is_err());
    }

    #[test]
    fn sub_layout_merges_and_detects_collisions() {
        let mut inner = Layout::builder();
        inner
            .put_slot(key("shared"), Slot::builder(Point::new(11, 11)).build())
            .expect("put slot");
        inner.add_label(Text::builder("inner", Point::ORIGIN, Direction::SE).build());
        let inner = inner.build();

        let mut outer = Layout::builder();
        outer.add_sub_layout(&inner).expect("merge");
        assert_eq!(
            outer.add_sub_layout(&inner).unwrap_err(),
            LayoutError::DuplicateSlotKey(key("shared"))
        );

        let outer = outer.build();
        assert!(outer.has_slot(&key("shared")));
        assert_eq!(outer.labels().len(), 1);
    }

    #[test]
    fn colliding_sub_layout_copies_nothing() {
        let mut inner = Layout::builder();
        for name in ["a", "shared"] {
            inner
                .put_slot(key(name), Slot::builder(Point::new(11, 11)).build())
                .expect("put slot");
        }
        inner.add_label(Text::builder("inner", Point::ORIGIN, Direction::SE).build());
        let inner = inner.build();

        let mut outer = Layout::builder();
        outer
            .put_slot(key("shared"), Slot::builder(Point::new(29, 11)).build())
            .expect("put slot");
        assert_eq!(
            outer.add_sub_layout(&inner).unwrap_err(),
            LayoutError::DuplicateSlotKey(key("shared"))
        );

        let outer = outer.build();
        assert!(!outer.has_slot(&key("a")));
        assert_eq!(outer.slots().len(), 1);
        assert!(outer.labels().is_empty());
    }

    #[test]
    fn all_slots_lists_loose_slots_then_groups() {
        let mut builder = Layout::builder();
        builder
            .put_slot(key("single"), Slot::builder(Point::new(200, 200)).build())
            .expect("put slot");
        builder
            .put_slot_group(
                SlotGroupKey::new("grid").expect("key"),
                SlotGroup::builder(2, 2, Grid::GRID.grid(0, 0), Direction::SE)
                    .build()
                    .expect("group"),
            )
            .expect("put group");
        let layout = builder.build();

        let positions: Vec<Point> = layout.all_slots().map(Slot::position).collect();
        assert_eq!(positions.len(), 5);
        assert_eq!(positions[0], Point::new(200, 200));
        assert_eq!(positions[1], Point::new(11, 11));
    }

    #[test]
    fn dimension_covers_slots_and_lines() {
        let mut builder = Layout::builder();
        builder
            .put_slot(key("a"), Slot::builder(Point::new(11, 11)).build())
            .expect("put slot");
        let mut lines = Lines::builder(Point::new(0, 0));
        lines.add_segment(Point::new(0, 100)).expect("segment");
        builder.add_lines(lines.build());
        builder.add_label(Label::Text(
            Text::builder("x", Point::new(0, 0), Direction::C).build(),
        ));

        assert_eq!(builder.build().dimension(), Dimension::new(20, 101));
    }

    #[test]
    fn clones_share_data() {
        let layout = Layout::builder().build();
        let clone = layout.clone();
        assert!(layout.ptr_eq(&clone));
        assert!(!layout.ptr_eq(&Layout::builder().build()));
    }
}
