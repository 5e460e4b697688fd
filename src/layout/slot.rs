// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::layout::grid::{Dimension, Direction, Point, BIG_SLOT_WIDTH, SLOT_WIDTH};
use crate::layout::LayoutError;
use crate::model::Tooltip;
use crate::render::DrawTarget;

/// Background decoration drawn behind a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotStyle {
    #[default]
    Normal,
    /// Raised, larger frame used for outputs.
    Big,
    /// No background at all.
    Hidden,
}

/// A single addressable cell. Immutable once built; filling a slot produces a separate
/// component group and never touches the slot itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    position: Point,
    slot_width: i32,
    tooltip: Tooltip,
    style: SlotStyle,
}

impl Slot {
    pub fn builder(position: Point) -> SlotBuilder {
        SlotBuilder {
            position,
            slot_width: SLOT_WIDTH,
            tooltip: Tooltip::empty(),
            style: SlotStyle::Normal,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn slot_width(&self) -> i32 {
        self.slot_width
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::square(self.slot_width)
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn style(&self) -> SlotStyle {
        self.style
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        if self.style != SlotStyle::Hidden {
            target.draw_slot(self.position, self.slot_width, self.style);
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlotBuilder {
    position: Point,
    slot_width: i32,
    tooltip: Tooltip,
    style: SlotStyle,
}

impl SlotBuilder {
    pub fn set_slot_width(mut self, slot_width: i32) -> Self {
        self.slot_width = slot_width;
        self
    }

    pub fn set_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn set_style(mut self, style: SlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Big slot: wider frame and [`SlotStyle::Big`].
    pub fn big(mut self) -> Self {
        self.slot_width = BIG_SLOT_WIDTH;
        self.style = SlotStyle::Big;
        self
    }

    pub fn build(self) -> Slot {
        Slot {
            position: self.position,
            slot_width: self.slot_width,
            tooltip: self.tooltip,
            style: self.style,
        }
    }
}

/// A `width × height` block of slots anchored at one point.
///
/// Cells are addressed by `(x, y)` with `(0, 0)` at the top-left; auto-fill walks them
/// row-major, left to right then top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGroup {
    width: i32,
    height: i32,
    slots: Vec<Slot>,
}

impl SlotGroup {
    /// `direction` picks which corner or edge of the block sits on `position`: `E` grows to the
    /// right from `position`, `SE` grows right and down, `C` centres the block.
    pub fn builder(width: i32, height: i32, position: Point, direction: Direction) -> SlotGroupBuilder {
        SlotGroupBuilder {
            width,
            height,
            position,
            direction,
            slot_width: SLOT_WIDTH,
            default_tooltip: Tooltip::empty(),
            default_style: SlotStyle::Normal,
            overrides: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        usize::try_from(x + y * self.width).ok()
    }

    pub fn slot(&self, x: i32, y: i32) -> Option<&Slot> {
        self.index_of(x, y).and_then(|idx| self.slots.get(idx))
    }

    pub fn slot_at_index(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Slots in fill order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

#[derive(Debug, Clone)]
pub struct SlotGroupBuilder {
    width: i32,
    height: i32,
    position: Point,
    direction: Direction,
    slot_width: i32,
    default_tooltip: Tooltip,
    default_style: SlotStyle,
    overrides: BTreeMap<(i32, i32), Slot>,
}

impl SlotGroupBuilder {
    /// Pitch between neighbouring slot centres.
    pub fn set_slot_width(mut self, slot_width: i32) -> Self {
        self.slot_width = slot_width;
        self
    }

    pub fn set_default_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.default_tooltip = tooltip;
        self
    }

    pub fn set_default_style(mut self, style: SlotStyle) -> Self {
        self.default_style = style;
        self
    }

    /// Replaces the generated slot at `(x, y)`. The override keeps its width, tooltip and style
    /// but is moved to the cell's position.
    pub fn set_slot(mut self, x: i32, y: i32, slot: Slot) -> Self {
        self.overrides.insert((x, y), slot);
        self
    }

    /// Centre of the slot at `(x, y)` under this builder's anchoring.
    pub fn slot_position(&self, x: i32, y: i32) -> Point {
        let dx = self.direction.x_factor();
        let dy = self.direction.y_factor();
        let top_left = self.position.translate(
            (dx - 1) * (self.width - 1) * self.slot_width / 2,
            (dy - 1) * (self.height - 1) * self.slot_width / 2,
        );
        top_left.translate(x * self.slot_width, y * self.slot_width)
    }

    pub fn build(mut self) -> Result<SlotGroup, LayoutError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(LayoutError::InvalidExtent {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(&(x, y)) = self
            .overrides
            .keys()
            .find(|(x, y)| *x < 0 || *y < 0 || *x >= self.width || *y >= self.height)
        {
            return Err(LayoutError::SlotOverrideOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let Some(capacity) = self
            .width
            .checked_mul(self.height)
            .and_then(|cells| usize::try_from(cells).ok())
        else {
            return Err(LayoutError::InvalidExtent {
                width: self.width,
                height: self.height,
            });
        };

        let mut slots = Vec::with_capacity(capacity);
        for y in 0..self.height {
            for x in 0..self.width {
                let slot = match self.overrides.remove(&(x, y)) {
                    Some(slot) => Slot {
                        position: self.slot_position(x, y),
                        ..slot
                    },
                    None => Slot::builder(self.slot_position(x, y))
                        .set_slot_width(self.slot_width)
                        .set_tooltip(self.default_tooltip.clone())
                        .set_style(self.default_style)
                        .build(),
                };
                slots.push(slot);
            }
        }

        Ok(SlotGroup {
            width: self.width,
            height: self.height,
            slots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Slot, SlotGroup, SlotStyle};
    use crate::layout::grid::{Direction, Grid, Point};
    use crate::layout::LayoutError;
    use crate::model::{TextFormatting, Tooltip};

    #[test]
    fn east_group_grows_right_and_centres_vertically() {
        let origin = Grid::GRID.grid(0, 0);
        let group = SlotGroup::builder(2, 3, origin, Direction::E)
            .build()
            .expect("group");

        assert_eq!(group.capacity(), 6);
        assert_eq!(group.slot(0, 0).map(Slot::position), Some(Point::new(11, -7)));
        assert_eq!(group.slot(1, 1).map(Slot::position), Some(Point::new(29, 11)));
        assert_eq!(group.slot(1, 2).map(Slot::position), Some(Point::new(29, 29)));
    }

    #[test]
    fn south_east_group_starts_at_anchor() {
        let origin = Grid::GRID.grid(3, 0);
        let group = SlotGroup::builder(6, 6, origin, Direction::SE)
            .build()
            .expect("group");

        assert_eq!(group.slot(0, 0).map(Slot::position), Some(origin));
        assert_eq!(
            group.slot(5, 5).map(Slot::position),
            Some(origin.translate(90, 90))
        );
    }

    #[test]
    fn centred_group_is_symmetric() {
        let origin = Point::new(100, 100);
        let group = SlotGroup::builder(3, 3, origin, Direction::C)
            .build()
            .expect("group");
        assert_eq!(group.slot(1, 1).map(Slot::position), Some(origin));
        assert_eq!(group.slot(0, 0).map(Slot::position), Some(Point::new(82, 82)));
    }

    #[test]
    fn fill_order_is_row_major() {
        let group = SlotGroup::builder(3, 2, Point::ORIGIN, Direction::SE)
            .build()
            .expect("group");
        let xs: Vec<i32> = group.slots().iter().map(|slot| slot.position().x).collect();
        assert_eq!(xs, vec![0, 18, 36, 0, 18, 36]);
        assert_eq!(group.index_of(2, 1), Some(5));
        assert_eq!(group.index_of(3, 0), None);
    }

    #[test]
    fn zero_extent_is_rejected() {
        let err = SlotGroup::builder(0, 2, Point::ORIGIN, Direction::S)
            .build()
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidExtent { width: 0, height: 2 }));
    }

    #[test]
    fn overflowing_extent_is_rejected() {
        let err = SlotGroup::builder(i32::MAX, 2, Point::ORIGIN, Direction::SE)
            .build()
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidExtent { height: 2, .. }));
    }

    #[test]
    fn overrides_replace_generated_slots_in_place() {
        let tooltip = Tooltip::create("Output", TextFormatting::SLOT);
        let big = Slot::builder(Point::new(1, 1))
            .big()
            .set_tooltip(tooltip.clone())
            .build();
        let group = SlotGroup::builder(2, 1, Point::ORIGIN, Direction::E)
            .set_slot(1, 0, big.clone())
            .build()
            .expect("group");

        let Some(cell) = group.slot(1, 0) else {
            panic!("expected an override at (1, 0)");
        };
        assert_eq!(cell.position(), Point::new(18, 0));
        assert_eq!(cell.style(), SlotStyle::Big);
        assert_eq!(cell.slot_width(), big.slot_width());
        assert_eq!(cell.tooltip(), &tooltip);
        assert_eq!(group.slot(0, 0).map(Slot::position), Some(Point::ORIGIN));
        assert_eq!(group.slot(0, 0).map(Slot::style), Some(SlotStyle::Normal));

        let err = SlotGroup::builder(2, 1, Point::ORIGIN, Direction::E)
            .set_slot(2, 0, big)
            .build()
            .unwrap_err();
        assert!(matches!(err, LayoutError::SlotOverrideOutOfBounds { x: 2, .. }));
    }
}
