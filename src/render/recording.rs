// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Colour, DrawTarget};
use crate::layout::grid::{Dimension, Direction, Point};
use crate::layout::{SlotStyle, Text};
use crate::model::{DisplayComponent, Tooltip};

/// One captured [`DrawTarget`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Slot {
        position: Point,
        slot_width: i32,
        style: SlotStyle,
    },
    Component {
        position: Point,
        display: DisplayComponent,
        badge: Option<String>,
    },
    Line {
        from: Point,
        to: Point,
        colour: Colour,
    },
    Arrowhead {
        position: Point,
        direction: Direction,
        colour: Colour,
    },
    Text(Text),
    Overlay {
        position: Point,
        dimension: Dimension,
        colour: Colour,
    },
    Tooltip {
        mouse: Point,
        tooltip: Tooltip,
    },
}

/// Captures draw calls in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    calls: Vec<DrawCall>,
}

impl RecordingTarget {
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }
}

impl DrawTarget for RecordingTarget {
    fn draw_slot(&mut self, position: Point, slot_width: i32, style: SlotStyle) {
        self.calls.push(DrawCall::Slot {
            position,
            slot_width,
            style,
        });
    }

    fn draw_component(&mut self, position: Point, display: &DisplayComponent, badge: Option<&str>) {
        self.calls.push(DrawCall::Component {
            position,
            display: display.clone(),
            badge: badge.map(str::to_owned),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, colour: Colour) {
        self.calls.push(DrawCall::Line { from, to, colour });
    }

    fn draw_arrowhead(&mut self, position: Point, direction: Direction, colour: Colour) {
        self.calls.push(DrawCall::Arrowhead {
            position,
            direction,
            colour,
        });
    }

    fn draw_text(&mut self, text: &Text) {
        self.calls.push(DrawCall::Text(text.clone()));
    }

    fn draw_overlay(&mut self, position: Point, dimension: Dimension, colour: Colour) {
        self.calls.push(DrawCall::Overlay {
            position,
            dimension,
            colour,
        });
    }

    fn draw_tooltip(&mut self, mouse: Point, tooltip: &Tooltip) {
        self.calls.push(DrawCall::Tooltip {
            mouse,
            tooltip: tooltip.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawCall, RecordingTarget};
    use crate::layout::grid::{Dimension, Point};
    use crate::layout::SlotStyle;
    use crate::render::{Colour, DrawTarget};

    #[test]
    fn records_in_call_order() {
        let mut target = RecordingTarget::default();
        target.draw_slot(Point::new(9, 9), 18, SlotStyle::Normal);
        target.draw_overlay(Point::new(9, 9), Dimension::new(16, 16), Colour::OVERLAY_WHITE);

        assert_eq!(
            target.calls(),
            [
                DrawCall::Slot {
                    position: Point::new(9, 9),
                    slot_width: 18,
                    style: SlotStyle::Normal,
                },
                DrawCall::Overlay {
                    position: Point::new(9, 9),
                    dimension: Dimension::new(16, 16),
                    colour: Colour::OVERLAY_WHITE,
                },
            ]
        );

        target.clear();
        assert!(target.calls().is_empty());
    }
}
