// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing surface.
//!
//! Diagrams never draw pixels themselves; they issue calls against a [`DrawTarget`], which the
//! host implements with its own GUI primitives. [`TextRenderer`] is a character-grid target for
//! debugging and the demo binary; [`RecordingTarget`] captures calls for tests.

use std::fmt;

use crate::layout::grid::{Dimension, Direction, Point};
use crate::layout::{SlotStyle, Text};
use crate::model::{DisplayComponent, Tooltip};

mod canvas;
mod recording;
mod text;

pub use canvas::{Canvas, CanvasError};
pub use recording::{DrawCall, RecordingTarget};
pub use text::{render_diagram_text, TextRenderer, CELL_HEIGHT, CELL_WIDTH};

/// Packed `0xAARRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour(pub u32);

impl Colour {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const GREY: Self = Self(0xFF8B_8B8B);
    pub const RED: Self = Self(0xFFFF_5555);
    pub const GREEN: Self = Self(0xFF55_FF55);
    pub const BLUE: Self = Self(0xFF55_55FF);
    pub const CYAN: Self = Self(0xFF55_FFFF);
    pub const YELLOW: Self = Self(0xFFFF_FF55);
    pub const MAGENTA: Self = Self(0xFFFF_55FF);
    pub const GUI_BG: Self = Self(0xFFC6_C6C6);
    pub const SLOT_BG: Self = Self(0xFF8B_8B8B);
    pub const OVERLAY_WHITE: Self = Self(0x80FF_FFFF);
    pub const OVERLAY_BLUE: Self = Self(0x8055_55FF);

    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    pub const fn is_translucent(self) -> bool {
        self.alpha() < 0xFF
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Host drawing primitives. Positions are diagram-local pixel centres.
pub trait DrawTarget {
    fn draw_slot(&mut self, position: Point, slot_width: i32, style: SlotStyle);

    fn draw_component(&mut self, position: Point, display: &DisplayComponent, badge: Option<&str>);

    /// An orthogonal line segment, endpoints included.
    fn draw_line(&mut self, from: Point, to: Point, colour: Colour);

    fn draw_arrowhead(&mut self, position: Point, direction: Direction, colour: Colour);

    fn draw_text(&mut self, text: &Text);

    /// Translucent hover highlight over a box centred at `position`.
    fn draw_overlay(&mut self, position: Point, dimension: Dimension, colour: Colour);

    /// Tooltip anchored at the (screen) mouse position.
    fn draw_tooltip(&mut self, mouse: Point, tooltip: &Tooltip);
}

#[cfg(test)]
mod tests {
    use super::Colour;

    #[test]
    fn argb_packing() {
        assert_eq!(Colour::argb(0xFF, 0x55, 0x55, 0xFF), Colour::BLUE);
        assert_eq!(Colour::BLUE.with_alpha(0x80), Colour::OVERLAY_BLUE);
        assert!(Colour::OVERLAY_WHITE.is_translucent());
        assert!(!Colour::GREY.is_translucent());
        assert_eq!(Colour::RED.to_string(), "#FFFF5555");
    }
}
