// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::grid::{Dimension, Direction, Point, TEXT_HEIGHT};
use crate::layout::LayoutError;
use crate::render::{Colour, DrawTarget};

/// Advance of one glyph in the host font, including spacing.
pub const GLYPH_WIDTH: i32 = 6;
/// Vertical distance between two stacked lines of text.
pub const LINE_HEIGHT: i32 = TEXT_HEIGHT + 2;

/// Rendered width of `text`, in pixels.
pub fn text_width(text: &str, small: bool) -> i32 {
    let width = text.chars().count() as i32 * GLYPH_WIDTH;
    if small {
        width / 2
    } else {
        width
    }
}

/// A single line of text, stored by its centre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    text: String,
    position: Point,
    colour: Colour,
    small: bool,
    shadow: bool,
}

impl Text {
    /// `direction` says on which side of `anchor` the text is placed: `S` hangs below it,
    /// `E` starts at it, `C` centres on it.
    pub fn builder(text: impl Into<String>, anchor: Point, direction: Direction) -> TextBuilder {
        TextBuilder {
            text: text.into(),
            anchor,
            direction,
            colour: Colour::GREY,
            small: false,
            shadow: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn is_small(&self) -> bool {
        self.small
    }

    pub fn has_shadow(&self) -> bool {
        self.shadow
    }

    pub fn dimension(&self) -> Dimension {
        let height = if self.small {
            TEXT_HEIGHT / 2
        } else {
            TEXT_HEIGHT
        };
        Dimension::new(text_width(&self.text, self.small), height)
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        target.draw_text(self);
    }
}

#[derive(Debug, Clone)]
pub struct TextBuilder {
    text: String,
    anchor: Point,
    direction: Direction,
    colour: Colour,
    small: bool,
    shadow: bool,
}

impl TextBuilder {
    pub fn set_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn set_small(mut self, small: bool) -> Self {
        self.small = small;
        self
    }

    pub fn set_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn build(self) -> Text {
        let mut text = Text {
            text: self.text,
            position: self.anchor,
            colour: self.colour,
            small: self.small,
            shadow: self.shadow,
        };
        let dim = text.dimension();
        text.position = self.anchor.translate(
            self.direction.x_factor() * dim.width / 2,
            self.direction.y_factor() * dim.height / 2,
        );
        text
    }
}

/// Stacks several [`Text`] lines away from a common anchor.
#[derive(Debug, Clone)]
pub struct MultiLineTextBuilder {
    anchor: Point,
    direction: Direction,
    lines: Vec<String>,
    colour: Colour,
    small: bool,
    shadow: bool,
}

impl MultiLineTextBuilder {
    /// Fails unless `direction` has a vertical component, since lines stack vertically.
    pub fn new(anchor: Point, direction: Direction) -> Result<Self, LayoutError> {
        if direction.y_factor() == 0 {
            return Err(LayoutError::MultiLineNeedsVerticalDirection(direction));
        }
        Ok(Self {
            anchor,
            direction,
            lines: Vec::new(),
            colour: Colour::GREY,
            small: false,
            shadow: false,
        })
    }

    pub fn add_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn add_all_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn set_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn set_small(mut self, small: bool) -> Self {
        self.small = small;
        self
    }

    pub fn set_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Lines growing `S` read top-down from the anchor; lines growing `N` end at the anchor.
    pub fn build(self) -> Vec<Text> {
        let count = self.lines.len() as i32;
        let step = self.direction.y_factor() * LINE_HEIGHT;
        self.lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                let idx = idx as i32;
                let distance = if step > 0 { idx } else { count - 1 - idx };
                Text::builder(line, self.anchor.translate(0, distance * step), self.direction)
                    .set_colour(self.colour)
                    .set_small(self.small)
                    .set_shadow(self.shadow)
                    .build()
            })
            .collect()
    }
}
