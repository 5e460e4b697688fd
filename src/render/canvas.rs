// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Box-drawing arms present in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Arms(u8);

impl Arms {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const UP: u8 = 4;
    const DOWN: u8 = 8;

    fn of(ch: char) -> Option<Self> {
        let bits = match ch {
            '─' => Self::LEFT | Self::RIGHT,
            '│' => Self::UP | Self::DOWN,
            '┌' => Self::RIGHT | Self::DOWN,
            '┐' => Self::LEFT | Self::DOWN,
            '└' => Self::RIGHT | Self::UP,
            '┘' => Self::LEFT | Self::UP,
            '├' => Self::UP | Self::DOWN | Self::RIGHT,
            '┤' => Self::UP | Self::DOWN | Self::LEFT,
            '┬' => Self::LEFT | Self::RIGHT | Self::DOWN,
            '┴' => Self::LEFT | Self::RIGHT | Self::UP,
            '┼' => Self::LEFT | Self::RIGHT | Self::UP | Self::DOWN,
            _ => return None,
        };
        Some(Self(bits))
    }

    fn has(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    fn glyph(self) -> char {
        // Indexed by the 4-bit arm mask; line ends render as straight segments.
        const GLYPHS: [char; 16] = [
            ' ', '─', '─', '─', '│', '┘', '└', '┴', '│', '┐', '┌', '┬', '│', '┤', '├', '┼',
        ];
        GLYPHS[usize::from(self.0 & 0x0F)]
    }
}

/// A bounds-checked character grid addressed with signed cell coordinates.
///
/// Plain characters overwrite. Box-drawing characters merge with what is already there, so
/// crossing lines become junctions. `plot`-style calls clip silently at the edges; `set` and
/// `get` report out-of-bounds access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    arms: Vec<Arms>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![' '; len],
            arms: vec![Arms::default(); len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.glyph_at(x, y, idx))
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        match Arms::of(ch) {
            Some(arms) => self.arms[idx] = Arms(self.arms[idx].0 | arms.0),
            None => {
                self.cells[idx] = ch;
                self.arms[idx] = Arms::default();
            }
        }
        Ok(())
    }

    /// Writes `ch` if `(x, y)` is on the canvas.
    pub fn plot(&mut self, x: i64, y: i64, ch: char) {
        if let Some((x, y)) = self.cell(x, y) {
            let _ = self.set(x, y, ch);
        }
    }

    /// Writes `text` left to right from `(x, y)`, clipping at every edge.
    pub fn write_str(&mut self, x: i64, y: i64, text: &str) {
        for (offset, ch) in (0i64..).zip(text.chars()) {
            self.plot(x + offset, y, ch);
        }
    }

    pub fn hline(&mut self, x0: i64, x1: i64, y: i64) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.plot(x, y, HORIZONTAL);
        }
    }

    pub fn vline(&mut self, x: i64, y0: i64, y1: i64) {
        for y in y0.min(y1)..=y0.max(y1) {
            self.plot(x, y, VERTICAL);
        }
    }

    /// Single-line box with corners at `(x0, y0)` and `(x1, y1)`.
    pub fn draw_box(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        if left == right || top == bottom {
            self.hline(left, right, top);
            self.vline(left, top, bottom);
            return;
        }
        self.hline(left + 1, right - 1, top);
        self.hline(left + 1, right - 1, bottom);
        self.vline(left, top + 1, bottom - 1);
        self.vline(right, top + 1, bottom - 1);
        self.plot(left, top, '┌');
        self.plot(right, top, '┐');
        self.plot(left, bottom, '└');
        self.plot(right, bottom, '┘');
    }

    /// Rendered rows without trailing blanks or trailing empty lines.
    pub fn to_trimmed_string(&self) -> String {
        let rendered = self.to_string();
        let mut lines: Vec<&str> = rendered.split('\n').map(|line| line.trim_end()).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn cell(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    fn arms_at(&self, x: usize, y: usize) -> Arms {
        self.arms[y * self.width + x]
    }

    /// Box cells only keep the arms that reach a neighbour, so a line ending beside another
    /// line does not sprout a junction.
    fn glyph_at(&self, x: usize, y: usize, idx: usize) -> char {
        let arms = self.arms[idx];
        if arms.0 == 0 {
            return self.cells[idx];
        }

        let mut joined = 0u8;
        if arms.has(Arms::LEFT) && x > 0 && self.arms_at(x - 1, y).has(Arms::RIGHT) {
            joined |= Arms::LEFT;
        }
        if arms.has(Arms::RIGHT) && x + 1 < self.width && self.arms_at(x + 1, y).has(Arms::LEFT) {
            joined |= Arms::RIGHT;
        }
        if arms.has(Arms::UP) && y > 0 && self.arms_at(x, y - 1).has(Arms::DOWN) {
            joined |= Arms::UP;
        }
        if arms.has(Arms::DOWN) && y + 1 < self.height && self.arms_at(x, y + 1).has(Arms::UP) {
            joined |= Arms::DOWN;
        }

        if joined == 0 {
            arms.glyph()
        } else {
            Arms(joined).glyph()
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.glyph_at(x, y, y * self.width + x))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("canvas area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} canvas")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
