// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Coordinate primitives.
//!
//! All positions are pixel coordinates relative to the top-left corner of a diagram. Layout code
//! never hard-codes pixels; it asks [`Grid`] for slot centres and edges by logical
//! `(column, row)` coordinates instead. Coordinates outside the nominal canvas are valid and
//! simply land off-screen.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Width of the diagram canvas in pixels.
pub const TOTAL_WIDTH: i32 = 166;
/// Height of the diagram canvas in pixels (one full page).
pub const TOTAL_HEIGHT: i32 = 332;
/// Width of a rendered item or fluid stack.
pub const STACK_WIDTH: i32 = 16;
/// Width of a slot, including its one-pixel border.
pub const SLOT_WIDTH: i32 = 18;
/// Width of a big (output) slot.
pub const BIG_SLOT_WIDTH: i32 = 26;
/// Gap between two neighbouring grid slots.
pub const MARGIN_WIDTH: i32 = 6;
/// Gap between the canvas border and the first grid column or row.
pub const SIDE_MARGIN_WIDTH: i32 = 2;
/// Number of grid columns that fit into [`TOTAL_WIDTH`].
pub const GRID_WIDTH: i32 = 7;
/// Number of grid rows that fit into [`TOTAL_HEIGHT`].
pub const GRID_HEIGHT: i32 = 14;
/// Size of an icon drawn inside a button.
pub const ICON_WIDTH: i32 = 16;
/// Height of one line of regular text.
pub const TEXT_HEIGHT: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Keeps this point's `x` and takes `y` from `other`.
    pub const fn project_x(self, other: Self) -> Self {
        Self {
            x: self.x,
            y: other.y,
        }
    }

    /// Keeps this point's `y` and takes `x` from `other`.
    pub const fn project_y(self, other: Self) -> Self {
        Self {
            x: other.x,
            y: self.y,
        }
    }

    /// Whether the segment from `self` to `other` is horizontal or vertical.
    pub const fn is_orthogonal(self, other: Self) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.translate(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.translate(-rhs.x, -rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn square(size: i32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// The smallest dimension that reaches `point` from the origin.
    pub fn covering(point: Point) -> Self {
        Self {
            width: point.x.max(0),
            height: point.y.max(0),
        }
    }
}

/// Compass direction used to anchor slot groups, text and edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    NW,
    N,
    NE,
    W,
    C,
    E,
    SW,
    S,
    SE,
}

impl Direction {
    pub const ALL: [Self; 9] = [
        Self::NW,
        Self::N,
        Self::NE,
        Self::W,
        Self::C,
        Self::E,
        Self::SW,
        Self::S,
        Self::SE,
    ];

    pub const fn x_factor(self) -> i32 {
        match self {
            Self::NW | Self::W | Self::SW => -1,
            Self::N | Self::C | Self::S => 0,
            Self::NE | Self::E | Self::SE => 1,
        }
    }

    pub const fn y_factor(self) -> i32 {
        match self {
            Self::NW | Self::N | Self::NE => -1,
            Self::W | Self::C | Self::E => 0,
            Self::SW | Self::S | Self::SE => 1,
        }
    }

    /// The point-reflected direction (`N` becomes `S`, `C` stays `C`).
    pub const fn opposite(self) -> Self {
        match self {
            Self::NW => Self::SE,
            Self::N => Self::S,
            Self::NE => Self::SW,
            Self::W => Self::E,
            Self::C => Self::C,
            Self::E => Self::W,
            Self::SW => Self::NE,
            Self::S => Self::N,
            Self::SE => Self::NW,
        }
    }

    /// Scales the direction's unit offset by `amount`.
    pub const fn offset(self, amount: i32) -> Point {
        Point::new(self.x_factor() * amount, self.y_factor() * amount)
    }
}

/// A fixed-pitch grid of slot positions, optionally shifted by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    offset: Point,
}

impl Grid {
    /// The grid anchored at the diagram's top-left corner.
    pub const GRID: Self = Self {
        offset: Point::ORIGIN,
    };

    pub const fn with_offset(offset: Point) -> Self {
        Self { offset }
    }

    pub const fn offset(self) -> Point {
        self.offset
    }

    /// Centre of the slot at logical `(x, y)`.
    ///
    /// Each step covers half a slot plus half a margin, so half-integer positions line up with
    /// the margins between slots.
    pub const fn grid(self, x: i32, y: i32) -> Point {
        Point::new(
            self.offset.x + SIDE_MARGIN_WIDTH + (SLOT_WIDTH + x * (SLOT_WIDTH + MARGIN_WIDTH)) / 2,
            self.offset.y + SIDE_MARGIN_WIDTH + (SLOT_WIDTH + y * (SLOT_WIDTH + MARGIN_WIDTH)) / 2,
        )
    }

    /// Midpoint of the margin next to the slot centred at `pos`.
    pub const fn margin(self, pos: Point, dir: Direction) -> Point {
        let amount = (SLOT_WIDTH + MARGIN_WIDTH) / 2;
        pos.translate(dir.x_factor() * amount, dir.y_factor() * amount)
    }

    /// Edge of the slot centred at `pos`.
    pub const fn edge(self, pos: Point, dir: Direction) -> Point {
        pos.translate(
            dir.x_factor() * SLOT_WIDTH / 2,
            dir.y_factor() * SLOT_WIDTH / 2,
        )
    }

    /// Edge of the big slot centred at `pos`.
    pub const fn big_edge(self, pos: Point, dir: Direction) -> Point {
        pos.translate(
            dir.x_factor() * BIG_SLOT_WIDTH / 2,
            dir.y_factor() * BIG_SLOT_WIDTH / 2,
        )
    }

    pub const fn edge_at(self, x: i32, y: i32, dir: Direction) -> Point {
        self.edge(self.grid(x, y), dir)
    }
}
