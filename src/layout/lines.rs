// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::grid::{Dimension, Direction, Point};
use crate::layout::LayoutError;
use crate::render::{Colour, DrawTarget};

/// A horizontal or vertical line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Result<Self, LayoutError> {
        if !start.is_orthogonal(end) {
            return Err(LayoutError::NonOrthogonalSegment { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Direction of travel from `start` to `end`; `C` for a zero-length segment.
    pub fn direction(&self) -> Direction {
        let dx = (self.end.x - self.start.x).signum();
        let dy = (self.end.y - self.start.y).signum();
        match (dx, dy) {
            (1, _) => Direction::E,
            (-1, _) => Direction::W,
            (_, 1) => Direction::S,
            (_, -1) => Direction::N,
            _ => Direction::C,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrow {
    pub position: Point,
    /// The way the arrowhead points.
    pub direction: Direction,
}

/// A set of connected line segments with optional arrowheads, drawn in one colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines {
    colour: Colour,
    segments: Vec<Segment>,
    arrows: Vec<Arrow>,
}

impl Lines {
    pub fn builder(start: Point) -> LinesBuilder {
        LinesBuilder {
            colour: Colour::GREY,
            pen: start,
            segments: Vec::new(),
            arrows: Vec::new(),
        }
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn dimension(&self) -> Dimension {
        self.segments
            .iter()
            .flat_map(|segment| [segment.start, segment.end])
            .chain(self.arrows.iter().map(|arrow| arrow.position))
            .map(|point| Dimension::covering(point.translate(1, 1)))
            .fold(Dimension::ZERO, Dimension::max)
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        for segment in &self.segments {
            target.draw_line(segment.start, segment.end, self.colour);
        }
        for arrow in &self.arrows {
            target.draw_arrowhead(arrow.position, arrow.direction, self.colour);
        }
    }
}

/// Pen-style builder: every added segment starts where the previous one ended.
#[derive(Debug, Clone)]
pub struct LinesBuilder {
    colour: Colour,
    pen: Point,
    segments: Vec<Segment>,
    arrows: Vec<Arrow>,
}

impl LinesBuilder {
    pub fn set_colour(&mut self, colour: Colour) -> &mut Self {
        self.colour = colour;
        self
    }

    /// Lifts the pen and puts it down at `point`.
    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.pen = point;
        self
    }

    pub fn pen(&self) -> Point {
        self.pen
    }

    pub fn add_segment(&mut self, to: Point) -> Result<&mut Self, LayoutError> {
        self.push_segment(to)?;
        Ok(self)
    }

    /// Segment ending in an arrowhead at `to`.
    pub fn add_arrow(&mut self, to: Point) -> Result<&mut Self, LayoutError> {
        let segment = self.push_segment(to)?;
        self.arrows.push(Arrow {
            position: to,
            direction: segment.direction(),
        });
        Ok(self)
    }

    /// Segment with an arrowhead at its start, pointing back at the pen's old position.
    pub fn add_reverse_arrow(&mut self, to: Point) -> Result<&mut Self, LayoutError> {
        let segment = self.push_segment(to)?;
        self.arrows.push(Arrow {
            position: segment.start,
            direction: segment.direction().opposite(),
        });
        Ok(self)
    }

    pub fn add_double_arrow(&mut self, to: Point) -> Result<&mut Self, LayoutError> {
        let segment = self.push_segment(to)?;
        self.arrows.push(Arrow {
            position: segment.start,
            direction: segment.direction().opposite(),
        });
        self.arrows.push(Arrow {
            position: to,
            direction: segment.direction(),
        });
        Ok(self)
    }

    fn push_segment(&mut self, to: Point) -> Result<Segment, LayoutError> {
        let segment = Segment::new(self.pen, to)?;
        self.segments.push(segment);
        self.pen = to;
        Ok(segment)
    }

    pub fn build(&self) -> Lines {
        Lines {
            colour: self.colour,
            segments: self.segments.clone(),
            arrows: self.arrows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Lines, Segment};
    use crate::layout::grid::{Dimension, Direction, Point};
    use crate::layout::LayoutError;

    #[test]
    fn diagonal_segments_are_rejected() {
        let err = Segment::new(Point::new(0, 0), Point::new(3, 4)).unwrap_err();
        assert!(matches!(err, LayoutError::NonOrthogonalSegment { .. }));
    }

    #[test]
    fn pen_follows_segments_and_arrows_point_along_travel() {
        let mut builder = Lines::builder(Point::new(10, 10));
        builder
            .add_segment(Point::new(10, 40))
            .expect("segment")
            .add_arrow(Point::new(50, 40))
            .expect("arrow")
            .move_to(Point::new(0, 0))
            .add_reverse_arrow(Point::new(0, 20))
            .expect("reverse arrow");
        let lines = builder.build();

        assert_eq!(lines.segments().len(), 3);
        assert_eq!(lines.segments()[1].start(), Point::new(10, 40));
        assert_eq!(lines.arrows()[0].direction, Direction::E);
        assert_eq!(lines.arrows()[0].position, Point::new(50, 40));
        assert_eq!(lines.arrows()[1].direction, Direction::N);
        assert_eq!(lines.arrows()[1].position, Point::new(0, 0));
    }

    #[test]
    fn double_arrow_adds_both_heads() {
        let mut builder = Lines::builder(Point::new(0, 5));
        builder.add_double_arrow(Point::new(30, 5)).expect("arrow");
        let lines = builder.build();
        let directions: Vec<Direction> = lines.arrows().iter().map(|arrow| arrow.direction).collect();
        assert_eq!(directions, vec![Direction::W, Direction::E]);
    }

    #[test]
    fn dimension_covers_every_point() {
        let mut builder = Lines::builder(Point::new(5, 5));
        builder.add_segment(Point::new(5, 60)).expect("segment");
        assert_eq!(builder.build().dimension(), Dimension::new(6, 61));
    }
}
