// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::{Canvas, CanvasError, Colour, DrawTarget};
use crate::config::Config;
use crate::diagram::{Diagram, DrawContext};
use crate::game::GameDatabase;
use crate::layout::grid::{Dimension, Direction, Point};
use crate::layout::{SlotStyle, Text};
use crate::model::{DisplayComponent, DisplayTransform, Tooltip};

/// Pixels covered by one character cell.
pub const CELL_WIDTH: i32 = 6;
pub const CELL_HEIGHT: i32 = 12;

const SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const OVERFLOW_SYMBOL: char = '#';

fn col(x: i32) -> i64 {
    i64::from(x.div_euclid(CELL_WIDTH))
}

fn row(y: i32) -> i64 {
    i64::from(y.div_euclid(CELL_HEIGHT))
}

/// Draws onto a character grid. Components are drawn as one-letter symbols that are explained
/// in a legend below the grid.
pub struct TextRenderer<'a> {
    canvas: Canvas,
    database: &'a dyn GameDatabase,
    config: &'a Config,
    symbols: BTreeMap<String, char>,
    legend: Vec<String>,
    tooltips: Vec<Vec<String>>,
}

impl<'a> TextRenderer<'a> {
    pub fn new(
        columns: usize,
        rows: usize,
        database: &'a dyn GameDatabase,
        config: &'a Config,
    ) -> Result<Self, CanvasError> {
        Ok(Self {
            canvas: Canvas::new(columns, rows)?,
            database,
            config,
            symbols: BTreeMap::new(),
            legend: Vec::new(),
            tooltips: Vec::new(),
        })
    }

    /// A renderer large enough for everything within `dimension` pixels.
    pub fn for_dimension(
        dimension: Dimension,
        database: &'a dyn GameDatabase,
        config: &'a Config,
    ) -> Result<Self, CanvasError> {
        let columns = usize::try_from(dimension.width.max(0) / CELL_WIDTH + 2).unwrap_or(0);
        let rows = usize::try_from(dimension.height.max(0) / CELL_HEIGHT + 2).unwrap_or(0);
        Self::new(columns, rows, database, config)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Legend entries in first-drawn order, e.g. `a = Iron Ingot [3]`.
    pub fn legend(&self) -> &[String] {
        &self.legend
    }

    fn symbol_for(&mut self, display: &DisplayComponent, badge: Option<&str>) -> char {
        let mut entry = display.component().description(self.database, self.config);
        if let Some(badge) = badge {
            entry.push_str(" [");
            entry.push_str(badge);
            entry.push(']');
        }
        if display.transform() == DisplayTransform::Ghost {
            entry.push_str(" (ghost)");
        }
        if let Some(symbol) = self.symbols.get(&entry) {
            return *symbol;
        }

        let symbol = SYMBOLS
            .chars()
            .nth(self.symbols.len())
            .unwrap_or(OVERFLOW_SYMBOL);
        self.legend.push(format!("{symbol} = {entry}"));
        self.symbols.insert(entry, symbol);
        symbol
    }

    /// Grid, then legend, then any tooltips, separated by blank lines.
    pub fn finish(self) -> String {
        let mut out = self.canvas.to_trimmed_string();
        if !self.legend.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.legend.join("\n"));
        }
        for tooltip in &self.tooltips {
            out.push_str("\n\n");
            out.push_str(&tooltip.join("\n"));
        }
        out
    }
}

impl DrawTarget for TextRenderer<'_> {
    fn draw_slot(&mut self, position: Point, _slot_width: i32, style: SlotStyle) {
        let (open, close) = match style {
            SlotStyle::Normal => ('[', ']'),
            SlotStyle::Big => ('{', '}'),
            SlotStyle::Hidden => return,
        };
        let (x, y) = (col(position.x), row(position.y));
        self.canvas.plot(x - 1, y, open);
        self.canvas.plot(x + 1, y, close);
    }

    fn draw_component(&mut self, position: Point, display: &DisplayComponent, badge: Option<&str>) {
        let symbol = self.symbol_for(display, badge);
        self.canvas.plot(col(position.x), row(position.y), symbol);
    }

    fn draw_line(&mut self, from: Point, to: Point, _colour: Colour) {
        let (x0, y0, x1, y1) = (col(from.x), row(from.y), col(to.x), row(to.y));
        if y0 == y1 {
            self.canvas.hline(x0, x1, y0);
        } else if x0 == x1 {
            self.canvas.vline(x0, y0, y1);
        } else {
            self.canvas.hline(x0, x1, y0);
            self.canvas.vline(x1, y0, y1);
        }
    }

    fn draw_arrowhead(&mut self, position: Point, direction: Direction, _colour: Colour) {
        let glyph = match direction {
            Direction::E => '>',
            Direction::W => '<',
            Direction::N => '^',
            Direction::S => 'v',
            _ => '*',
        };
        self.canvas.plot(col(position.x), row(position.y), glyph);
    }

    fn draw_text(&mut self, text: &Text) {
        let len = i64::try_from(text.text().chars().count()).unwrap_or(0);
        let start = col(text.position().x) - len / 2;
        self.canvas.write_str(start, row(text.position().y), text.text());
    }

    /// Hover highlights have no text form.
    fn draw_overlay(&mut self, _position: Point, _dimension: Dimension, _colour: Colour) {}

    fn draw_tooltip(&mut self, _mouse: Point, tooltip: &Tooltip) {
        self.tooltips
            .push(tooltip.plain_lines(self.database, self.config));
    }
}

/// Renders the background of `diagram` (lines, labels, slots, components) as text.
pub fn render_diagram_text(diagram: &Diagram, ctx: &DrawContext<'_>) -> Result<String, CanvasError> {
    let mut renderer = TextRenderer::for_dimension(diagram.dimension(), ctx.database, ctx.config)?;
    diagram.draw_background(ctx, &mut renderer);
    Ok(renderer.finish())
}

#[cfg(test)]
mod tests {
    use super::{render_diagram_text, TextRenderer};
    use crate::config::Config;
    use crate::diagram::{Diagram, DiagramState, DrawContext, Modifiers};
    use crate::game::MemoryGameDatabase;
    use crate::layout::grid::{Direction, Point};
    use crate::layout::{Layout, Lines, Slot, SlotStyle, Text};
    use crate::model::{DisplayComponent, ItemComponent, ItemId, SlotKey, Tooltip};
    use crate::render::{Colour, DrawTarget};

    fn iron() -> DisplayComponent {
        DisplayComponent::builder(ItemComponent::new(
            ItemId::new("minecraft:iron_ingot").expect("id"),
            0,
        ))
        .build()
    }

    #[test]
    fn components_share_symbols_per_description() {
        let db = MemoryGameDatabase::demo().expect("demo db");
        let config = Config::default();
        let mut renderer = TextRenderer::new(12, 2, &db, &config).expect("renderer");

        renderer.draw_slot(Point::new(12, 6), 18, SlotStyle::Normal);
        renderer.draw_component(Point::new(12, 6), &iron(), None);
        renderer.draw_slot(Point::new(30, 6), 18, SlotStyle::Big);
        renderer.draw_component(Point::new(30, 6), &iron(), Some("3"));
        renderer.draw_component(Point::new(48, 6), &iron(), None);

        assert_eq!(renderer.legend(), ["a = Iron Ingot", "b = Iron Ingot [3]"]);
        assert_eq!(
            renderer.finish(),
            " [a]{b}  a\n\na = Iron Ingot\nb = Iron Ingot [3]"
        );
    }

    #[test]
    fn lines_text_and_tooltips() {
        let db = MemoryGameDatabase::default();
        let config = Config::default();
        let mut renderer = TextRenderer::new(8, 3, &db, &config).expect("renderer");

        renderer.draw_line(Point::new(0, 18), Point::new(30, 18), Colour::GREY);
        renderer.draw_arrowhead(Point::new(36, 18), Direction::E, Colour::GREY);
        renderer.draw_text(&Text::builder("hi", Point::new(24, 0), Direction::S).build());
        renderer.draw_tooltip(Point::ORIGIN, &Tooltip::builder().add_text_line("tip").build());

        let text = renderer.finish();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "──────>");
        assert_eq!(lines.last().copied(), Some("tip"));
    }

    #[test]
    fn renders_a_whole_diagram() {
        let key = SlotKey::new("out").expect("key");
        let mut layout = Layout::builder();
        layout
            .put_slot(key.clone(), Slot::builder(Point::new(11, 11)).build())
            .expect("slot");
        let mut lines = Lines::builder(Point::new(20, 11));
        lines.add_arrow(Point::new(50, 11)).expect("arrow");
        layout.add_lines(lines.build());
        let layout = layout.build();

        let mut builder = Diagram::builder();
        builder.add_layout(&layout).expect("layout");
        builder.insert_into_slot(&key, iron()).expect("insert");
        let diagram = builder.build();

        let db = MemoryGameDatabase::demo().expect("demo db");
        let config = Config::default();
        let state = DiagramState::new();
        let ctx = DrawContext::new(&state, &config, &db, Modifiers::NONE);
        let text = render_diagram_text(&diagram, &ctx).expect("render");

        assert!(text.starts_with("[a]"));
        assert!(text.contains('>'));
        assert!(text.ends_with("a = Iron Ingot"));
    }
}
