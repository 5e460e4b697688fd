// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::config::Config;
use crate::game::GameDatabase;
use crate::model::component::Component;
use crate::model::display::DisplayComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColour {
    White,
    Gray,
    Aqua,
    Yellow,
    Red,
    LightPurple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextFormatting {
    pub colour: Option<TextColour>,
    pub bold: bool,
    pub italic: bool,
}

impl TextFormatting {
    pub const DEFAULT: Self = Self::coloured(None);
    pub const SLOT: Self = Self::coloured(Some(TextColour::Aqua));
    pub const INFO: Self = Self::coloured(Some(TextColour::Yellow));
    pub const URGENT: Self = Self::coloured(Some(TextColour::Red));
    pub const TRIVIAL: Self = Self::coloured(Some(TextColour::Gray));
    pub const SPECIAL: Self = Self::coloured(Some(TextColour::LightPurple));

    const fn coloured(colour: Option<TextColour>) -> Self {
        Self {
            colour,
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

impl Default for TextFormatting {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipLine {
    Text {
        text: String,
        formatting: TextFormatting,
    },
    Spacing,
    Component(DisplayComponent),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tooltip {
    lines: Vec<TooltipLine>,
}

impl Tooltip {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single-formatting tooltip; `text` may span several lines.
    pub fn create(text: impl AsRef<str>, formatting: TextFormatting) -> Self {
        Self::builder()
            .set_formatting(formatting)
            .add_text_line(text)
            .build()
    }

    pub fn builder() -> TooltipBuilder {
        TooltipBuilder::default()
    }

    pub fn lines(&self) -> &[TooltipLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the non-empty tooltips, separated by one spacing line.
    pub fn concat<'a>(tooltips: impl IntoIterator<Item = &'a Tooltip>) -> Self {
        let mut lines = Vec::new();
        for tooltip in tooltips.into_iter().filter(|tooltip| !tooltip.is_empty()) {
            if !lines.is_empty() {
                lines.push(TooltipLine::Spacing);
            }
            lines.extend(tooltip.lines.iter().cloned());
        }
        Self { lines }
    }

    /// Flattens the tooltip into display strings. Spacing lines become empty strings.
    pub fn plain_lines(&self, db: &dyn GameDatabase, config: &Config) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| match line {
                TooltipLine::Text { text, .. } => text.clone(),
                TooltipLine::Spacing => String::new(),
                TooltipLine::Component(display) => {
                    let name = display.component().description(db, config);
                    match display.badge(config) {
                        Some(badge) => format!("{badge} x {name}"),
                        None => name,
                    }
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipBuilder {
    lines: Vec<TooltipLine>,
    formatting: TextFormatting,
}

impl TooltipBuilder {
    /// Formatting applied to text lines added after this call.
    pub fn set_formatting(mut self, formatting: TextFormatting) -> Self {
        self.formatting = formatting;
        self
    }

    pub fn add_text_line(mut self, text: impl AsRef<str>) -> Self {
        for line in text.as_ref().split('\n') {
            self.lines.push(TooltipLine::Text {
                text: line.to_owned(),
                formatting: self.formatting,
            });
        }
        self
    }

    pub fn add_spacing(mut self) -> Self {
        self.lines.push(TooltipLine::Spacing);
        self
    }

    pub fn add_component(self, component: Component) -> Self {
        self.add_display_component(DisplayComponent::builder(component).build())
    }

    pub fn add_display_component(mut self, display: DisplayComponent) -> Self {
        self.lines.push(TooltipLine::Component(display));
        self
    }

    pub fn add_tooltip(mut self, tooltip: &Tooltip) -> Self {
        self.lines.extend(tooltip.lines.iter().cloned());
        self
    }

    pub fn build(self) -> Tooltip {
        Tooltip { lines: self.lines }
    }
}

#[cfg(test)]
mod tests {
    use super::{TextFormatting, Tooltip, TooltipLine};

    #[test]
    fn text_lines_split_on_newlines() {
        let tooltip = Tooltip::create("first\nsecond", TextFormatting::INFO);
        assert_eq!(tooltip.lines().len(), 2);
        let TooltipLine::Text { text, formatting } = &tooltip.lines()[1] else {
            panic!("expected text line");
        };
        assert_eq!(text, "second");
        assert_eq!(*formatting, TextFormatting::INFO);
    }

    #[test]
    fn concat_skips_empty_and_inserts_spacing() {
        let a = Tooltip::create("a", TextFormatting::SLOT);
        let b = Tooltip::create("b", TextFormatting::TRIVIAL);
        let joined = Tooltip::concat([&a, &Tooltip::empty(), &b]);

        assert_eq!(joined.lines().len(), 3);
        assert_eq!(joined.lines()[1], TooltipLine::Spacing);
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        assert!(Tooltip::concat([&Tooltip::empty()]).is_empty());
    }
}
