// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use crate::config::Config;
use crate::diagram::DrawContext;
use crate::model::component::{Component, FluidComponent, FluidStack, ItemComponent, ItemStack};
use crate::model::tooltip::{TextFormatting, Tooltip};

/// How a component is drawn before badges and overlays are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayTransform {
    #[default]
    Plain,
    /// Drawn translucent; marks reference entries that are not really present.
    Ghost,
}

/// A component plus the decorations of one particular occurrence in a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayComponent {
    component: Component,
    stack_size: Option<i32>,
    additional_info: Option<SmolStr>,
    additional_tooltip: Tooltip,
    transform: DisplayTransform,
}

impl DisplayComponent {
    pub fn builder(component: impl Into<Component>) -> DisplayComponentBuilder {
        DisplayComponentBuilder {
            component: component.into(),
            stack_size: None,
            additional_info: None,
            additional_tooltip: Tooltip::empty(),
            transform: DisplayTransform::Plain,
        }
    }

    /// Builder seeded with the stack's size; `None` for empty stacks.
    pub fn builder_for_item(stack: &ItemStack) -> Option<DisplayComponentBuilder> {
        let component = ItemComponent::create(stack)?;
        Some(Self::builder(component).set_stack_size(stack.size))
    }

    pub fn builder_for_fluid(stack: &FluidStack) -> Option<DisplayComponentBuilder> {
        let component = FluidComponent::create(stack)?;
        Some(Self::builder(component).set_stack_size(stack.amount))
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn stack_size(&self) -> Option<i32> {
        self.stack_size
    }

    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    pub fn additional_tooltip(&self) -> &Tooltip {
        &self.additional_tooltip
    }

    pub fn transform(&self) -> DisplayTransform {
        self.transform
    }

    /// Short text drawn over the component's corner, if any.
    pub fn badge(&self, config: &Config) -> Option<String> {
        if let Some(info) = &self.additional_info {
            return Some(info.to_string());
        }
        match self.stack_size {
            Some(1) if !config.show_stack_size_one => None,
            Some(size) => Some(format_amount(size)),
            None => None,
        }
    }

    /// Name, stack size and aux-data lines for this occurrence.
    pub fn description_tooltip(&self, ctx: &DrawContext<'_>) -> Tooltip {
        let mut builder = Tooltip::builder()
            .add_text_line(self.component.description(ctx.database, ctx.config));

        if let Some(size) = self.stack_size {
            let unit = match self.component {
                Component::Item(_) => "",
                Component::Fluid(_) => " L",
            };
            builder = builder
                .set_formatting(TextFormatting::INFO)
                .add_text_line(format!("stack size: {}{unit}", format_amount(size)));
        }

        if let Some(aux) = self.component.aux() {
            builder = builder.set_formatting(TextFormatting::TRIVIAL);
            builder = if ctx.modifiers.shift {
                builder.add_text_line(format!("aux data: {aux}"))
            } else {
                builder.add_text_line("has aux data (hold shift)")
            };
        }

        builder.build()
    }
}

#[derive(Debug, Clone)]
pub struct DisplayComponentBuilder {
    component: Component,
    stack_size: Option<i32>,
    additional_info: Option<SmolStr>,
    additional_tooltip: Tooltip,
    transform: DisplayTransform,
}

impl DisplayComponentBuilder {
    pub fn set_stack_size(mut self, size: i32) -> Self {
        self.stack_size = Some(size);
        self
    }

    pub fn clear_stack_size(mut self) -> Self {
        self.stack_size = None;
        self
    }

    pub fn set_additional_info(mut self, info: impl AsRef<str>) -> Self {
        self.additional_info = Some(SmolStr::new(info.as_ref()));
        self
    }

    pub fn set_additional_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.additional_tooltip = tooltip;
        self
    }

    pub fn set_transform(mut self, transform: DisplayTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn build(self) -> DisplayComponent {
        DisplayComponent {
            component: self.component,
            stack_size: self.stack_size,
            additional_info: self.additional_info,
            additional_tooltip: self.additional_tooltip,
            transform: self.transform,
        }
    }
}

impl From<Component> for DisplayComponent {
    fn from(value: Component) -> Self {
        Self::builder(value).build()
    }
}

/// Formats an amount for a badge: plain below 10k, then `k` and `M` suffixes.
pub fn format_amount(amount: i32) -> String {
    let mut buffer = itoa::Buffer::new();
    let magnitude = amount.unsigned_abs();
    let (value, suffix) = if magnitude < 10_000 {
        (amount, "")
    } else if magnitude < 10_000_000 {
        (amount / 1_000, "k")
    } else {
        (amount / 1_000_000, "M")
    };
    let mut out = String::from(buffer.format(value));
    out.push_str(suffix);
    out
}
