// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawable, hit-testable screen elements.
//!
//! Interactions never act on the host directly: [`Interactable::interact`] returns an
//! [`Interaction`] describing what the host should do (open a lookup, bookmark, jump to a
//! group), and the host integration layer carries it out.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::diagram::state::DrawContext;
use crate::group::DiagramGroupInfo;
use crate::layout::grid::{Dimension, Point, BIG_SLOT_WIDTH, SLOT_WIDTH};
use crate::layout::{ComponentLabel, Label, Slot, SlotStyle, Text};
use crate::model::{Component, DisplayComponent, GroupId, TextFormatting, Tooltip};
use crate::render::{Colour, DrawTarget};

/// Lookup direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecipeType {
    /// How to obtain the queried object.
    Crafting,
    /// What the queried object is used for.
    Usage,
    /// Not a lookup; only reachable through an interaction.
    Bookmark,
}

impl RecipeType {
    /// Recipe types that matchers index diagrams under.
    pub const VALID: [Self; 2] = [Self::Crafting, Self::Usage];

    pub fn is_lookup(self) -> bool {
        matches!(self, Self::Crafting | Self::Usage)
    }
}

/// What the host should do in response to a click or key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Lookup {
        recipe_type: RecipeType,
        component: Component,
    },
    Bookmark(Component),
    ShowGroup {
        id: GroupId,
        recipe_type: RecipeType,
    },
}

impl Interaction {
    /// Lookup for lookup types, bookmark for items; fluids cannot be bookmarked.
    pub fn for_component(recipe_type: RecipeType, component: &Component) -> Option<Self> {
        match recipe_type {
            RecipeType::Crafting | RecipeType::Usage => Some(Self::Lookup {
                recipe_type,
                component: component.clone(),
            }),
            RecipeType::Bookmark => match component {
                Component::Item(_) => Some(Self::Bookmark(component.clone())),
                Component::Fluid(_) => None,
            },
        }
    }
}

/// One or more components sharing a slot, shown one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveComponentGroup {
    position: Point,
    slot_width: i32,
    style: SlotStyle,
    components: SmallVec<[DisplayComponent; 1]>,
    slot_tooltip: Tooltip,
}

impl InteractiveComponentGroup {
    /// `None` when `components` is empty.
    pub fn new(slot: &Slot, components: impl IntoIterator<Item = DisplayComponent>) -> Option<Self> {
        let components: SmallVec<[DisplayComponent; 1]> = components.into_iter().collect();
        if components.is_empty() {
            return None;
        }
        Some(Self {
            position: slot.position(),
            slot_width: slot.slot_width(),
            style: slot.style(),
            components,
            slot_tooltip: slot.tooltip().clone(),
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::square(self.slot_width)
    }

    pub fn components(&self) -> &[DisplayComponent] {
        &self.components
    }

    pub fn slot_tooltip(&self) -> &Tooltip {
        &self.slot_tooltip
    }

    pub fn current_index(&self, ctx: &DrawContext<'_>) -> usize {
        ctx.state.cycle_index(self.components.len())
    }

    pub fn current_component(&self, ctx: &DrawContext<'_>) -> &DisplayComponent {
        &self.components[self.current_index(ctx)]
    }

    fn cycle_tooltip(&self, ctx: &DrawContext<'_>) -> Tooltip {
        let count = self.components.len();
        if count <= 1 {
            return Tooltip::empty();
        }

        let mut builder = Tooltip::builder()
            .set_formatting(TextFormatting::TRIVIAL)
            .add_text_line(format!(
                "cycle index {}/{}",
                self.current_index(ctx) + 1,
                count
            ));
        if !ctx.modifiers.shift {
            return builder.add_text_line("hold shift to list all").build();
        }

        let shown = count.min(ctx.config.tooltip_max_cycle_count);
        for display in &self.components[..shown] {
            builder = builder.add_display_component(display.clone());
        }
        if count > shown {
            builder = builder.add_text_line(format!("... and {} more", count - shown));
        }
        builder.build()
    }

    pub fn tooltip(&self, ctx: &DrawContext<'_>) -> Tooltip {
        let current = self.current_component(ctx);
        Tooltip::concat([
            &current.description_tooltip(ctx),
            &self.slot_tooltip,
            current.additional_tooltip(),
            &self.cycle_tooltip(ctx),
        ])
    }

    pub fn draw(&self, ctx: &DrawContext<'_>, target: &mut dyn DrawTarget) {
        if self.style != SlotStyle::Hidden {
            target.draw_slot(self.position, self.slot_width, self.style);
        }
        let current = self.current_component(ctx);
        let badge = current.badge(ctx.config);
        target.draw_component(self.position, current, badge.as_deref());
    }

    pub fn interact(&self, ctx: &DrawContext<'_>, recipe_type: RecipeType) -> Option<Interaction> {
        Interaction::for_component(recipe_type, self.current_component(ctx).component())
    }
}

pub type InteractionFn = Arc<dyn Fn(RecipeType) -> Option<Interaction> + Send + Sync>;

/// What clicking a [`CustomInteractable`] does.
#[derive(Clone, Default)]
pub enum CustomAction {
    #[default]
    None,
    ShowGroup(GroupId),
    Lookup(Component),
    Callback(InteractionFn),
}

impl fmt::Debug for CustomAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::ShowGroup(id) => f.debug_tuple("ShowGroup").field(id).finish(),
            Self::Lookup(component) => f.debug_tuple("Lookup").field(component).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// A button or label with arbitrary tooltip and click behavior.
#[derive(Debug, Clone)]
pub struct CustomInteractable {
    label: Label,
    tooltip: Tooltip,
    action: CustomAction,
    background: Option<SlotStyle>,
    overlay: Colour,
}

impl CustomInteractable {
    pub fn builder(label: impl Into<Label>) -> CustomInteractableBuilder {
        CustomInteractableBuilder {
            label: label.into(),
            tooltip: Tooltip::empty(),
            action: CustomAction::None,
            background: None,
            overlay: Colour::OVERLAY_WHITE,
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn action(&self) -> &CustomAction {
        &self.action
    }

    pub fn position(&self) -> Point {
        self.label.position()
    }

    pub fn dimension(&self) -> Dimension {
        let label = self.label.dimension();
        match self.background {
            Some(SlotStyle::Big) => label.max(Dimension::square(BIG_SLOT_WIDTH)),
            Some(SlotStyle::Normal) => label.max(Dimension::square(SLOT_WIDTH)),
            Some(SlotStyle::Hidden) | None => label,
        }
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        if let Some(style) = self.background {
            let width = match style {
                SlotStyle::Big => BIG_SLOT_WIDTH,
                SlotStyle::Normal | SlotStyle::Hidden => SLOT_WIDTH,
            };
            if style != SlotStyle::Hidden {
                target.draw_slot(self.position(), width, style);
            }
        }
        self.label.draw(target);
    }

    pub fn interact(&self, recipe_type: RecipeType) -> Option<Interaction> {
        match &self.action {
            CustomAction::None => None,
            CustomAction::ShowGroup(id) if recipe_type.is_lookup() => Some(Interaction::ShowGroup {
                id: id.clone(),
                recipe_type,
            }),
            CustomAction::ShowGroup(_) => None,
            CustomAction::Lookup(component) => Interaction::for_component(recipe_type, component),
            CustomAction::Callback(callback) => callback(recipe_type),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CustomInteractableBuilder {
    label: Label,
    tooltip: Tooltip,
    action: CustomAction,
    background: Option<SlotStyle>,
    overlay: Colour,
}

impl CustomInteractableBuilder {
    pub fn set_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn set_action(mut self, action: CustomAction) -> Self {
        self.action = action;
        self
    }

    pub fn set_callback(
        self,
        callback: impl Fn(RecipeType) -> Option<Interaction> + Send + Sync + 'static,
    ) -> Self {
        self.set_action(CustomAction::Callback(Arc::new(callback)))
    }

    pub fn set_background(mut self, style: SlotStyle) -> Self {
        self.background = Some(style);
        self
    }

    pub fn set_overlay(mut self, colour: Colour) -> Self {
        self.overlay = colour;
        self
    }

    pub fn build(self) -> CustomInteractable {
        CustomInteractable {
            label: self.label,
            tooltip: self.tooltip,
            action: self.action,
            background: self.background,
            overlay: self.overlay,
        }
    }
}

/// Button showing the group's icon that opens the group's full diagram listing.
pub fn all_diagrams_button(info: &DiagramGroupInfo, position: Point) -> CustomInteractable {
    let icon = DisplayComponent::builder(info.icon().clone()).build();
    CustomInteractable::builder(ComponentLabel::new(icon, position))
        .set_tooltip(
            Tooltip::builder()
                .set_formatting(TextFormatting::SPECIAL)
                .add_text_line(info.group_name())
                .set_formatting(TextFormatting::INFO)
                .add_text_line("show all diagrams")
                .build(),
        )
        .set_action(CustomAction::ShowGroup(info.group_id().clone()))
        .set_background(SlotStyle::Big)
        .set_overlay(Colour::OVERLAY_BLUE)
        .build()
}

/// Anything a diagram is composed of.
#[derive(Debug, Clone)]
pub enum Interactable {
    ComponentGroup(InteractiveComponentGroup),
    Slot(Slot),
    Custom(CustomInteractable),
    Label(Label),
}

impl Interactable {
    pub fn position(&self) -> Point {
        match self {
            Self::ComponentGroup(group) => group.position(),
            Self::Slot(slot) => slot.position(),
            Self::Custom(custom) => custom.position(),
            Self::Label(label) => label.position(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::ComponentGroup(group) => group.dimension(),
            Self::Slot(slot) => slot.dimension(),
            Self::Custom(custom) => custom.dimension(),
            Self::Label(label) => label.dimension(),
        }
    }

    /// Half-open bounding box test around the centre position.
    pub fn contains(&self, point: Point) -> bool {
        let position = self.position();
        let dimension = self.dimension();
        let left = position.x - dimension.width / 2;
        let top = position.y - dimension.height / 2;
        point.x >= left
            && point.x < left + dimension.width
            && point.y >= top
            && point.y < top + dimension.height
    }

    pub fn components(&self) -> &[DisplayComponent] {
        match self {
            Self::ComponentGroup(group) => group.components(),
            Self::Label(Label::Component(label)) => std::slice::from_ref(label.component()),
            Self::Custom(custom) => match custom.label() {
                Label::Component(label) => std::slice::from_ref(label.component()),
                Label::Text(_) => &[],
            },
            Self::Slot(_) | Self::Label(Label::Text(_)) => &[],
        }
    }

    pub fn draw(&self, ctx: &DrawContext<'_>, target: &mut dyn DrawTarget) {
        match self {
            Self::ComponentGroup(group) => group.draw(ctx, target),
            Self::Slot(slot) => slot.draw(target),
            Self::Custom(custom) => custom.draw(target),
            Self::Label(label) => label.draw(target),
        }
    }

    /// Hover highlight.
    pub fn draw_overlay(&self, target: &mut dyn DrawTarget) {
        let colour = match self {
            Self::Custom(custom) => custom.overlay,
            _ => Colour::OVERLAY_WHITE,
        };
        target.draw_overlay(self.position(), self.dimension(), colour);
    }

    pub fn tooltip(&self, ctx: &DrawContext<'_>) -> Tooltip {
        match self {
            Self::ComponentGroup(group) => group.tooltip(ctx),
            Self::Slot(slot) => slot.tooltip().clone(),
            Self::Custom(custom) => custom.tooltip.clone(),
            Self::Label(Label::Component(label)) => Tooltip::concat([
                &label.component().description_tooltip(ctx),
                label.component().additional_tooltip(),
            ]),
            Self::Label(Label::Text(_)) => Tooltip::empty(),
        }
    }

    pub fn draw_tooltip(&self, ctx: &DrawContext<'_>, target: &mut dyn DrawTarget, mouse: Point) {
        let tooltip = self.tooltip(ctx);
        if !tooltip.is_empty() {
            target.draw_tooltip(mouse, &tooltip);
        }
    }

    pub fn interact(&self, ctx: &DrawContext<'_>, recipe_type: RecipeType) -> Option<Interaction> {
        match self {
            Self::ComponentGroup(group) => group.interact(ctx, recipe_type),
            Self::Slot(_) | Self::Label(Label::Text(_)) => None,
            Self::Custom(custom) => custom.interact(recipe_type),
            Self::Label(Label::Component(label)) => {
                Interaction::for_component(recipe_type, label.component().component())
            }
        }
    }
}

impl From<InteractiveComponentGroup> for Interactable {
    fn from(value: InteractiveComponentGroup) -> Self {
        Self::ComponentGroup(value)
    }
}

impl From<Slot> for Interactable {
    fn from(value: Slot) -> Self {
        Self::Slot(value)
    }
}

impl From<CustomInteractable> for Interactable {
    fn from(value: CustomInteractable) -> Self {
        Self::Custom(value)
    }
}

impl From<Label> for Interactable {
    fn from(value: Label) -> Self {
        Self::Label(value)
    }
}

impl From<Text> for Interactable {
    fn from(value: Text) -> Self {
        Self::Label(Label::Text(value))
    }
}
