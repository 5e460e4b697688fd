// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Entity model: ids, components, display decorations and tooltips.

pub mod component;
pub mod display;
pub mod ids;
pub mod tooltip;

pub use component::{
    AuxData, AuxMode, Component, ComponentKind, FluidComponent, FluidStack, ItemComponent,
    ItemStack, DEFAULT_FLUID_STACK_SIZE, DEFAULT_ITEM_STACK_SIZE, WILDCARD_DAMAGE,
};
pub use display::{format_amount, DisplayComponent, DisplayComponentBuilder, DisplayTransform};
pub use ids::{FluidId, GroupId, Id, IdError, ItemId, SlotGroupKey, SlotKey};
pub use tooltip::{TextColour, TextFormatting, Tooltip, TooltipBuilder, TooltipLine};
