// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Identities of the things that can appear in a diagram.
//!
//! A [`Component`] is either an item or a fluid. Components are immutable values and freely
//! cloned; the only owner-sensitive data they carry is an optional [`AuxData`] blob (the host's
//! per-stack tag payload). Whether that blob takes part in comparisons is never implicit:
//! default `Eq`/`Hash` respect it, and code that wants to ignore it says so with [`AuxMode`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

use crate::config::Config;
use crate::game::GameDatabase;
use crate::model::ids::{FluidId, ItemId};

/// Damage value that matches any damage of an item.
pub const WILDCARD_DAMAGE: i32 = 32767;
/// Stack size implied for an item when none is given.
pub const DEFAULT_ITEM_STACK_SIZE: i32 = 1;
/// Amount (in millibuckets) implied for a fluid when none is given.
pub const DEFAULT_FLUID_STACK_SIZE: i32 = 1000;

/// Opaque per-stack auxiliary payload (serialized tag data on the host side).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuxData(SmolStr);

impl AuxData {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(SmolStr::new(raw.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuxData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AuxData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AuxData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// How auxiliary data participates in a comparison or index insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxMode {
    /// Aux data is part of the identity.
    Respect,
    /// Aux data is stripped before comparing.
    Ignore,
}

fn default_item_size() -> i32 {
    DEFAULT_ITEM_STACK_SIZE
}

fn default_fluid_amount() -> i32 {
    DEFAULT_FLUID_STACK_SIZE
}

/// An item stack handle as handed over by the game database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemId,
    #[serde(default)]
    pub damage: i32,
    #[serde(default = "default_item_size")]
    pub size: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux: Option<AuxData>,
}

impl ItemStack {
    pub fn new(item: ItemId, damage: i32, size: i32) -> Self {
        Self {
            item,
            damage,
            size,
            aux: None,
        }
    }

    pub fn with_aux(mut self, aux: AuxData) -> Self {
        self.aux = Some(aux);
        self
    }
}

/// A fluid stack handle as handed over by the game database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidStack {
    pub fluid: FluidId,
    #[serde(default = "default_fluid_amount")]
    pub amount: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux: Option<AuxData>,
}

impl FluidStack {
    pub fn new(fluid: FluidId, amount: i32) -> Self {
        Self {
            fluid,
            amount,
            aux: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemComponent {
    item: ItemId,
    damage: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aux: Option<AuxData>,
}

impl ItemComponent {
    pub fn new(item: ItemId, damage: i32) -> Self {
        Self {
            item,
            damage,
            aux: None,
        }
    }

    pub fn with_aux(item: ItemId, damage: i32, aux: AuxData) -> Self {
        Self {
            item,
            damage,
            aux: Some(aux),
        }
    }

    /// Builds a component from a stack, discarding aux data.
    ///
    /// Returns `None` for empty stacks.
    pub fn create(stack: &ItemStack) -> Option<Self> {
        if stack.size <= 0 {
            return None;
        }
        Some(Self::new(stack.item.clone(), stack.damage))
    }

    /// Builds a component from a stack, keeping its aux data.
    pub fn create_with_aux(stack: &ItemStack) -> Option<Self> {
        let mut component = Self::create(stack)?;
        component.aux = stack.aux.clone();
        Some(component)
    }

    pub fn item(&self) -> &ItemId {
        &self.item
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn aux(&self) -> Option<&AuxData> {
        self.aux.as_ref()
    }

    pub fn is_wildcard(&self) -> bool {
        self.damage == WILDCARD_DAMAGE
    }

    pub fn without_aux(&self) -> Self {
        Self::new(self.item.clone(), self.damage)
    }

    pub fn stack(&self, size: i32) -> ItemStack {
        ItemStack {
            item: self.item.clone(),
            damage: self.damage,
            size,
            aux: self.aux.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FluidComponent {
    fluid: FluidId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aux: Option<AuxData>,
}

impl FluidComponent {
    pub fn new(fluid: FluidId) -> Self {
        Self { fluid, aux: None }
    }

    /// Builds a component from a stack, discarding aux data.
    ///
    /// Returns `None` for empty stacks.
    pub fn create(stack: &FluidStack) -> Option<Self> {
        if stack.amount <= 0 {
            return None;
        }
        Some(Self::new(stack.fluid.clone()))
    }

    pub fn create_with_aux(stack: &FluidStack) -> Option<Self> {
        let mut component = Self::create(stack)?;
        component.aux = stack.aux.clone();
        Some(component)
    }

    pub fn fluid(&self) -> &FluidId {
        &self.fluid
    }

    pub fn aux(&self) -> Option<&AuxData> {
        self.aux.as_ref()
    }

    pub fn without_aux(&self) -> Self {
        Self::new(self.fluid.clone())
    }

    pub fn stack(&self, amount: i32) -> FluidStack {
        FluidStack {
            fluid: self.fluid.clone(),
            amount,
            aux: self.aux.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Item,
    Fluid,
}

/// Tagged identity of an item-like or fluid-like game object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    Item(ItemComponent),
    Fluid(FluidComponent),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Item(_) => ComponentKind::Item,
            Self::Fluid(_) => ComponentKind::Fluid,
        }
    }

    pub fn as_item(&self) -> Option<&ItemComponent> {
        match self {
            Self::Item(item) => Some(item),
            Self::Fluid(_) => None,
        }
    }

    pub fn as_fluid(&self) -> Option<&FluidComponent> {
        match self {
            Self::Fluid(fluid) => Some(fluid),
            Self::Item(_) => None,
        }
    }

    pub fn aux(&self) -> Option<&AuxData> {
        match self {
            Self::Item(item) => item.aux(),
            Self::Fluid(fluid) => fluid.aux(),
        }
    }

    pub fn has_aux(&self) -> bool {
        self.aux().is_some()
    }

    pub fn without_aux(&self) -> Self {
        match self {
            Self::Item(item) => Self::Item(item.without_aux()),
            Self::Fluid(fluid) => Self::Fluid(fluid.without_aux()),
        }
    }

    /// Returns the identity used as an index key under `mode`.
    pub fn normalized(&self, mode: AuxMode) -> Self {
        match mode {
            AuxMode::Respect => self.clone(),
            AuxMode::Ignore => self.without_aux(),
        }
    }

    /// Compares two components under an explicit aux-data mode.
    pub fn eq_with(&self, other: &Self, mode: AuxMode) -> bool {
        match mode {
            AuxMode::Respect => self == other,
            AuxMode::Ignore => match (self, other) {
                (Self::Item(a), Self::Item(b)) => a.item == b.item && a.damage == b.damage,
                (Self::Fluid(a), Self::Fluid(b)) => a.fluid == b.fluid,
                _ => false,
            },
        }
    }

    pub fn default_stack_size(&self) -> i32 {
        match self {
            Self::Item(_) => DEFAULT_ITEM_STACK_SIZE,
            Self::Fluid(_) => DEFAULT_FLUID_STACK_SIZE,
        }
    }

    /// Raw id, e.g. `minecraft:iron_ingot`.
    pub fn raw_id(&self) -> &str {
        match self {
            Self::Item(item) => item.item.as_str(),
            Self::Fluid(fluid) => fluid.fluid.as_str(),
        }
    }

    /// Human-readable name, with the raw id appended when `show_ids` is on.
    pub fn description(&self, db: &dyn GameDatabase, config: &Config) -> String {
        match self {
            Self::Item(item) => {
                let name = db
                    .item_name(&item.item)
                    .unwrap_or_else(|| item.item.to_string());
                if config.show_ids {
                    format!("{name} ({}:{})", item.item, item.damage)
                } else {
                    name
                }
            }
            Self::Fluid(fluid) => {
                let name = db
                    .fluid_name(&fluid.fluid)
                    .unwrap_or_else(|| fluid.fluid.to_string());
                if config.show_ids {
                    format!("{name} ({})", fluid.fluid)
                } else {
                    name
                }
            }
        }
    }
}

impl From<ItemComponent> for Component {
    fn from(value: ItemComponent) -> Self {
        Self::Item(value)
    }
}

impl From<FluidComponent> for Component {
    fn from(value: FluidComponent) -> Self {
        Self::Fluid(value)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(item) => write!(f, "item {}:{}", item.item, item.damage)?,
            Self::Fluid(fluid) => write!(f, "fluid {}", fluid.fluid)?,
        }
        if let Some(aux) = self.aux() {
            write!(f, " {{{aux}}}")?;
        }
        Ok(())
    }
}
