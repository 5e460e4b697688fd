// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The game database collaborator.
//!
//! The engine never talks to the game directly. Everything it needs to know about items,
//! fluids and dictionaries goes through [`GameDatabase`]; every lookup answers with a component
//! identity or an absent/empty result.

mod memory;

pub use memory::{MemoryGameDatabase, MemoryGameDatabaseError};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{Component, FluidComponent, FluidId, ItemComponent, ItemId};

/// A registered container item holding a fixed amount of one fluid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidContainer {
    pub fluid: FluidId,
    pub filled: ItemComponent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty: Option<ItemComponent>,
    pub capacity: i32,
}

/// A database handle that on-demand matchers can keep for the rest of the session.
pub type SharedGameDatabase = Arc<dyn GameDatabase + Send + Sync>;

pub trait GameDatabase {
    fn item_name(&self, item: &ItemId) -> Option<String>;

    fn fluid_name(&self, fluid: &FluidId) -> Option<String>;

    /// The fluid held by `component`: the fluid itself, the fluid of a fluid block, or the
    /// contents of a filled container.
    fn fluid_contents(&self, component: &Component) -> Option<FluidComponent>;

    /// Every container registered for `fluid`.
    fn fluid_containers(&self, fluid: &FluidId) -> Vec<FluidContainer>;

    /// The placeable block item of `fluid`, if it has one.
    fn fluid_block(&self, fluid: &FluidId) -> Option<ItemComponent>;

    /// Ore dictionary names `item` is registered under.
    fn ore_names(&self, item: &ItemComponent) -> Vec<String>;

    /// Items registered under the ore dictionary `name`.
    fn ore_entries(&self, name: &str) -> Vec<ItemComponent>;

    fn all_ore_names(&self) -> Vec<String>;

    fn is_mod_loaded(&self, mod_id: &str) -> bool;

    /// Items and fluids whose display name resembles `query`, best match first.
    fn find_components(&self, query: &str) -> Vec<Component>;
}
