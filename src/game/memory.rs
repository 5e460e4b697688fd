// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FluidContainer, GameDatabase};
use crate::model::{
    AuxMode, Component, FluidComponent, FluidId, ItemComponent, ItemId, WILDCARD_DAMAGE,
};

const DEMO_JSON: &str = include_str!("demo.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<ItemId>,
}

/// A [`GameDatabase`] backed by plain in-memory tables, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryGameDatabase {
    items: BTreeMap<ItemId, String>,
    fluids: BTreeMap<FluidId, FluidRecord>,
    containers: Vec<FluidContainer>,
    ore_dictionary: BTreeMap<String, Vec<ItemComponent>>,
    mods: BTreeSet<String>,
}

impl MemoryGameDatabase {
    /// Small built-in data set: vanilla buckets and bottles, a few cells and ingots.
    pub fn demo() -> Result<Self, MemoryGameDatabaseError> {
        Self::from_json_str(DEMO_JSON)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, MemoryGameDatabaseError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, MemoryGameDatabaseError> {
        let raw = fs::read_to_string(path).map_err(|source| MemoryGameDatabaseError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn with_item(mut self, item: ItemId, name: impl Into<String>) -> Self {
        self.items.insert(item, name.into());
        self
    }

    pub fn with_fluid(
        mut self,
        fluid: FluidId,
        name: impl Into<String>,
        block: Option<ItemId>,
    ) -> Self {
        self.fluids.insert(
            fluid,
            FluidRecord {
                name: name.into(),
                block,
            },
        );
        self
    }

    pub fn with_container(mut self, container: FluidContainer) -> Self {
        self.containers.push(container);
        self
    }

    pub fn with_ore(mut self, name: impl Into<String>, entries: Vec<ItemComponent>) -> Self {
        self.ore_dictionary.insert(name.into(), entries);
        self
    }

    pub fn with_mod(mut self, mod_id: impl Into<String>) -> Self {
        self.mods.insert(mod_id.into());
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

fn ore_entry_matches(entry: &ItemComponent, item: &ItemComponent) -> bool {
    entry.item() == item.item()
        && (entry.damage() == item.damage() || entry.damage() == WILDCARD_DAMAGE)
}

impl GameDatabase for MemoryGameDatabase {
    fn item_name(&self, item: &ItemId) -> Option<String> {
        self.items.get(item).cloned()
    }

    fn fluid_name(&self, fluid: &FluidId) -> Option<String> {
        self.fluids.get(fluid).map(|record| record.name.clone())
    }

    fn fluid_contents(&self, component: &Component) -> Option<FluidComponent> {
        let item = match component {
            Component::Fluid(fluid) => return Some(fluid.without_aux()),
            Component::Item(item) => item,
        };

        let from_block = self.fluids.iter().find_map(|(fluid, record)| {
            (record.block.as_ref() == Some(item.item())).then(|| FluidComponent::new(fluid.clone()))
        });
        if from_block.is_some() {
            return from_block;
        }

        let queried = Component::Item(item.clone());
        self.containers
            .iter()
            .find(|container| {
                Component::Item(container.filled.clone()).eq_with(&queried, AuxMode::Ignore)
            })
            .map(|container| FluidComponent::new(container.fluid.clone()))
    }

    fn fluid_containers(&self, fluid: &FluidId) -> Vec<FluidContainer> {
        self.containers
            .iter()
            .filter(|container| &container.fluid == fluid)
            .cloned()
            .collect()
    }

    fn fluid_block(&self, fluid: &FluidId) -> Option<ItemComponent> {
        self.fluids
            .get(fluid)
            .and_then(|record| record.block.clone())
            .map(|block| ItemComponent::new(block, 0))
    }

    fn ore_names(&self, item: &ItemComponent) -> Vec<String> {
        self.ore_dictionary
            .iter()
            .filter(|(_, entries)| entries.iter().any(|entry| ore_entry_matches(entry, item)))
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn ore_entries(&self, name: &str) -> Vec<ItemComponent> {
        self.ore_dictionary.get(name).cloned().unwrap_or_default()
    }

    fn all_ore_names(&self) -> Vec<String> {
        self.ore_dictionary.keys().cloned().collect()
    }

    fn is_mod_loaded(&self, mod_id: &str) -> bool {
        self.mods.contains(mod_id)
    }

    fn find_components(&self, query: &str) -> Vec<Component> {
        let mut scored: Vec<(i64, &str, Component)> = Vec::new();
        for (item, name) in &self.items {
            if let Some(score) = fuzzy_score(query, name) {
                scored.push((score, name.as_str(), ItemComponent::new(item.clone(), 0).into()));
            }
        }
        for (fluid, record) in &self.fluids {
            if let Some(score) = fuzzy_score(query, &record.name) {
                scored.push((score, record.name.as_str(), FluidComponent::new(fluid.clone()).into()));
            }
        }

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.into_iter().map(|(_, _, component)| component).collect()
    }
}

/// Case-insensitive subsequence match weighted by edit similarity; `None` when `needle` is not
/// a subsequence of `haystack`.
fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let haystack = haystack.to_lowercase();

    let mut chars = needle.chars().peekable();
    let mut first = None;
    let mut last = 0usize;
    for (idx, ch) in haystack.chars().enumerate() {
        if chars.peek() == Some(&ch) {
            chars.next();
            first.get_or_insert(idx);
            last = idx;
        }
    }
    if chars.peek().is_some() {
        return None;
    }
    let first = first.unwrap_or(0);

    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let mut score = (ratio * 1000.0).round() as i64;
    score -= (last - first) as i64;
    if haystack == needle {
        score += 100_000;
    } else if haystack.contains(&needle) {
        score += 2_000;
    }
    Some(score)
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryGameDatabaseError {
    #[error("failed to read game database {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid game database json: {0}")]
    Json(#[from] serde_json::Error),
}
