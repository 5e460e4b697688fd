// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::{Config, GroupVisibility};
use crate::diagram::{CustomInteractable, Diagram};
use crate::game::SharedGameDatabase;
use crate::group::{DiagramGroup, DiagramGroupInfo};
use crate::layout::grid::{Direction, Grid, TOTAL_WIDTH};
use crate::layout::text::text_width;
use crate::layout::{Layout, LayoutError, SlotGroup, Text};
use crate::matcher::CustomDiagramMatcher;
use crate::model::{
    DisplayComponent, GroupId, ItemComponent, ItemId, SlotGroupKey, TextFormatting, Tooltip,
};
use crate::registry::{DiagramGenerator, GenerateError};

/// One diagram per ore dictionary name, listing the items registered under it.
///
/// Looking up an item shows the diagrams of every name it is registered under. Hidden unless
/// enabled in the configuration.
#[derive(Debug, Clone)]
pub struct OreDictionary {
    info: DiagramGroupInfo,
}

impl OreDictionary {
    pub fn new(group_id: GroupId) -> Result<Self, GenerateError> {
        let icon = ItemComponent::new(ItemId::new("minecraft:book")?, 0);
        let info = DiagramGroupInfo::builder("Ore Dictionary", group_id, icon, 2)
            .set_default_visibility(GroupVisibility::Disabled)
            .set_description(
                "Shows ore dictionary names and their registered items.\n\
                 Mostly useful for modpack development.",
            )
            .build();
        Ok(Self { info })
    }
}

impl DiagramGenerator for OreDictionary {
    fn info(&self) -> &DiagramGroupInfo {
        &self.info
    }

    fn generate(
        &self,
        database: &SharedGameDatabase,
        _config: &Config,
    ) -> Result<DiagramGroup, GenerateError> {
        let key = SlotGroupKey::new("entries")?;
        let mut by_name: BTreeMap<String, Arc<Diagram>> = BTreeMap::new();

        for name in database.all_ore_names() {
            let entries = database.ore_entries(&name);
            if entries.is_empty() {
                tracing::warn!(
                    group = %self.info.group_id(),
                    ore_name = %name,
                    "ore name has no entries, skipping"
                );
                continue;
            }

            let layout = name_layout(&name, &key)?;
            let mut builder = Diagram::builder();
            builder.add_layout(&layout)?;
            builder
                .auto_insert_into_slot_group(&key)?
                .insert_each_safe(
                    entries
                        .into_iter()
                        .map(|entry| DisplayComponent::builder(entry).build()),
                );
            by_name.insert(name, Arc::new(builder.build()));
        }

        let all: Vec<Arc<Diagram>> = by_name.values().cloned().collect();
        let database = Arc::clone(database);
        let matcher = CustomDiagramMatcher::new(all, move |_, component| {
            let Some(item) = component.as_item() else {
                return Vec::new();
            };
            database
                .ore_names(item)
                .iter()
                .filter_map(|name| by_name.get(name).cloned())
                .collect()
        });
        Ok(DiagramGroup::new(self.info.clone(), matcher))
    }
}

fn name_layout(name: &str, key: &SlotGroupKey) -> Result<Layout, LayoutError> {
    let small = text_width(name, false) > TOTAL_WIDTH - 4;
    let text = Text::builder(name, Grid::GRID.grid(6, 0), Direction::N)
        .set_small(small)
        .build();
    let label = CustomInteractable::builder(text)
        .set_tooltip(Tooltip::create("Ore dictionary name", TextFormatting::SLOT))
        .build();

    let mut layout = Layout::builder();
    layout.add_interactable(label).put_slot_group(
        key.clone(),
        SlotGroup::builder(9, 8, Grid::GRID.grid(6, 1), Direction::S).build()?,
    )?;
    Ok(layout.build())
}
