// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use crate::config::Config;
use crate::diagram::{BuildError, Diagram};
use crate::game::{FluidContainer, GameDatabase, SharedGameDatabase};
use crate::group::{DiagramGroup, DiagramGroupInfo};
use crate::layout::grid::{Direction, Grid};
use crate::layout::{Layout, SlotGroup};
use crate::matcher::DynamicDiagramMatcher;
use crate::model::{
    format_amount, Component, DisplayComponent, GroupId, ItemComponent, ItemId, SlotGroupKey,
    TextFormatting, Tooltip,
};
use crate::registry::{DiagramGenerator, GenerateError};

/// Every registered container of a fluid, next to the fluid and its block.
///
/// Diagrams are built per lookup, so the group cannot list all of them.
#[derive(Debug, Clone)]
pub struct FluidContainers {
    info: DiagramGroupInfo,
}

impl FluidContainers {
    pub fn new(group_id: GroupId) -> Result<Self, GenerateError> {
        let icon = ItemComponent::new(ItemId::new("minecraft:water_bucket")?, 0);
        let info = DiagramGroupInfo::builder("Fluid Containers", group_id, icon, 2)
            .set_ignore_aux(false)
            .set_description("Shows every registered container of a fluid.")
            .build();
        Ok(Self { info })
    }
}

impl DiagramGenerator for FluidContainers {
    fn info(&self) -> &DiagramGroupInfo {
        &self.info
    }

    fn generate(
        &self,
        database: &SharedGameDatabase,
        _config: &Config,
    ) -> Result<DiagramGroup, GenerateError> {
        let layout = ContainerLayout::new()?;
        let database = Arc::clone(database);
        let group_id = self.info.group_id().clone();

        let matcher = DynamicDiagramMatcher::new(move |_, component| {
            match layout.diagram(database.as_ref(), component) {
                Ok(Some(diagram)) => vec![Arc::new(diagram)],
                Ok(None) => Vec::new(),
                Err(error) => {
                    tracing::error!(group = %group_id, %error, "failed to build fluid container diagram");
                    Vec::new()
                }
            }
        });
        Ok(DiagramGroup::new(self.info.clone(), matcher))
    }
}

#[derive(Debug, Clone)]
struct ContainerLayout {
    layout: Layout,
    fluids: SlotGroupKey,
    containers: SlotGroupKey,
}

impl ContainerLayout {
    fn new() -> Result<Self, GenerateError> {
        let fluids = SlotGroupKey::new("fluids")?;
        let containers = SlotGroupKey::new("containers")?;

        let mut layout = Layout::builder();
        layout
            .put_slot_group(
                fluids.clone(),
                SlotGroup::builder(1, 6, Grid::GRID.grid(1, 0), Direction::S).build()?,
            )?
            .put_slot_group(
                containers.clone(),
                SlotGroup::builder(6, 6, Grid::GRID.grid(3, 0), Direction::SE)
                    .set_default_tooltip(Tooltip::create("Fluid containers", TextFormatting::SLOT))
                    .build()?,
            )?;

        Ok(Self {
            layout: layout.build(),
            fluids,
            containers,
        })
    }

    /// `None` when `component` holds no fluid.
    fn diagram(
        &self,
        database: &dyn GameDatabase,
        component: &Component,
    ) -> Result<Option<Diagram>, BuildError> {
        let Some(fluid) = database.fluid_contents(component) else {
            return Ok(None);
        };
        let containers: Vec<DisplayComponent> = database
            .fluid_containers(fluid.fluid())
            .iter()
            .map(container_display)
            .collect();

        let mut builder = Diagram::builder();
        builder.add_layout(&self.layout)?;
        builder
            .auto_insert_into_slot_group(&self.containers)?
            .insert_each_safe(containers);

        {
            let mut fluids = builder.auto_insert_into_slot_group(&self.fluids)?;
            fluids.insert_into_next_slot(
                DisplayComponent::builder(fluid.clone())
                    .set_additional_tooltip(Tooltip::create("Fluid", TextFormatting::SLOT))
                    .build(),
            )?;
            if let Some(block) = database.fluid_block(fluid.fluid()) {
                fluids.insert_into_next_slot(
                    DisplayComponent::builder(block)
                        .set_additional_tooltip(Tooltip::create("Fluid block", TextFormatting::SLOT))
                        .build(),
                )?;
            }
        }

        Ok(Some(builder.build()))
    }
}

fn container_display(container: &FluidContainer) -> DisplayComponent {
    let mut tooltip = Tooltip::builder()
        .set_formatting(TextFormatting::INFO)
        .add_text_line(format!("holds {} L", format_amount(container.capacity)));
    if let Some(empty) = &container.empty {
        tooltip = tooltip
            .set_formatting(TextFormatting::TRIVIAL)
            .add_text_line("empties into:")
            .add_component(Component::from(empty.clone()));
    }
    DisplayComponent::builder(container.filled.clone())
        .set_additional_tooltip(tooltip.build())
        .build()
}
