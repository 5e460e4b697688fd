// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use super::{relative_mouse, DiagramGroup, DiagramGroupInfo, HostGui, HostKey, LookupQuery};
use crate::config::{Config, GroupVisibility};
use crate::diagram::{Diagram, Interaction, Modifiers, RecipeType};
use crate::game::MemoryGameDatabase;
use crate::layout::grid::{Grid, Point};
use crate::layout::{Layout, Slot};
use crate::matcher::ComponentDiagramMatcher;
use crate::model::{
    AuxData, AuxMode, Component, DisplayComponent, GroupId, ItemComponent, ItemId, ItemStack,
    SlotKey,
};

const GROUP_ID: &str = "slotgrid.diagramgroup.test";

fn iron() -> ItemComponent {
    ItemComponent::new(ItemId::new("minecraft:iron_ingot").expect("id"), 0)
}

fn info() -> DiagramGroupInfo {
    DiagramGroupInfo::builder("Test", GroupId::new(GROUP_ID).expect("id"), iron(), 2).build()
}

fn filled_diagram(component: &ItemComponent) -> Arc<Diagram> {
    let key = SlotKey::new("out").expect("key");
    let mut layout = Layout::builder();
    layout
        .put_slot(key.clone(), Slot::builder(Grid::GRID.grid(0, 0)).build())
        .expect("slot");
    let layout = layout.build();

    let mut builder = Diagram::builder();
    builder.add_layout(&layout).expect("layout");
    builder
        .insert_into_slot(&key, DisplayComponent::builder(component.clone()).build())
        .expect("insert");
    Arc::new(builder.build())
}

fn group() -> DiagramGroup {
    let mut builder = ComponentDiagramMatcher::builder();
    builder
        .add_diagram(filled_diagram(&iron()))
        .add_component(RecipeType::Crafting, iron(), AuxMode::Ignore);
    builder.add_diagram(Diagram::builder().build()).add_component(
        RecipeType::Usage,
        ItemComponent::new(ItemId::new("minecraft:gold_ingot").expect("id"), 0),
        AuxMode::Respect,
    );
    DiagramGroup::new(info(), builder.build())
}

struct FixedGui;

impl HostGui for FixedGui {
    fn mouse_position(&self) -> Point {
        Point::new(150, 90)
    }

    fn gui_origin(&self) -> Point {
        Point::new(100, 50)
    }

    fn recipe_offset(&self, index: usize) -> Point {
        Point::new(5, 16 + 166 * index as i32)
    }
}

#[test]
fn group_id_lists_all_but_empty_diagrams() {
    let group = group();
    let query = LookupQuery::Id(GROUP_ID.to_owned());

    let loaded = group.crafting_handler(&query, &Config::default());
    assert_eq!(loaded.num_diagrams(), 1);

    let config = Config {
        show_empty_diagrams: true,
        ..Config::default()
    };
    let loaded = group.crafting_handler(&query, &config);
    assert_eq!(loaded.num_diagrams(), 2);
    assert_eq!(loaded.num_pages(), 1);
}

#[test]
fn item_lookup_strips_aux_data() {
    let group = group();
    let stack = ItemStack::new(iron().item().clone(), 0, 3).with_aux(AuxData::new("{tag:1}"));
    let config = Config::default();

    assert_eq!(
        group
            .crafting_handler(&LookupQuery::Item(stack.clone()), &config)
            .num_diagrams(),
        1
    );
    assert_eq!(
        group
            .usage_handler(&LookupQuery::Item(stack), &config)
            .num_diagrams(),
        0
    );
}

#[test]
fn empty_stacks_and_foreign_ids_load_nothing() {
    let group = group();
    let config = Config::default();
    let empty = ItemStack::new(iron().item().clone(), 0, 0);

    assert_eq!(
        group
            .crafting_handler(&LookupQuery::Item(empty), &config)
            .num_diagrams(),
        0
    );
    assert_eq!(
        group
            .crafting_handler(&LookupQuery::Id("other".to_owned()), &config)
            .num_diagrams(),
        0
    );
}

#[test]
fn custom_behavior_is_checked_first() {
    let extra = filled_diagram(&iron());
    let group = group().with_custom_behavior(GROUP_ID, move || vec![extra.clone(); 3]);
    let loaded = group.crafting_handler(&LookupQuery::Id(GROUP_ID.to_owned()), &Config::default());
    assert_eq!(loaded.num_diagrams(), 3);
    assert_eq!(loaded.num_pages(), 2);
}

#[test]
fn clicks_and_keys_become_interactions() {
    let group = group();
    let config = Config::default();
    let db = MemoryGameDatabase::default();
    let loaded = group.crafting_handler(&LookupQuery::Id(GROUP_ID.to_owned()), &config);
    let ctx = loaded.context(&config, &db, Modifiers::NONE);
    let on_slot = Grid::GRID.grid(0, 0);
    let iron = Component::from(iron());

    assert_eq!(
        loaded.mouse_clicked(0, &ctx, 1, on_slot),
        Some(Interaction::Lookup {
            recipe_type: RecipeType::Usage,
            component: iron.clone(),
        })
    );
    assert_eq!(loaded.mouse_clicked(0, &ctx, 2, on_slot), None);
    assert_eq!(
        loaded.key_typed(0, &ctx, HostKey::Bookmark, on_slot),
        Some(Interaction::Bookmark(iron))
    );
    assert_eq!(loaded.mouse_clicked(0, &ctx, 0, Point::new(150, 150)), None);
    assert_eq!(loaded.mouse_clicked(7, &ctx, 0, on_slot), None);
}

#[test]
fn tooltip_names_the_hovered_component() {
    let group = group();
    let config = Config::default();
    let db = MemoryGameDatabase::demo().expect("demo db");
    let loaded = group.crafting_handler(&LookupQuery::Id(GROUP_ID.to_owned()), &config);
    let ctx = loaded.context(&config, &db, Modifiers::NONE);

    let tooltip = loaded
        .tooltip(0, &ctx, Grid::GRID.grid(0, 0))
        .expect("tooltip");
    assert_eq!(tooltip.plain_lines(&db, &config)[0], "Iron Ingot");
    assert!(loaded.tooltip(0, &ctx, Point::new(-50, -50)).is_none());
}

#[test]
fn visibility_follows_config_and_modifiers() {
    let loaded = group().crafting_handler(&LookupQuery::Id(GROUP_ID.to_owned()), &Config::default());
    let mut config = Config::default();
    assert!(loaded.is_visible(&config, Modifiers::NONE));

    config
        .diagram_groups
        .insert(GROUP_ID.to_owned(), GroupVisibility::ShowOnShift);
    assert!(!loaded.is_visible(&config, Modifiers::NONE));
    assert!(loaded.is_visible(&config, Modifiers::SHIFT));
}

#[test]
fn update_advances_the_loaded_clock() {
    let config = Config::default();
    let mut loaded = group().crafting_handler(&LookupQuery::Id(GROUP_ID.to_owned()), &config);
    loaded.on_update(Modifiers::NONE, &config);
    loaded.on_update(Modifiers::SHIFT, &config);
    loaded.mouse_scrolled(1);
    assert_eq!(loaded.state().ticks(), 21);
}

#[test]
fn relative_mouse_subtracts_window_and_recipe_offsets() {
    assert_eq!(relative_mouse(&FixedGui, 0), Point::new(45, 24));
    assert_eq!(relative_mouse(&FixedGui, 1), Point::new(45, -142));
}
