// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use slotgrid::config::{Config, GroupVisibility};
use slotgrid::diagram::{Diagram, DiagramState, DrawContext, Interaction, Modifiers, RecipeType};
use slotgrid::game::{MemoryGameDatabase, SharedGameDatabase};
use slotgrid::group::{DiagramGroup, DiagramGroupInfo, LookupQuery};
use slotgrid::layout::grid::{Direction, Grid};
use slotgrid::layout::{Layout, Lines, Slot, SlotGroup};
use slotgrid::matcher::ComponentDiagramMatcher;
use slotgrid::model::{
    AuxMode, Component, DisplayComponent, GroupId, ItemComponent, ItemId, SlotGroupKey, SlotKey,
};
use slotgrid::registry::{Registry, GROUP_ID_PREFIX};
use slotgrid::render::{render_diagram_text, DrawCall, RecordingTarget};

const SMELTING: &str = "slotgrid.diagramgroup.smelting";

fn item(id: &str) -> ItemComponent {
    ItemComponent::new(ItemId::new(id).unwrap_or_else(|err| panic!("bad id {id}: {err}")), 0)
}

/// Input slot on the left, arrow, output group on the right.
fn smelting_layout() -> Layout {
    let grid = Grid::GRID;
    let mut arrow = Lines::builder(grid.margin(grid.grid(0, 0), Direction::E));
    arrow
        .add_arrow(grid.margin(grid.grid(4, 0), Direction::W))
        .expect("arrow");

    let mut layout = Layout::builder();
    layout
        .put_slot(
            SlotKey::new("input").expect("key"),
            Slot::builder(Grid::GRID.grid(0, 0)).build(),
        )
        .expect("input")
        .put_slot_group(
            SlotGroupKey::new("outputs").expect("key"),
            SlotGroup::builder(2, 1, Grid::GRID.grid(4, 0), Direction::E)
                .build()
                .expect("outputs"),
        )
        .expect("outputs");
    layout.add_lines(arrow.build());
    layout.build()
}

fn smelting_diagram(layout: &Layout, input: &ItemComponent, output: &ItemComponent) -> Diagram {
    let mut builder = Diagram::builder();
    builder.add_layout(layout).expect("layout");
    builder
        .insert_into_slot(
            &SlotKey::new("input").expect("key"),
            DisplayComponent::builder(input.clone()).build(),
        )
        .expect("input");
    builder
        .auto_insert_into_slot_group(&SlotGroupKey::new("outputs").expect("key"))
        .expect("outputs")
        .insert_each_safe([DisplayComponent::builder(output.clone())
            .set_stack_size(2)
            .build()]);
    builder.build()
}

fn smelting_group() -> DiagramGroup {
    let layout = smelting_layout();
    let mut matcher = ComponentDiagramMatcher::builder();
    for (input, output) in [
        ("minecraft:iron_ore", "minecraft:iron_ingot"),
        ("minecraft:gold_ore", "minecraft:gold_ingot"),
    ] {
        let (input, output) = (item(input), item(output));
        let diagram = Arc::new(smelting_diagram(&layout, &input, &output));
        matcher
            .add_diagram(diagram)
            .add_component(RecipeType::Usage, input, AuxMode::Ignore)
            .add_component(RecipeType::Crafting, output, AuxMode::Ignore);
    }

    let info = DiagramGroupInfo::builder(
        "Smelting",
        GroupId::new(SMELTING).expect("id"),
        item("minecraft:iron_ore"),
        2,
    )
    .build();
    DiagramGroup::new(info, matcher.build())
}

#[test]
fn lookup_to_text_render() {
    let group = smelting_group();
    let config = Config::default();
    let db = MemoryGameDatabase::demo().expect("demo db");
    let query = LookupQuery::Item(item("minecraft:iron_ingot").stack(1));

    let loaded = group.crafting_handler(&query, &config);
    assert_eq!(loaded.num_diagrams(), 1);
    assert!(group.usage_handler(&query, &config).diagrams().is_empty());

    let ctx = loaded.context(&config, &db, Modifiers::NONE);
    let text = render_diagram_text(loaded.diagram(0).expect("diagram"), &ctx).expect("render");
    assert_eq!(text.lines().next(), Some("[b]────>[a][ ]"), "unexpected render:\n{text}");
    assert!(text.contains("a = Iron Ingot [2]"), "missing output legend:\n{text}");
    assert!(text.contains("b = Iron Ore"), "missing input legend:\n{text}");
}

#[test]
fn group_listing_and_interactions() {
    let group = smelting_group();
    let config = Config::default();
    let db = MemoryGameDatabase::demo().expect("demo db");

    let loaded = group.crafting_handler(&LookupQuery::Id(SMELTING.to_owned()), &config);
    assert_eq!(loaded.num_diagrams(), 2);
    assert_eq!(loaded.num_pages(), 1);

    let ctx = loaded.context(&config, &db, Modifiers::NONE);
    assert_eq!(
        loaded.mouse_clicked(1, &ctx, 0, Grid::GRID.grid(0, 0)),
        Some(Interaction::Lookup {
            recipe_type: RecipeType::Crafting,
            component: Component::from(item("minecraft:gold_ore")),
        })
    );

    let mut target = RecordingTarget::default();
    loaded.draw_foreground(1, &ctx, &mut target, Some(Grid::GRID.grid(4, 0)));
    assert!(matches!(target.calls(), [DrawCall::Overlay { .. }]));
}

#[test]
fn cycling_groups_follow_the_clock() {
    let key = SlotKey::new("ingot").expect("key");
    let mut layout = Layout::builder();
    layout
        .put_slot(key.clone(), Slot::builder(Grid::GRID.grid(0, 0)).build())
        .expect("slot");
    let layout = layout.build();

    let mut builder = Diagram::builder();
    builder.add_layout(&layout).expect("layout");
    builder
        .insert_group_into_slot(
            &key,
            ["minecraft:iron_ingot", "minecraft:gold_ingot"]
                .into_iter()
                .map(|id| DisplayComponent::builder(item(id)).build()),
        )
        .expect("group");
    let diagram = builder.build();

    let config = Config::default();
    let db = MemoryGameDatabase::demo().expect("demo db");
    let render_at = |ticks| {
        let state = DiagramState::with_ticks(ticks);
        let ctx = DrawContext::new(&state, &config, &db, Modifiers::NONE);
        render_diagram_text(&diagram, &ctx).expect("render")
    };

    assert!(render_at(0).ends_with("a = Iron Ingot"));
    assert!(render_at(20).ends_with("a = Gold Ingot"));
    assert!(render_at(-1).ends_with("a = Gold Ingot"));
}

#[test]
fn registry_generates_builtin_groups() {
    let db: SharedGameDatabase = Arc::new(MemoryGameDatabase::demo().expect("demo db"));
    let mut config = Config::default();
    config.diagram_groups.insert(
        format!("{GROUP_ID_PREFIX}oredictionary"),
        GroupVisibility::AlwaysShown,
    );

    let mut registry = Registry::with_defaults().expect("registry");
    assert_eq!(registry.initialize(&db, &config), 2);
    let groups = registry.generate(&db, &config);
    registry.clean_up();
    assert_eq!(groups.len(), 2);
    assert_eq!(registry.infos().len(), 2);

    let query = LookupQuery::Item(item("minecraft:water_bucket").stack(1));
    let matched: usize = groups
        .iter()
        .map(|group| group.crafting_handler(&query, &config).num_diagrams())
        .sum();
    assert_eq!(matched, 1);

    let query = LookupQuery::Item(item("minecraft:iron_ingot").stack(1));
    let matched: Vec<&str> = groups
        .iter()
        .filter(|group| group.usage_handler(&query, &config).num_diagrams() > 0)
        .map(|group| group.info().group_name())
        .collect();
    assert_eq!(matched, ["Ore Dictionary"]);
}
