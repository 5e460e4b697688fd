// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Slotgrid demo CLI.
//!
//! Generates every registered diagram group over a game database (the built-in demo data unless
//! `--db` is given), looks up the item or fluid best matching `<query>` and prints each matching
//! diagram as text.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use slotgrid::config::Config;
use slotgrid::diagram::{DiagramState, DrawContext, Modifiers, RecipeType};
use slotgrid::game::{MemoryGameDatabase, SharedGameDatabase};
use slotgrid::group::LookupQuery;
use slotgrid::model::{Component, DEFAULT_FLUID_STACK_SIZE, DEFAULT_ITEM_STACK_SIZE};
use slotgrid::registry::{Registry, GROUP_ID_PREFIX};
use slotgrid::render::render_diagram_text;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--db <file.json>] [--config <file.json>] [--group <id>] [--usage] [--ticks <n>] <query>\n  {program} [--db <file.json>] [--config <file.json>] --list-groups\n\n<query> is fuzzy-matched against item and fluid names; a group id ({GROUP_ID_PREFIX}...) lists that group.\n--group restricts output to one group id.\n--usage shows usages instead of recipes.\n--ticks sets the animation clock used to pick cycling components.\n\nLogging is configured through SLOTGRID_LOG (falls back to RUST_LOG, default `warn`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    db: Option<PathBuf>,
    config: Option<PathBuf>,
    group: Option<String>,
    usage: bool,
    ticks: Option<i64>,
    list_groups: bool,
    query: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--db" => {
                if options.db.is_some() {
                    return Err(());
                }
                options.db = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--group" => {
                if options.group.is_some() {
                    return Err(());
                }
                options.group = Some(args.next().ok_or(())?);
            }
            "--usage" => {
                if options.usage {
                    return Err(());
                }
                options.usage = true;
            }
            "--ticks" => {
                if options.ticks.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.ticks = Some(raw.parse().map_err(|_| ())?);
            }
            "--list-groups" => {
                if options.list_groups {
                    return Err(());
                }
                options.list_groups = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.query.is_some() {
                    return Err(());
                }
                options.query = Some(arg);
            }
        }
    }

    if options.list_groups == options.query.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SLOTGRID_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn lookup_query(database: &SharedGameDatabase, query: &str) -> Option<LookupQuery> {
    if query.starts_with(GROUP_ID_PREFIX) {
        return Some(LookupQuery::Id(query.to_owned()));
    }
    let component = database.find_components(query).into_iter().next()?;
    Some(match component {
        Component::Item(item) => LookupQuery::Item(item.stack(DEFAULT_ITEM_STACK_SIZE)),
        Component::Fluid(fluid) => LookupQuery::Fluid(fluid.stack(DEFAULT_FLUID_STACK_SIZE)),
    })
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let database: SharedGameDatabase = Arc::new(match &options.db {
        Some(path) => MemoryGameDatabase::from_json_file(path)?,
        None => MemoryGameDatabase::demo()?,
    });
    let config = Config::load(options.config.as_deref())?;

    let mut registry = Registry::with_defaults()?;
    registry.initialize(&database, &config);

    if options.list_groups {
        for info in registry.infos() {
            println!(
                "{}\t{}\t{}",
                info.group_id(),
                info.group_name(),
                config.visibility(info).name()
            );
        }
        return Ok(());
    }

    let groups = registry.generate(&database, &config);
    registry.clean_up();

    let raw_query = options.query.unwrap_or_default();
    let Some(query) = lookup_query(&database, &raw_query) else {
        return Err(format!("no item or fluid matches `{raw_query}`").into());
    };
    let recipe_type = if options.usage {
        RecipeType::Usage
    } else {
        RecipeType::Crafting
    };
    let state = DiagramState::with_ticks(options.ticks.unwrap_or(0));
    let ctx = DrawContext::new(&state, &config, database.as_ref(), Modifiers::NONE);

    let mut printed = 0usize;
    for group in &groups {
        if options
            .group
            .as_deref()
            .is_some_and(|id| id != group.info().group_id().as_str())
        {
            continue;
        }
        let loaded = group.load(&query, recipe_type, &config);
        if !loaded.is_visible(&config, Modifiers::NONE) {
            continue;
        }

        for (index, diagram) in loaded.diagrams().iter().enumerate() {
            println!(
                "== {} ({}/{}) ==",
                group.info().group_name(),
                index + 1,
                loaded.num_diagrams()
            );
            println!("{}\n", render_diagram_text(diagram, &ctx)?);
            printed += 1;
        }
    }

    if printed == 0 {
        eprintln!("slotgrid: no diagrams for `{raw_query}`");
    }
    Ok(())
}

fn main() {
    init_tracing();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "slotgrid".to_owned());
    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("slotgrid: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter()
            .map(|arg| (*arg).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_a_bare_query() {
        let options = parse_options(args(&["water"])).expect("parse options");
        assert_eq!(
            options,
            CliOptions {
                query: Some("water".to_owned()),
                ..CliOptions::default()
            }
        );
    }

    #[test]
    fn parses_every_flag() {
        let options = parse_options(args(&[
            "--db", "db.json", "--config", "cfg.json", "--group", "g", "--usage", "--ticks", "-40",
            "lava",
        ]))
        .expect("parse options");
        assert_eq!(options.db.as_deref(), Some(std::path::Path::new("db.json")));
        assert_eq!(options.config.as_deref(), Some(std::path::Path::new("cfg.json")));
        assert_eq!(options.group.as_deref(), Some("g"));
        assert!(options.usage);
        assert_eq!(options.ticks, Some(-40));
        assert_eq!(options.query.as_deref(), Some("lava"));
    }

    #[test]
    fn list_groups_excludes_a_query() {
        let options = parse_options(args(&["--list-groups"])).expect("parse options");
        assert!(options.list_groups);
        parse_options(args(&["--list-groups", "water"])).unwrap_err();
    }

    #[test]
    fn rejects_missing_query_and_values() {
        parse_options(std::iter::empty()).unwrap_err();
        parse_options(args(&["--db"])).unwrap_err();
        parse_options(args(&["--ticks", "soon", "water"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_duplicate_and_extra_args() {
        parse_options(args(&["--nope", "water"])).unwrap_err();
        parse_options(args(&["--usage", "--usage", "water"])).unwrap_err();
        parse_options(args(&["water", "lava"])).unwrap_err();
    }
}
