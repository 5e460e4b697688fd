// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Registry of diagram generators.
//!
//! A [`Registry`] is an ordinary value: build one at startup, [`initialize`](Registry::initialize)
//! it once the game database is available, [`generate`](Registry::generate) the diagram groups,
//! then [`clean_up`](Registry::clean_up) to drop the generators and their build-time state.

use std::fmt;
use std::time::Instant;

use crate::config::Config;
use crate::diagram::BuildError;
use crate::game::SharedGameDatabase;
use crate::generators::{FluidContainers, OreDictionary};
use crate::group::{DiagramGroup, DiagramGroupInfo};
use crate::layout::LayoutError;
use crate::model::{GroupId, IdError};

/// Prepended to every registered group id so ids stay globally unique.
pub const GROUP_ID_PREFIX: &str = "slotgrid.diagramgroup.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Id(#[from] IdError),
    #[error("missing game data: {0}")]
    MissingData(String),
}

/// One diagram feature: static metadata plus the code that turns game data into diagrams.
pub trait DiagramGenerator {
    fn info(&self) -> &DiagramGroupInfo;

    fn generate(
        &self,
        database: &SharedGameDatabase,
        config: &Config,
    ) -> Result<DiagramGroup, GenerateError>;
}

type Constructor =
    Box<dyn Fn(GroupId) -> Result<Box<dyn DiagramGenerator>, GenerateError> + Send + Sync>;

struct RegistryEntry {
    group_id: GroupId,
    constructor: Constructor,
    hard_dependencies: Vec<String>,
}

impl RegistryEntry {
    fn missing_dependencies(&self, database: &SharedGameDatabase) -> Vec<&str> {
        self.hard_dependencies
            .iter()
            .map(String::as_str)
            .filter(|mod_id| !database.is_mod_loaded(mod_id))
            .collect()
    }
}

#[derive(Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    generators: Vec<Box<dyn DiagramGenerator>>,
    infos: Vec<DiagramGroupInfo>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .map(|entry| entry.group_id.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("generators", &self.generators.len())
            .field("infos", &self.infos)
            .finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in generators.
    pub fn with_defaults() -> Result<Self, IdError> {
        let mut registry = Self::new();
        registry
            .add("fluidcontainers", FluidContainers::new, &[])?
            .add("oredictionary", OreDictionary::new, &[])?;
        Ok(registry)
    }

    /// Registers a generator under `GROUP_ID_PREFIX + suffix`. It is only constructed by
    /// [`initialize`](Self::initialize), and only if every mod in `hard_dependencies` is loaded.
    pub fn add<G, F>(
        &mut self,
        suffix: &str,
        constructor: F,
        hard_dependencies: &[&str],
    ) -> Result<&mut Self, IdError>
    where
        G: DiagramGenerator + 'static,
        F: Fn(GroupId) -> Result<G, GenerateError> + Send + Sync + 'static,
    {
        let group_id = GroupId::new(format!("{GROUP_ID_PREFIX}{suffix}"))?;
        self.entries.push(RegistryEntry {
            group_id,
            constructor: Box::new(move |id| {
                let generator: Box<dyn DiagramGenerator> = Box::new(constructor(id)?);
                Ok(generator)
            }),
            hard_dependencies: hard_dependencies.iter().map(|id| (*id).to_owned()).collect(),
        });
        Ok(self)
    }

    /// Registered group ids, in registration order.
    pub fn group_ids(&self) -> impl Iterator<Item = &GroupId> + '_ {
        self.entries.iter().map(|entry| &entry.group_id)
    }

    /// Constructs the generators whose dependencies are met. Returns how many were constructed.
    pub fn initialize(&mut self, database: &SharedGameDatabase, config: &Config) -> usize {
        self.generators.clear();
        self.infos.clear();

        for entry in &self.entries {
            let missing = entry.missing_dependencies(database);
            if !missing.is_empty() {
                tracing::warn!(
                    group = %entry.group_id,
                    dependencies = ?missing,
                    "diagram group is missing dependencies"
                );
                continue;
            }
            if config.is_hard_disabled(&entry.group_id) {
                tracing::info!(group = %entry.group_id, "diagram group hard-disabled by config");
                continue;
            }

            match (entry.constructor)(entry.group_id.clone()) {
                Ok(generator) => {
                    self.infos.push(generator.info().clone());
                    self.generators.push(generator);
                }
                Err(error) => {
                    tracing::error!(group = %entry.group_id, %error, "failed to construct generator");
                }
            }
        }

        tracing::info!(groups = self.generators.len(), "initialized diagram groups");
        self.generators.len()
    }

    /// Metadata of every initialized group. Survives [`clean_up`](Self::clean_up).
    pub fn infos(&self) -> &[DiagramGroupInfo] {
        &self.infos
    }

    /// Runs every enabled generator. Failing generators are logged and skipped.
    pub fn generate(&self, database: &SharedGameDatabase, config: &Config) -> Vec<DiagramGroup> {
        let mut groups = Vec::with_capacity(self.generators.len());
        let mut diagrams = 0usize;

        for generator in &self.generators {
            let info = generator.info();
            if !config.visibility(info).is_enabled() {
                tracing::info!(group = %info.group_id(), "diagram group disabled by config");
                continue;
            }

            let started = Instant::now();
            match generator.generate(database, config) {
                Ok(group) => {
                    let count = group.matcher().all().len();
                    tracing::debug!(
                        group = %info.group_id(),
                        diagrams = count,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "generated diagram group"
                    );
                    diagrams += count;
                    groups.push(group);
                }
                Err(error) => {
                    tracing::error!(group = %info.group_id(), %error, "diagram generation failed");
                }
            }
        }

        tracing::info!(groups = groups.len(), diagrams, "generation complete");
        groups
    }

    /// Drops registry entries and generators. Group infos are kept.
    pub fn clean_up(&mut self) {
        self.entries.clear();
        self.generators.clear();
    }
}
