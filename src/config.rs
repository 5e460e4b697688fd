// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only display and generation settings.
//!
//! Settings come from an optional JSON file, then environment overrides. The engine polls the
//! resulting [`Config`] on demand; nothing is pushed into built diagrams.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagram::Modifiers;
use crate::group::DiagramGroupInfo;
use crate::model::GroupId;

/// When a diagram group shows up in lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupVisibility {
    AlwaysShown,
    AlwaysHidden,
    ShowOnShift,
    HideOnShift,
    ShowOnCtrl,
    HideOnCtrl,
    /// Not even generated.
    Disabled,
}

impl GroupVisibility {
    pub const ALL: [Self; 7] = [
        Self::AlwaysShown,
        Self::AlwaysHidden,
        Self::ShowOnShift,
        Self::HideOnShift,
        Self::ShowOnCtrl,
        Self::HideOnCtrl,
        Self::Disabled,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::AlwaysShown => "ALWAYS_SHOWN",
            Self::AlwaysHidden => "ALWAYS_HIDDEN",
            Self::ShowOnShift => "SHOW_ON_SHIFT",
            Self::HideOnShift => "HIDE_ON_SHIFT",
            Self::ShowOnCtrl => "SHOW_ON_CTRL",
            Self::HideOnCtrl => "HIDE_ON_CTRL",
            Self::Disabled => "DISABLED",
        }
    }

    /// Parses a visibility name, falling back to [`GroupVisibility::AlwaysShown`].
    pub fn by_name(name: &str) -> Self {
        let trimmed = name.trim();
        match Self::ALL
            .into_iter()
            .find(|visibility| visibility.name().eq_ignore_ascii_case(trimmed))
        {
            Some(visibility) => visibility,
            None => {
                tracing::error!(name = trimmed, "unknown diagram group visibility");
                Self::AlwaysShown
            }
        }
    }

    pub fn is_shown(self, modifiers: Modifiers) -> bool {
        match self {
            Self::AlwaysShown => true,
            Self::AlwaysHidden | Self::Disabled => false,
            Self::ShowOnShift => modifiers.shift,
            Self::HideOnShift => !modifiers.shift,
            Self::ShowOnCtrl => modifiers.ctrl,
            Self::HideOnCtrl => !modifiers.ctrl,
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Self::Disabled
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ctrl_fast_forward: bool,
    pub generate_diagrams_on_client_connect: bool,
    pub hard_disabled_diagram_groups: Vec<String>,
    pub show_empty_diagrams: bool,
    pub show_ids: bool,
    pub show_stack_size_one: bool,
    pub tooltip_max_cycle_count: usize,
    pub diagram_groups: BTreeMap<String, GroupVisibility>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ctrl_fast_forward: true,
            generate_diagrams_on_client_connect: true,
            hard_disabled_diagram_groups: Vec::new(),
            show_empty_diagrams: false,
            show_ids: false,
            show_stack_size_one: false,
            tooltip_max_cycle_count: 8,
            diagram_groups: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads `path` (when given) and applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = bool_from_env("SLOTGRID_SHOW_IDS")? {
            self.show_ids = value;
        }
        if let Some(value) = bool_from_env("SLOTGRID_SHOW_EMPTY_DIAGRAMS")? {
            self.show_empty_diagrams = value;
        }
        if let Some(value) = bool_from_env("SLOTGRID_SHOW_STACK_SIZE_ONE")? {
            self.show_stack_size_one = value;
        }
        Ok(())
    }

    pub fn is_hard_disabled(&self, id: &GroupId) -> bool {
        self.hard_disabled_diagram_groups
            .iter()
            .any(|disabled| disabled == id.as_str())
    }

    /// Configured visibility of a group, or the group's own default.
    pub fn visibility(&self, info: &DiagramGroupInfo) -> GroupVisibility {
        self.diagram_groups
            .get(info.group_id().as_str())
            .copied()
            .unwrap_or_else(|| info.default_visibility())
    }
}

fn bool_from_env(name: &str) -> Result<Option<bool>, ConfigError> {
    let value = match env::var(name) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ConfigError::InvalidEnv {
                name: name.to_owned(),
                value: "<non-unicode>".to_owned(),
            })
        }
    };
    parse_bool(&value)
        .map(Some)
        .ok_or_else(|| ConfigError::InvalidEnv {
            name: name.to_owned(),
            value,
        })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_bool, Config, GroupVisibility};
    use crate::diagram::Modifiers;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{ "show_ids": true }"#).expect("config");
        assert!(config.show_ids);
        assert!(config.ctrl_fast_forward);
        assert_eq!(config.tooltip_max_cycle_count, 8);
    }

    #[test]
    fn visibility_overrides_parse_from_names() {
        let config = Config::from_json_str(
            r#"{ "diagram_groups": { "slotgrid.diagramgroup.a": "SHOW_ON_SHIFT" } }"#,
        )
        .expect("config");
        assert_eq!(
            config.diagram_groups.get("slotgrid.diagramgroup.a"),
            Some(&GroupVisibility::ShowOnShift)
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json_str("{ show_ids: ").is_err());
    }

    #[test]
    fn unknown_visibility_name_falls_back() {
        assert_eq!(GroupVisibility::by_name("nope"), GroupVisibility::AlwaysShown);
        assert_eq!(
            GroupVisibility::by_name("hide_on_ctrl"),
            GroupVisibility::HideOnCtrl
        );
    }

    #[rstest]
    #[case(GroupVisibility::AlwaysShown, false, false, true)]
    #[case(GroupVisibility::AlwaysHidden, true, true, false)]
    #[case(GroupVisibility::ShowOnShift, true, false, true)]
    #[case(GroupVisibility::ShowOnShift, false, true, false)]
    #[case(GroupVisibility::HideOnShift, true, false, false)]
    #[case(GroupVisibility::ShowOnCtrl, false, true, true)]
    #[case(GroupVisibility::HideOnCtrl, false, true, false)]
    #[case(GroupVisibility::HideOnCtrl, false, false, true)]
    #[case(GroupVisibility::Disabled, false, false, false)]
    fn visibility_truth_table(
        #[case] visibility: GroupVisibility,
        #[case] shift: bool,
        #[case] ctrl: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(visibility.is_shown(Modifiers { shift, ctrl }), expected);
    }

    #[test]
    fn bool_values_are_lenient() {
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
