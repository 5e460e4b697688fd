// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::Arc;

use crate::config::GroupVisibility;
use crate::diagram::Diagram;
use crate::layout::grid::TOTAL_HEIGHT;
use crate::model::{GroupId, ItemComponent};

/// Extra emptiness test applied when listing a whole group.
pub type DiagramFilter = Arc<dyn Fn(&Diagram) -> bool + Send + Sync>;

/// Static metadata of one diagram feature.
#[derive(Clone)]
pub struct DiagramGroupInfo {
    group_name: String,
    group_id: GroupId,
    icon: ItemComponent,
    diagrams_per_page: usize,
    ignore_aux: bool,
    empty_diagram_predicate: DiagramFilter,
    default_visibility: GroupVisibility,
    description: String,
}

impl fmt::Debug for DiagramGroupInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramGroupInfo")
            .field("group_name", &self.group_name)
            .field("group_id", &self.group_id)
            .field("icon", &self.icon)
            .field("diagrams_per_page", &self.diagrams_per_page)
            .field("ignore_aux", &self.ignore_aux)
            .field("default_visibility", &self.default_visibility)
            .finish_non_exhaustive()
    }
}

impl DiagramGroupInfo {
    pub fn builder(
        group_name: impl Into<String>,
        group_id: GroupId,
        icon: ItemComponent,
        diagrams_per_page: usize,
    ) -> DiagramGroupInfoBuilder {
        DiagramGroupInfoBuilder {
            info: Self {
                group_name: group_name.into(),
                group_id,
                icon,
                diagrams_per_page: diagrams_per_page.max(1),
                ignore_aux: true,
                empty_diagram_predicate: Arc::new(|_: &Diagram| false),
                default_visibility: GroupVisibility::AlwaysShown,
                description: String::new(),
            },
        }
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    pub fn icon(&self) -> &ItemComponent {
        &self.icon
    }

    pub fn diagrams_per_page(&self) -> usize {
        self.diagrams_per_page
    }

    /// Whether aux data is stripped from looked-up stacks.
    pub fn ignore_aux(&self) -> bool {
        self.ignore_aux
    }

    pub fn is_empty_diagram(&self, diagram: &Diagram) -> bool {
        (self.empty_diagram_predicate)(diagram)
    }

    pub fn default_visibility(&self) -> GroupVisibility {
        self.default_visibility
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Pixel height of one diagram slot on a page.
    pub fn page_height(&self) -> i32 {
        TOTAL_HEIGHT / i32::try_from(self.diagrams_per_page).unwrap_or(i32::MAX)
    }
}

#[derive(Debug, Clone)]
pub struct DiagramGroupInfoBuilder {
    info: DiagramGroupInfo,
}

impl DiagramGroupInfoBuilder {
    pub fn set_ignore_aux(mut self, ignore_aux: bool) -> Self {
        self.info.ignore_aux = ignore_aux;
        self
    }

    /// Diagrams this returns `true` for are left out of "show all" listings.
    pub fn set_empty_diagram_predicate(
        mut self,
        predicate: impl Fn(&Diagram) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.info.empty_diagram_predicate = Arc::new(predicate);
        self
    }

    pub fn set_default_visibility(mut self, visibility: GroupVisibility) -> Self {
        self.info.default_visibility = visibility;
        self
    }

    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.info.description = description.into();
        self
    }

    pub fn build(self) -> DiagramGroupInfo {
        self.info
    }
}

#[cfg(test)]
mod tests {
    use super::DiagramGroupInfo;
    use crate::config::GroupVisibility;
    use crate::diagram::Diagram;
    use crate::model::{GroupId, ItemComponent, ItemId};

    fn builder(per_page: usize) -> super::DiagramGroupInfoBuilder {
        DiagramGroupInfo::builder(
            "Ore Dictionary",
            GroupId::new("slotgrid.diagramgroup.oredictionary").expect("id"),
            ItemComponent::new(ItemId::new("minecraft:iron_ore").expect("id"), 0),
            per_page,
        )
    }

    #[test]
    fn defaults() {
        let info = builder(2).build();
        assert!(info.ignore_aux());
        assert_eq!(info.default_visibility(), GroupVisibility::AlwaysShown);
        assert_eq!(info.description(), "");
        assert!(!info.is_empty_diagram(&Diagram::builder().build()));
        assert_eq!(info.page_height(), 166);
    }

    #[test]
    fn zero_per_page_is_clamped() {
        let info = builder(0).build();
        assert_eq!(info.diagrams_per_page(), 1);
        assert_eq!(info.page_height(), 332);
    }

    #[test]
    fn setters_override_defaults() {
        let info = builder(1)
            .set_ignore_aux(false)
            .set_default_visibility(GroupVisibility::ShowOnShift)
            .set_description("line one\nline two")
            .set_empty_diagram_predicate(|diagram| diagram.filled_slot_count() < 2)
            .build();
        assert!(!info.ignore_aux());
        assert_eq!(info.default_visibility(), GroupVisibility::ShowOnShift);
        assert!(info.is_empty_diagram(&Diagram::builder().build()));
    }
}
