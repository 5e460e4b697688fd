// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Slotgrid: grid-based diagram layout and matching for recipe-lookup overlays.
//!
//! Generators describe reusable [`layout::Layout`]s, stamp them into immutable
//! [`diagram::Diagram`]s with a [`diagram::DiagramBuilder`], and index the diagrams with a
//! [`matcher::DiagramMatcher`]. A [`group::DiagramGroup`] answers host lookups; drawing goes
//! through the host's [`render::DrawTarget`].

pub mod config;
pub mod diagram;
pub mod game;
pub mod generators;
pub mod group;
pub mod layout;
pub mod matcher;
pub mod model;
pub mod registry;
pub mod render;
