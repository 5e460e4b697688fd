// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in diagram generators.

mod fluid_containers;
mod ore_dictionary;

pub use fluid_containers::FluidContainers;
pub use ore_dictionary::OreDictionary;
