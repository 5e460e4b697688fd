// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Slotgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Slotgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::config::Config;
use crate::game::GameDatabase;

/// Ticks a multi-component slot shows one component for.
pub const TICKS_PER_CYCLE: i64 = 20;

/// Keyboard modifiers held during the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
}

/// Which component of an `count`-component group is shown at `ticks`.
///
/// Total for any tick value, negative ones included; `0` when `count` is zero.
pub fn cycle_index(ticks: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let cycle = ticks.div_euclid(TICKS_PER_CYCLE);
    cycle.rem_euclid(count as i64) as usize
}

/// Per-handler animation clock. Owned by whoever drives the frames, never by a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagramState {
    ticks: i64,
}

impl DiagramState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    /// Advances one frame. Shift pauses; ctrl skips a full cycle (backwards with shift).
    pub fn tick(&mut self, modifiers: Modifiers, config: &Config) {
        if modifiers.ctrl && config.ctrl_fast_forward {
            if modifiers.shift {
                self.ticks -= TICKS_PER_CYCLE;
            } else {
                self.ticks += TICKS_PER_CYCLE;
            }
        } else if !modifiers.shift {
            self.ticks += 1;
        }
    }

    /// Moves by whole cycles, e.g. from a mouse wheel.
    pub fn scroll(&mut self, delta: i64) {
        self.ticks += delta * TICKS_PER_CYCLE;
    }

    pub fn cycle_index(&self, count: usize) -> usize {
        cycle_index(self.ticks, count)
    }
}

/// Everything a draw, tooltip or interaction call may read.
#[derive(Clone, Copy)]
pub struct DrawContext<'a> {
    pub state: &'a DiagramState,
    pub config: &'a Config,
    pub database: &'a dyn GameDatabase,
    pub modifiers: Modifiers,
}

impl<'a> DrawContext<'a> {
    pub fn new(
        state: &'a DiagramState,
        config: &'a Config,
        database: &'a dyn GameDatabase,
        modifiers: Modifiers,
    ) -> Self {
        Self {
            state,
            config,
            database,
            modifiers,
        }
    }
}
