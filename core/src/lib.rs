#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use label::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod game;
mod generator;
mod label;
mod types;

/// Every generated board carries exactly this many neutralizers.
pub const NEUTRALIZER_COUNT: CellCount = 2;

/// Which cells around the first reveal are kept free of mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafeZone {
    /// No exclusion, the first reveal may hit a mine.
    Disabled,
    /// Only the anchor cell itself.
    Anchor,
    /// The anchor and its 8 neighbours, so the first reveal always cascades.
    #[default]
    Neighborhood,
}

impl SafeZone {
    /// Upper bound on the cells this zone keeps free, regardless of where the anchor lands.
    pub const fn reserved_cells(self) -> CellCount {
        match self {
            Self::Disabled => 0,
            Self::Anchor => 1,
            Self::Neighborhood => 9,
        }
    }

    pub const fn excludes(self, anchor: Coord2, coords: Coord2) -> bool {
        match self {
            Self::Disabled => false,
            Self::Anchor => anchor.0 == coords.0 && anchor.1 == coords.1,
            Self::Neighborhood => within_one(anchor, coords),
        }
    }
}

/// Whether revealing a defused mine counts toward the win quota.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadMinePolicy {
    #[default]
    Inert,
    Scored,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    pub safe_zone: SafeZone,
    pub dead_mines: DeadMinePolicy,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self {
            size,
            mines,
            safe_zone: SafeZone::Neighborhood,
            dead_mines: DeadMinePolicy::Inert,
        }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn with_safe_zone(self, safe_zone: SafeZone) -> Self {
        Self { safe_zone, ..self }
    }

    pub const fn with_dead_mines(self, dead_mines: DeadMinePolicy) -> Self {
        Self { dead_mines, ..self }
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Cells that can never hold a mine: the safe zone, or the anchor plus room for the neutralizers.
    pub const fn reserved_cells(&self) -> CellCount {
        let zone = self.safe_zone.reserved_cells();
        let neutralizers = 1 + NEUTRALIZER_COUNT;
        if zone > neutralizers { zone } else { neutralizers }
    }

    /// Revealed safe cells needed to win.
    pub const fn win_quota(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let reserved = self.reserved_cells();
        if self.mines.saturating_add(reserved) > self.total_cells() {
            return Err(GameError::BoardTooSmall {
                size: self.size,
                mines: self.mines,
                reserved,
            });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

/// Board sizes offered by the reference front end, all 10 columns wide.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Compact,
    #[default]
    Standard,
    Tall,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Compact, Self::Standard, Self::Tall];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Compact => GameConfig::new_unchecked((10, 10), 18),
            Self::Standard => GameConfig::new_unchecked((10, 13), 15),
            Self::Tall => GameConfig::new_unchecked((10, 16), 12),
        }
    }
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Coarse summary of a reveal, for front ends that only need to know what to announce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
