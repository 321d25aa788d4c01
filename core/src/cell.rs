use serde::{Deserialize, Serialize};

/// What occupies a cell, independent of whether the player has seen it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    /// Nothing here, shown as blank or as the adjacent mine count.
    #[default]
    Empty,
    /// Ends the game when revealed.
    ActiveMine,
    /// A mine defused by a neighbouring neutralizer, shown like any mine.
    DeadMine,
    /// Safe special cell that defuses the mines around it.
    Neutralizer,
}

impl CellType {
    /// Active or dead, both look like a mine and both count for adjacency.
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::ActiveMine | Self::DeadMine)
    }

    /// Cells that must be revealed to win.
    pub const fn is_safe(self) -> bool {
        matches!(self, Self::Empty | Self::Neutralizer)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellType,
    revealed: bool,
    marked: bool,
}

impl Cell {
    pub const fn kind(self) -> CellType {
        self.kind
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_marked(self) -> bool {
        self.marked
    }

    pub(crate) fn set_kind(&mut self, kind: CellType) {
        self.kind = kind;
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
        self.marked = false;
    }

    pub(crate) fn set_marked(&mut self, marked: bool) {
        self.marked = marked;
    }
}
