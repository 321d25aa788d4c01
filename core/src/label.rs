use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a front end draws for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// Active or dead mine, `*`.
    Mine,
    /// `N`.
    Neutralizer,
    /// No adjacent mines, drawn as a space. Revealing one cascades.
    Blank,
    /// Adjacent mine count, 1 to 8.
    Count(u8),
}

impl Label {
    /// Counts outside 1 to 8 never come from [`label`] and draw as `?`.
    pub fn glyph(self) -> char {
        match self {
            Self::Mine => '*',
            Self::Neutralizer => 'N',
            Self::Blank => ' ',
            Self::Count(count @ 1..=8) => char::from_digit(count.into(), 10).unwrap_or('?'),
            Self::Count(_) => '?',
        }
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Resolves the label of a cell from its own type and its neighbours'.
///
/// Only cell types are consulted, so the answer is the same before and after the cell is
/// revealed.
pub fn label(board: &Board, coords: Coord2) -> Result<Label> {
    let coords = board.validate_coords(coords)?;
    Ok(label_unchecked(board, coords))
}

pub(crate) fn label_unchecked(board: &Board, coords: Coord2) -> Label {
    match board[coords].kind() {
        CellType::ActiveMine | CellType::DeadMine => Label::Mine,
        CellType::Neutralizer => Label::Neutralizer,
        CellType::Empty => match adjacent_mine_count(board, coords) {
            0 => Label::Blank,
            count => Label::Count(count),
        },
    }
}

pub(crate) fn adjacent_mine_count(board: &Board, coords: Coord2) -> u8 {
    board
        .iter_neighbors(coords)
        .filter(|&pos| board[pos].kind().is_mine())
        .fold(0, |count, _| count + 1)
}
