use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {coords:?} are outside a {size:?} board")]
    OutOfRange { coords: Coord2, size: Coord2 },
    #[error("Board {size:?} cannot fit {mines} mines with {reserved} reserved cells")]
    BoardTooSmall {
        size: Coord2,
        mines: CellCount,
        reserved: CellCount,
    },
    #[error("Board width and height must be at least 1")]
    InvalidSize,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Board layout is fixed once the first cell is revealed")]
    LayoutLocked,
    #[error("Board cells do not match its configuration")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
