use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Lays out mines and neutralizers on a fresh board.
///
/// Called exactly once per board, from the first reveal, with that reveal's coordinates as the
/// anchor.
pub trait BoardGenerator {
    fn populate(&mut self, board: &mut Board, anchor: Coord2) -> Result<()>;
}

/// Turns every active mine around `coords` into a dead one. Already dead mines stay dead.
pub fn defuse_around(board: &mut Board, coords: Coord2) -> Result<CellCount> {
    let coords = board.validate_coords(coords)?;
    let mut defused = 0;
    for pos in board.iter_neighbors(coords) {
        if board[pos].kind() == CellType::ActiveMine {
            board.set_type(pos, CellType::DeadMine)?;
            defused += 1;
        }
    }
    Ok(defused)
}

/// Puts a neutralizer on `coords` and defuses its neighbourhood.
pub fn place_neutralizer(board: &mut Board, coords: Coord2) -> Result<CellCount> {
    board.set_type(coords, CellType::Neutralizer)?;
    defuse_around(board, coords)
}
