use alloc::vec::Vec;

use super::*;

/// Places objects at known coordinates, whatever the anchor.
///
/// Meant for reproducible puzzles and test fixtures. Defusal still applies, so a listed mine
/// next to a listed neutralizer ends up dead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedGenerator {
    mines: Vec<Coord2>,
    neutralizers: Vec<Coord2>,
}

impl FixedGenerator {
    pub fn new(mines: &[Coord2], neutralizers: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
            neutralizers: neutralizers.to_vec(),
        }
    }

    /// A config sized for exactly this layout, with the safe-zone check disabled.
    pub fn config(&self, size: Coord2) -> GameConfig {
        let mines = self.mines.len().try_into().unwrap_or(CellCount::MAX);
        GameConfig::new_unchecked(size, mines).with_safe_zone(SafeZone::Disabled)
    }
}

impl BoardGenerator for FixedGenerator {
    fn populate(&mut self, board: &mut Board, anchor: Coord2) -> Result<()> {
        for &pos in &self.mines {
            board.set_type(pos, CellType::ActiveMine)?;
        }
        for &pos in &self.neutralizers {
            place_neutralizer(board, pos)?;
        }

        let count = board.count_of(CellType::ActiveMine) + board.count_of(CellType::DeadMine);
        if count != board.mine_count() {
            log::warn!(
                "Fixed layout mine count mismatch, actual: {}, configured: {}",
                count,
                board.mine_count()
            );
        }
        if board[board.validate_coords(anchor)?].kind().is_mine() {
            log::debug!("Fixed layout puts a mine under the anchor {:?}", anchor);
        }
        Ok(())
    }
}
