use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Rejection-sampling draws per placement before falling back to an exhaustive pick.
const MAX_ATTEMPTS: u32 = 256;

/// Uniform placement with a mine-free zone around the first reveal.
///
/// Mines are drawn one at a time, resampling any coordinate that already holds a mine or falls
/// in the configured [`SafeZone`]. Neutralizers follow the same way but only avoid the anchor
/// and existing objects, so one may sit right next to the first click.
#[derive(Clone, Debug)]
pub struct RandomGenerator<R = SmallRng> {
    rng: R,
}

impl RandomGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a random cell accepted by `eligible`, or `None` when no cell is.
    fn pick(
        &mut self,
        board: &Board,
        eligible: impl Fn(&Board, Coord2) -> bool,
    ) -> Option<Coord2> {
        let (width, height) = board.size();

        for _ in 0..MAX_ATTEMPTS {
            let candidate = (
                self.rng.random_range(0..width),
                self.rng.random_range(0..height),
            );
            if eligible(board, candidate) {
                return Some(candidate);
            }
        }

        let free = board
            .iter_coords()
            .filter(|&pos| eligible(board, pos))
            .count();
        if free == 0 {
            return None;
        }
        log::warn!(
            "No free cell after {} draws, picking among the {} left",
            MAX_ATTEMPTS,
            free
        );
        let place = self.rng.random_range(0..free);
        board
            .iter_coords()
            .filter(|&pos| eligible(board, pos))
            .nth(place)
    }
}

impl<R: Rng> BoardGenerator for RandomGenerator<R> {
    fn populate(&mut self, board: &mut Board, anchor: Coord2) -> Result<()> {
        let anchor = board.validate_coords(anchor)?;
        let config = *board.config();

        let mine_slot = |board: &Board, pos: Coord2| {
            board[pos].kind() == CellType::Empty && !config.safe_zone.excludes(anchor, pos)
        };
        let neutralizer_slot =
            |board: &Board, pos: Coord2| board[pos].kind() == CellType::Empty && pos != anchor;

        // fail fast instead of sampling forever
        let mine_slots = count_slots(board, mine_slot);
        if config.mines > mine_slots {
            return Err(GameError::BoardTooSmall {
                size: config.size,
                mines: config.mines,
                reserved: config.total_cells() - mine_slots,
            });
        }

        for _ in 0..config.mines {
            let pos = self
                .pick(board, mine_slot)
                .ok_or_else(|| too_small(&config))?;
            board.set_type(pos, CellType::ActiveMine)?;
        }

        let mut neutralizers = Vec::with_capacity(NEUTRALIZER_COUNT.into());
        for _ in 0..NEUTRALIZER_COUNT {
            let pos = self
                .pick(board, neutralizer_slot)
                .ok_or_else(|| too_small(&config))?;
            board.set_type(pos, CellType::Neutralizer)?;
            neutralizers.push(pos);
        }

        let mut defused = 0;
        for &pos in &neutralizers {
            defused += defuse_around(board, pos)?;
        }

        log::debug!(
            "Generated {:?} board around {:?}: {} mines ({} defused), neutralizers at {:?}",
            config.size,
            anchor,
            config.mines,
            defused,
            neutralizers
        );
        Ok(())
    }
}

fn count_slots(board: &Board, eligible: impl Fn(&Board, Coord2) -> bool) -> CellCount {
    board
        .iter_coords()
        .filter(|&pos| eligible(board, pos))
        .fold(0, |count, _| count + 1)
}

fn too_small(config: &GameConfig) -> GameError {
    GameError::BoardTooSmall {
        size: config.size,
        mines: config.mines,
        reserved: config.reserved_cells(),
    }
}
