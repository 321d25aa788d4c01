use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of one reveal: the cells that changed, in the order they were opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub revealed: Vec<Coord2>,
    pub status: GameStatus,
}

impl Reveal {
    fn unchanged(status: GameStatus) -> Self {
        Self {
            revealed: Vec::new(),
            status,
        }
    }

    pub fn outcome(&self) -> RevealOutcome {
        match self.status {
            _ if self.revealed.is_empty() => RevealOutcome::NoChange,
            GameStatus::Lost => RevealOutcome::HitMine,
            GameStatus::Won => RevealOutcome::Won,
            GameStatus::Playing => RevealOutcome::Revealed,
        }
    }
}

/// Applies player moves to a [`Board`], generating its layout on the first reveal.
#[derive(Clone, Debug)]
pub struct RevealEngine<G = RandomGenerator> {
    generator: G,
}

impl<G: BoardGenerator> RevealEngine<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Reveals a hidden cell and cascades through blank regions.
    ///
    /// Revealing a cell that is already revealed, or marked, changes nothing and returns an
    /// empty coordinate list. Once the game is won or lost every reveal is refused.
    pub fn reveal(&mut self, board: &mut Board, coords: Coord2) -> Result<Reveal> {
        let coords = board.validate_coords(coords)?;
        check_not_finished(board)?;

        let cell = board[coords];
        if cell.is_revealed() {
            log::warn!("Cell {:?} already revealed, ignoring", coords);
            return Ok(Reveal::unchanged(board.status()));
        }
        if cell.is_marked() {
            log::debug!("Cell {:?} is marked, not revealing", coords);
            return Ok(Reveal::unchanged(board.status()));
        }

        if !board.is_initialized() {
            self.generator.populate(board, coords)?;
            board.mark_initialized(coords);
        }

        let revealed = cascade(board, coords);
        log::debug!(
            "Reveal {:?} opened {} cells, {}/{} revealed, {:?}",
            coords,
            revealed.len(),
            board.revealed_count(),
            board.config().win_quota(),
            board.status()
        );

        Ok(Reveal {
            revealed,
            status: board.status(),
        })
    }

    pub fn toggle_mark(&self, board: &mut Board, coords: Coord2) -> Result<MarkOutcome> {
        let coords = board.validate_coords(coords)?;
        check_not_finished(board)?;

        let cell = board[coords];
        if cell.is_revealed() {
            return Ok(MarkOutcome::NoChange);
        }
        board.set_marked(coords, !cell.is_marked());
        Ok(MarkOutcome::Changed)
    }
}

fn check_not_finished(board: &Board) -> Result<()> {
    if board.status().is_finished() {
        Err(GameError::AlreadyEnded)
    } else {
        Ok(())
    }
}

/// Depth-first flood fill, visiting orthogonal neighbours up, left, right, down.
///
/// Equivalent to revealing recursively: a neighbour is checked when its turn comes, after the
/// earlier siblings' regions are fully open. Stops as soon as the game is won or lost.
fn cascade(board: &mut Board, start: Coord2) -> Vec<Coord2> {
    let quota = board.config().win_quota();
    let dead_mines = board.config().dead_mines;

    let mut revealed = Vec::new();
    let mut pending = Vec::from([start]);

    while let Some(coords) = pending.pop() {
        if !board.mark_revealed(coords) {
            continue;
        }
        revealed.push(coords);

        let kind = board[coords].kind();
        let scored = match kind {
            CellType::Empty | CellType::Neutralizer => true,
            CellType::DeadMine => dead_mines == DeadMinePolicy::Scored,
            CellType::ActiveMine => false,
        };
        if scored {
            board.increment_revealed();
        }

        let status = if kind == CellType::ActiveMine {
            GameStatus::Lost
        } else if board.revealed_count() >= quota {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        board.set_status(status);

        if status.is_finished() {
            break;
        }

        if label_unchecked(board, coords).is_blank() {
            let first = pending.len();
            pending.extend(
                board
                    .iter_orthogonal(coords)
                    .filter(|&pos| !board[pos].is_revealed()),
            );
            // stack pops last first, so flip to keep up, left, right, down
            pending[first..].reverse();
            log::trace!("Cascade from {:?}, {} pending", coords, pending.len());
        }
    }

    revealed
}
