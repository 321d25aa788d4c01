use defuse_core::{CellCount, Game, GameConfig, GameStatus, MarkOutcome, Result, RevealOutcome};
use rand::prelude::*;
use serde::Serialize;

use crate::command::Command;
use crate::render::{banner, render};

/// Seed for games started without `--seed`.
pub fn fresh_seed() -> u64 {
    rand::rng().random()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished,
    Quit,
}

/// What `--json` prints once play stops.
#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub seed: u64,
    pub config: GameConfig,
    pub status: GameStatus,
    pub revealed: CellCount,
    pub moves: usize,
}

/// A game in progress plus the viewer state around it.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    seed: u64,
    game: Game,
    show_all: bool,
    moves: usize,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64, show_all: bool) -> Result<Self> {
        Ok(Self {
            config,
            seed,
            game: Game::with_seed(config, seed)?,
            show_all,
            moves: 0,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn apply(&mut self, command: Command) -> Result<Step> {
        match command {
            Command::Reveal(coords) => {
                if self.game.is_revealed(coords)? {
                    log::info!("{:?} is already open", coords);
                    return Ok(Step::Continue);
                }
                let reveal = self.game.reveal(coords)?;
                if reveal.outcome().has_update() {
                    self.moves += 1;
                }
                match reveal.outcome() {
                    RevealOutcome::NoChange => log::info!("{:?} is marked, unmark it first", coords),
                    RevealOutcome::HitMine => log::info!("Mine at {:?}", coords),
                    RevealOutcome::Revealed | RevealOutcome::Won => {
                        log::debug!("Opened {} cells", reveal.revealed.len())
                    }
                }
            }
            Command::Mark(coords) => {
                if self.game.toggle_mark(coords)? == MarkOutcome::NoChange {
                    log::info!("{:?} is open, nothing to mark", coords);
                }
            }
            Command::ToggleView => self.show_all = !self.show_all,
            Command::Restart => self.restart(fresh_seed())?,
            Command::Quit => return Ok(Step::Quit),
        }

        Ok(if self.game.is_finished() {
            Step::Finished
        } else {
            Step::Continue
        })
    }

    /// Throws the current game away and starts over with the same settings.
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        log::debug!("Restarting with seed {}", seed);
        self.game = Game::with_seed(self.config, seed)?;
        self.seed = seed;
        self.moves = 0;
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut out = render(self.game.board(), self.show_all);
        match banner(self.game.status()) {
            Some(text) => out.push_str(text),
            None => out.push_str(&format!("Mines left: {}", self.game.mines_left())),
        }
        out.push('\n');
        out
    }

    pub fn summary(&self) -> Summary {
        Summary {
            seed: self.seed,
            config: self.config,
            status: self.game.status(),
            revealed: self.game.board().revealed_count(),
            moves: self.moves,
        }
    }
}
