use crate::*;

/// One game session: a board and the engine allowed to change it.
///
/// This is the surface a front end talks to. Restarting is done by building a new `Game`; the
/// old one is dropped whole.
#[derive(Clone, Debug)]
pub struct Game<G = RandomGenerator> {
    board: Board,
    engine: RevealEngine<G>,
}

impl Game {
    /// A game with uniformly random layout drawn from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomGenerator::from_seed(seed))
    }
}

impl<G: BoardGenerator> Game<G> {
    pub fn new(config: GameConfig, generator: G) -> Result<Self> {
        Ok(Self {
            board: Board::new(config)?,
            engine: RevealEngine::new(generator),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        self.board.config()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_finished(&self) -> bool {
        self.board.status().is_finished()
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<Reveal> {
        self.engine.reveal(&mut self.board, coords)
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.engine.toggle_mark(&mut self.board, coords)
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        self.board.is_revealed(coords)
    }

    pub fn is_marked(&self, coords: Coord2) -> Result<bool> {
        self.board.is_marked(coords)
    }

    pub fn label(&self, coords: Coord2) -> Result<Label> {
        self.board.label(coords)
    }

    pub fn mines_left(&self) -> isize {
        self.board.mines_left()
    }
}
