use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells for one game, plus the bookkeeping the reveal engine keeps on it.
///
/// A board starts uninitialized: every cell is hidden and empty. The first reveal fixes the
/// anchor and lets a [`BoardGenerator`] lay out mines and neutralizers; after that the layout is
/// locked. Restarting means building a new board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    anchor: Option<Coord2>,
    revealed_count: CellCount,
    status: GameStatus,
}

/// Unchecked form a [`Board`] is deserialized through.
#[derive(Deserialize)]
struct RawBoard {
    config: GameConfig,
    cells: Array2<Cell>,
    anchor: Option<Coord2>,
    revealed_count: CellCount,
    status: GameStatus,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        raw.config.validate()?;
        let [width, height] = raw.config.size.to_nd_index();
        if raw.cells.dim() != (width, height) {
            return Err(GameError::InvalidBoardShape);
        }
        let opened = raw.cells.iter().filter(|cell| cell.is_revealed()).count();
        if usize::from(raw.revealed_count) > opened {
            return Err(GameError::InvalidBoardShape);
        }

        let board = Self {
            config: raw.config,
            cells: raw.cells,
            anchor: None,
            revealed_count: raw.revealed_count,
            status: raw.status,
        };
        let anchor = raw
            .anchor
            .map(|anchor| board.validate_coords(anchor))
            .transpose()?;
        Ok(Self { anchor, ..board })
    }
}

impl Board {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cells: Array2::default(config.size.to_nd_index()),
            anchor: None,
            revealed_count: 0,
            status: GameStatus::Playing,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn neutralizer_count(&self) -> CellCount {
        NEUTRALIZER_COUNT
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn is_initialized(&self) -> bool {
        self.anchor.is_some()
    }

    /// Where the first reveal happened, once it has.
    pub fn anchor(&self) -> Option<Coord2> {
        self.anchor
    }

    /// Revealed cells that count toward the win quota.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange { coords, size })
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn cell_type(&self, coords: Coord2) -> Result<CellType> {
        self.get(coords).map(Cell::kind)
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        self.get(coords).map(Cell::is_revealed)
    }

    pub fn is_marked(&self, coords: Coord2) -> Result<bool> {
        self.get(coords).map(Cell::is_marked)
    }

    /// Display glyph for a cell, whether or not it has been revealed.
    pub fn label(&self, coords: Coord2) -> Result<Label> {
        label(self, coords)
    }

    /// Places an object on a cell. Only generators call this, before the first reveal completes.
    pub fn set_type(&mut self, coords: Coord2, kind: CellType) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        if self.is_initialized() {
            return Err(GameError::LayoutLocked);
        }
        self.cell_mut(coords).set_kind(kind);
        Ok(())
    }

    pub fn count_of(&self, kind: CellType) -> CellCount {
        self.count_where(|cell| cell.kind() == kind)
    }

    pub fn marked_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_marked())
    }

    /// Mines not yet accounted for by a mark. Goes negative when the player over-marks.
    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.marked_count() as isize)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::surrounding(coords, self.size())
    }

    pub fn iter_orthogonal(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::orthogonal(coords, self.size())
    }

    /// All coordinates, row by row.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub(crate) fn mark_initialized(&mut self, anchor: Coord2) {
        self.anchor = Some(anchor);
    }

    /// Flags a cell as revealed, returning `false` when it already was.
    pub(crate) fn mark_revealed(&mut self, coords: Coord2) -> bool {
        let cell = self.cell_mut(coords);
        if cell.is_revealed() {
            return false;
        }
        cell.reveal();
        true
    }

    pub(crate) fn set_marked(&mut self, coords: Coord2, marked: bool) {
        self.cell_mut(coords).set_marked(marked);
    }

    pub(crate) fn increment_revealed(&mut self) {
        self.revealed_count = self.revealed_count.saturating_add(1);
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    fn count_where(&self, f: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| f(cell))
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn board(size: Coord2, mines: CellCount) -> Board {
        Board::new(GameConfig::new(size, mines).unwrap()).unwrap()
    }

    #[test]
    fn serde_keeps_a_consistent_board() {
        let mut board = board((5, 5), 3);
        board.set_type((4, 4), CellType::ActiveMine).unwrap();
        board.mark_initialized((0, 0));

        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(serde_json::from_value::<Board>(json).unwrap(), board);
    }

    #[test]
    fn deserializing_rejects_cells_that_do_not_fit_the_config() {
        let mut json = serde_json::to_value(board((5, 5), 3)).unwrap();
        json["config"]["size"] = serde_json::json!([10, 10]);

        let err = serde_json::from_value::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("do not match"), "{err}");
    }

    #[test]
    fn deserializing_rejects_a_bad_anchor_or_count() {
        let mut json = serde_json::to_value(board((5, 5), 3)).unwrap();
        json["anchor"] = serde_json::json!([7, 0]);
        assert!(serde_json::from_value::<Board>(json).is_err());

        let mut json = serde_json::to_value(board((5, 5), 3)).unwrap();
        json["revealed_count"] = serde_json::json!(4);
        assert!(serde_json::from_value::<Board>(json).is_err());
    }

    #[test]
    fn new_board_is_hidden_and_empty() {
        let board = board((4, 3), 2);

        assert_eq!(board.count_of(CellType::Empty), 12);
        assert!(board.iter_coords().all(|pos| !board[pos].is_revealed()));
        assert!(!board.is_initialized());
        assert_eq!(board.status(), GameStatus::Playing);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn out_of_range_coords_are_rejected() {
        let board = board((4, 3), 2);

        assert_eq!(
            board.get((4, 0)),
            Err(GameError::OutOfRange {
                coords: (4, 0),
                size: (4, 3),
            })
        );
        assert!(board.is_revealed((0, 3)).is_err());
        assert!(board.label((9, 9)).is_err());
    }

    #[test]
    fn layout_locks_after_initialization() {
        let mut board = board((4, 3), 2);

        board.set_type((1, 1), CellType::ActiveMine).unwrap();
        assert_eq!(board.cell_type((1, 1)), Ok(CellType::ActiveMine));

        board.mark_initialized((3, 2));
        assert_eq!(
            board.set_type((0, 0), CellType::ActiveMine),
            Err(GameError::LayoutLocked)
        );
        assert_eq!(board.anchor(), Some((3, 2)));
    }

    #[test]
    fn coords_are_row_major() {
        let board = board((3, 3), 0);
        let coords: Vec<_> = board.iter_coords().take(4).collect();
        assert_eq!(coords, [(0, 0), (1, 0), (2, 0), (0, 1)]);
    }

    #[test]
    fn revealing_clears_mark() {
        let mut board = board((4, 3), 2);

        board.set_marked((2, 2), true);
        assert_eq!(board.mines_left(), 1);

        assert!(board.mark_revealed((2, 2)));
        assert!(!board.mark_revealed((2, 2)));
        assert_eq!(board.is_marked((2, 2)), Ok(false));
        assert_eq!(board.mines_left(), 2);
    }
}
