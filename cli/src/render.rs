use std::fmt::Write;

use defuse_core::{Board, GameStatus};

const HIDDEN: char = '#';
const MARKED: char = '!';

/// Draws the board as text, one row per line, with column and row indices.
///
/// Hidden cells show as `#` and marked ones as `!`, unless `show_all` is set, in which case
/// every cell shows its label.
pub fn render(board: &Board, show_all: bool) -> String {
    let (width, height) = board.size();
    let mut out = String::new();

    out.push_str("    ");
    for x in 0..width {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');

    for y in 0..height {
        let _ = write!(out, "{:>3} ", y);
        for x in 0..width {
            let cell = board[(x, y)];
            let glyph = if cell.is_revealed() || show_all {
                board.label((x, y)).map(|label| label.glyph()).unwrap_or('?')
            } else if cell.is_marked() {
                MARKED
            } else {
                HIDDEN
            };
            let _ = write!(out, "{:>3}", glyph);
        }
        out.push('\n');
    }

    out
}

pub fn banner(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Won => Some("You win!"),
        GameStatus::Lost => Some("You lose!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defuse_core::{FixedGenerator, Game};

    fn game() -> Game<FixedGenerator> {
        let generator = FixedGenerator::new(&[(2, 0)], &[]);
        Game::new(generator.config((3, 2)), generator).unwrap()
    }

    #[test]
    fn hidden_board_is_all_hashes() {
        let game = game();
        let text = render(game.board(), false);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "      0  1  2");
        assert_eq!(lines[1], "  0   #  #  #");
    }

    #[test]
    fn shows_labels_and_marks() {
        let mut game = game();
        game.reveal((0, 0)).unwrap();
        game.toggle_mark((2, 1)).unwrap();

        let text = render(game.board(), false);
        assert_eq!(text.lines().nth(1), Some("  0      1  #"));
        assert_eq!(text.lines().nth(2), Some("  1      1  !"));

        let all = render(game.board(), true);
        assert_eq!(all.lines().nth(1), Some("  0      1  *"));
    }

    #[test]
    fn banners_only_when_finished() {
        assert_eq!(banner(GameStatus::Playing), None);
        assert_eq!(banner(GameStatus::Lost), Some("You lose!"));
    }
}
