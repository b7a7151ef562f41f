//! Static evaluation of drop-board positions

use crate::board::{Cell, DropBoard};
use crate::rules::DROP_LINES;

use super::LineScore;

/// Score a drop-board position from `side`'s perspective.
///
/// Walks the line catalog once. A line still winnable for exactly one side
/// contributes that side's weight, positive for `side` and negative for the
/// opponent; contested and empty lines contribute nothing. Negating the
/// perspective negates the score, as negamax requires.
#[must_use]
pub fn evaluate(board: &DropBoard, side: Cell) -> i32 {
    let mut score = 0;

    for line in DROP_LINES.iter() {
        let (mine, theirs) = board.line_tally(line, side);
        if theirs == 0 {
            score += LineScore::for_count(mine);
        } else if mine == 0 {
            score -= LineScore::for_count(theirs);
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Game;

    #[test]
    fn test_empty_board_scores_zero() {
        let board = DropBoard::new();
        assert_eq!(evaluate(&board, Cell::One), 0);
        assert_eq!(evaluate(&board, Cell::Two), 0);
    }

    #[test]
    fn test_perspectives_are_zero_sum() {
        let mut board = DropBoard::new();
        board.play(3, Cell::Two);
        board.play(3, Cell::One);
        board.play(0, Cell::Two);

        assert_eq!(evaluate(&board, Cell::Two), -evaluate(&board, Cell::One));
    }

    #[test]
    fn test_three_open_beats_scattered_singles() {
        let mut threatening = DropBoard::new();
        for column in [2, 3, 4] {
            threatening.play(column, Cell::Two);
        }

        let mut scattered = DropBoard::new();
        for column in [0, 2, 4] {
            scattered.play(column, Cell::Two);
        }

        assert!(
            evaluate(&threatening, Cell::Two) > evaluate(&scattered, Cell::Two),
            "a connected triple must outscore scattered pieces"
        );
    }

    #[test]
    fn test_contested_lines_contribute_nothing() {
        let mut board = DropBoard::new();
        // Column 0: Two under One. Every line through either piece also
        // passes near the other, but only lines holding both cancel.
        board.play(0, Cell::Two);
        board.play(0, Cell::One);
        board.play(6, Cell::Two);

        let mut unblocked = DropBoard::new();
        unblocked.play(0, Cell::Two);
        unblocked.play(6, Cell::Two);

        assert!(
            evaluate(&board, Cell::Two) < evaluate(&unblocked, Cell::Two),
            "an opposing piece on a line must remove its contribution"
        );
    }
}
