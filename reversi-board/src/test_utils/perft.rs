//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises the in-place place/retract cycle the search relies on.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::side::Side;

pub fn run_perft(depth: u64) -> u64 {
    let mut board = Board::new();
    leaves_below(&mut board, Side::Black, depth, false)
}

fn leaves_below(board: &mut Board, side: Side, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(side);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !side, depth - 1, true);
    }

    all_moves
        .map(|mv| {
            let flips = board.place(mv, side);
            let leaves = leaves_below(board, !side, depth - 1, false);
            board.retract(mv, flips, side);
            leaves
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}

#[test]
fn perft_leaves_board_untouched() {
    let mut board = Board::new();
    leaves_below(&mut board, Side::Black, 5, false);
    assert_eq!(board, Board::new());
}
