//! Buffer-level engine contract: fixed boards must get fixed replies.

use gridline::{Cell, Engine, EngineError, Outcome, NO_MOVE};

fn grid_reply(board: [u8; 9]) -> i64 {
    Engine::new().tic_tac_toe(&board).unwrap()
}

fn drop_reply(board: [u8; 42]) -> i64 {
    Engine::new().connect_four(&board, None).unwrap()
}

#[test]
fn grid_completes_the_top_row() {
    assert_eq!(grid_reply([2, 2, 0, 1, 1, 0, 0, 0, 0]), 2);
}

#[test]
fn grid_completes_rows_and_columns() {
    assert_eq!(grid_reply([0, 0, 0, 2, 2, 0, 1, 1, 0]), 5);
    assert_eq!(grid_reply([0, 2, 0, 0, 2, 0, 1, 0, 1]), 7);
}

#[test]
fn grid_completes_the_ascending_diagonal() {
    assert_eq!(grid_reply([1, 0, 0, 0, 2, 0, 2, 1, 0]), 2);
    assert_eq!(grid_reply([1, 0, 2, 0, 0, 0, 2, 0, 1]), 4);
    assert_eq!(grid_reply([1, 0, 2, 1, 2, 0, 0, 0, 0]), 6);
}

#[test]
fn grid_completes_the_descending_diagonal() {
    assert_eq!(grid_reply([0, 0, 0, 1, 2, 0, 1, 0, 2]), 0);
    assert_eq!(grid_reply([2, 0, 1, 0, 0, 0, 1, 0, 2]), 4);
    assert_eq!(grid_reply([2, 0, 0, 0, 2, 0, 1, 1, 0]), 8);
}

#[test]
fn grid_takes_a_win_over_a_block() {
    // Each board lets the machine win at 8 while the opponent threatens
    // elsewhere; winning must outrank blocking.
    assert_eq!(grid_reply([0, 0, 0, 1, 0, 1, 2, 2, 0]), 8);
    assert_eq!(grid_reply([0, 1, 2, 0, 0, 2, 0, 1, 0]), 8);
    assert_eq!(grid_reply([1, 0, 2, 0, 0, 2, 1, 0, 0]), 8);
}

#[test]
fn grid_opens_in_the_center() {
    assert_eq!(grid_reply([0u8; 9]), 4);
}

#[test]
fn grid_terminal_boards_get_the_sentinel() {
    // Won for Two, won for One, and drawn.
    assert_eq!(grid_reply([2, 2, 2, 1, 1, 0, 0, 0, 0]), NO_MOVE);
    assert_eq!(grid_reply([1, 1, 1, 2, 2, 0, 0, 0, 2]), NO_MOVE);
    assert_eq!(grid_reply([1, 2, 1, 1, 2, 2, 2, 1, 1]), NO_MOVE);
    assert_eq!(grid_reply([1u8; 9]), NO_MOVE);
}

#[test]
fn grid_never_picks_an_occupied_cell() {
    let boards: [[u8; 9]; 4] = [
        [1, 0, 0, 0, 2, 0, 0, 0, 0],
        [1, 2, 1, 0, 2, 0, 0, 1, 0],
        [2, 1, 0, 1, 2, 0, 0, 0, 1],
        [0, 0, 1, 0, 2, 1, 2, 0, 0],
    ];

    for board in boards {
        let reply = grid_reply(board);
        let index = usize::try_from(reply).expect("non-terminal board must get a move");
        assert_eq!(board[index], 0, "reply {} is an occupied cell", reply);
    }
}

#[test]
fn grid_replies_are_deterministic() {
    let board = [0, 0, 0, 2, 1, 0, 1, 0, 2];
    let first = grid_reply(board);
    for _ in 0..5 {
        assert_eq!(grid_reply(board), first);
    }
}

#[test]
fn drop_opens_in_the_center_column() {
    assert_eq!(drop_reply([0u8; 42]), 3);
}

#[test]
fn drop_completes_the_bottom_row() {
    let mut board = [0u8; 42];
    board[35] = 2;
    board[36] = 2;
    board[37] = 2;
    board[28] = 1;
    board[29] = 1;
    assert_eq!(drop_reply(board), 3);
}

#[test]
fn drop_wins_on_an_interior_column() {
    let mut board = [0u8; 42];
    board[35] = 1;
    board[36] = 2;
    board[37] = 2;
    board[38] = 2;
    board[30] = 1;
    board[31] = 1;
    assert_eq!(drop_reply(board), 4, "column 4 completes 36..39");
}

#[test]
fn drop_blocks_an_open_three() {
    let mut board = [0u8; 42];
    board[35] = 1;
    board[36] = 1;
    board[37] = 1;
    board[41] = 2;
    assert_eq!(drop_reply(board), 3);
}

#[test]
fn drop_terminal_boards_get_the_sentinel() {
    let mut won = [0u8; 42];
    for column in 0..4 {
        won[35 + column] = 2;
    }
    won[28] = 1;
    won[29] = 1;
    won[30] = 1;
    assert_eq!(drop_reply(won), NO_MOVE);
}

#[test]
fn drop_never_picks_a_full_column() {
    let mut board = [0u8; 42];
    // Stack column 3 to the top, alternating sides.
    for row in 0..6 {
        board[row * 7 + 3] = 1 + (row as u8 % 2);
    }

    let reply = drop_reply(board);
    let column = usize::try_from(reply).expect("non-terminal board must get a move");
    assert_ne!(column, 3, "column 3 is full");
    assert!(column < 7);
}

#[test]
fn drop_depth_override_still_finds_immediate_wins() {
    let mut board = [0u8; 42];
    board[35] = 2;
    board[36] = 2;
    board[37] = 2;
    board[28] = 1;
    board[29] = 1;

    let engine = Engine::new();
    for depth in [1, 2, 4, 8] {
        assert_eq!(engine.connect_four(&board, Some(depth)).unwrap(), 3);
    }
}

#[test]
fn malformed_buffers_are_rejected() {
    let engine = Engine::new();

    assert_eq!(
        engine.tic_tac_toe(&[0u8; 10]),
        Err(EngineError::BadLength {
            expected: 9,
            actual: 10
        })
    );
    assert_eq!(
        engine.connect_four(&[0u8; 41], None),
        Err(EngineError::BadLength {
            expected: 42,
            actual: 41
        })
    );

    let mut board = [0u8; 42];
    board[7] = 9;
    assert_eq!(
        engine.connect_four(&board, None),
        Err(EngineError::BadCell { index: 7, value: 9 })
    );
}

#[test]
fn cell_and_outcome_serialize_as_snake_case() {
    assert_eq!(serde_json::to_string(&Cell::Two).unwrap(), "\"two\"");
    assert_eq!(
        serde_json::to_string(&Outcome::Win(Cell::One)).unwrap(),
        "{\"win\":\"one\"}"
    );
    assert_eq!(serde_json::to_string(&Outcome::Ongoing).unwrap(), "\"ongoing\"");
}
