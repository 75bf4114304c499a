//! Worked positions on the odd-parity layout, where (2,1) is a dark cell.

use checkers_engine::game::{
    legal_moves, Board, Coord, DarkParity, Game, IllegalMove, Move, Phase, Piece, Rules, Side,
};

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

fn position(pieces: &[(usize, usize, Piece)]) -> Board {
    pieces
        .iter()
        .fold(Board::empty(DarkParity::Odd), |board, &(row, col, piece)| {
            board.with_piece(at(row, col), piece).unwrap()
        })
}

#[test]
fn simple_move_from_opening() {
    let board = Board::initial_with(DarkParity::Odd);
    let game = Game::from_position(board, Side::First, Rules::default());
    let (next, report) = game.submit(&Move::new(at(2, 1), at(3, 0))).unwrap();

    assert!(report.captured.is_none());
    assert!(!report.chain_continues);
    assert!(next.board().get(at(2, 1)).is_empty());
    assert_eq!(next.board().piece_at(at(3, 0)), Some(Side::First.man()));
    assert_eq!(next.active_side(), Side::Second);
    // the original value is unchanged
    assert_eq!(game.board().piece_at(at(2, 1)), Some(Side::First.man()));
}

#[test]
fn single_capture_removes_jumped_piece() {
    let board = position(&[
        (3, 2, Side::First.man()),
        (4, 3, Side::Second.man()),
        (7, 0, Side::Second.man()),
    ]);
    let game = Game::from_position(board, Side::First, Rules::default());
    let (next, report) = game.submit(&Move::new(at(3, 2), at(5, 4))).unwrap();

    assert_eq!(report.captured, Some(at(4, 3)));
    assert!(report.mv.is_capture());
    assert!(!report.crowned);
    assert!(next.board().get(at(4, 3)).is_empty());
    assert_eq!(next.board().piece_at(at(5, 4)), Some(Side::First.man()));
}

#[test]
fn capture_onto_far_rank_crowns() {
    let board = position(&[
        (5, 2, Side::First.man()),
        (6, 3, Side::Second.man()),
        (7, 0, Side::Second.man()),
    ]);
    let game = Game::from_position(board, Side::First, Rules::default());
    let (next, report) = game.submit(&Move::new(at(5, 2), at(7, 4))).unwrap();

    assert!(report.crowned);
    assert_eq!(next.board().piece_at(at(7, 4)), Some(Side::First.king()));
}

#[test]
fn forced_chain_capture() {
    let board = position(&[
        (3, 2, Side::First.man()),
        (0, 1, Side::First.man()),
        (4, 3, Side::Second.man()),
        (6, 5, Side::Second.man()),
        (7, 0, Side::Second.man()),
    ]);
    let game = Game::from_position(board, Side::First, Rules::default());
    let (game, report) = game.submit(&Move::new(at(3, 2), at(5, 4))).unwrap();

    assert!(report.chain_continues);
    assert_eq!(game.phase(), Phase::ChainCapture(at(5, 4)));
    assert_eq!(game.active_side(), Side::First);

    let expected = vec![Move::capture(at(5, 4), at(6, 5), at(7, 6))];
    assert_eq!(legal_moves(at(5, 4), game.board(), Side::First), expected);
    assert_eq!(game.legal_moves_from(at(5, 4)), expected);
    assert!(game.legal_moves_from(at(0, 1)).is_empty());

    assert_eq!(
        game.submit(&Move::new(at(0, 1), at(1, 0))).unwrap_err(),
        IllegalMove::MustContinueForcedCapture
    );
    assert_eq!(
        game.submit(&Move::new(at(5, 4), at(6, 3))).unwrap_err(),
        IllegalMove::NotAMemberOfLegalSet
    );

    let (game, report) = game.submit(&Move::new(at(5, 4), at(7, 6))).unwrap();
    assert!(report.crowned);
    assert!(!report.chain_continues);
    assert_eq!(game.active_side(), Side::Second);
}

#[test]
fn uncrowned_piece_cannot_step_backwards() {
    let board = position(&[(4, 3, Side::First.man()), (7, 0, Side::Second.man())]);
    let game = Game::from_position(board, Side::First, Rules::default());

    for to in [at(3, 2), at(3, 4)] {
        assert_eq!(
            game.submit(&Move::new(at(4, 3), to)).unwrap_err(),
            IllegalMove::NotAMemberOfLegalSet
        );
    }

    let board = position(&[(4, 3, Side::First.king()), (7, 0, Side::Second.man())]);
    let game = Game::from_position(board, Side::First, Rules::default());
    assert!(game.submit(&Move::new(at(4, 3), at(3, 2))).is_ok());
}

#[test]
fn mandatory_capture_suppresses_simple_step() {
    let board = position(&[
        (3, 2, Side::First.man()),
        (1, 0, Side::First.man()),
        (4, 3, Side::Second.man()),
        (7, 0, Side::Second.man()),
    ]);
    let game = Game::from_position(board, Side::First, Rules::default());

    assert!(legal_moves(at(1, 0), game.board(), Side::First).is_empty());
    assert_eq!(
        game.submit(&Move::new(at(1, 0), at(2, 1))).unwrap_err(),
        IllegalMove::NotAMemberOfLegalSet
    );
    assert_eq!(game.selectable_cells(), vec![at(3, 2)]);
    assert!(game.submit(&Move::new(at(3, 2), at(5, 4))).is_ok());
}

#[test]
fn optional_capture_variant_allows_simple_step() {
    let rules = Rules {
        mandatory_capture: false,
        ..Rules::default()
    };
    let board = position(&[
        (3, 2, Side::First.man()),
        (1, 0, Side::First.man()),
        (4, 3, Side::Second.man()),
        (7, 0, Side::Second.man()),
    ]);
    let game = Game::from_position(board, Side::First, rules);
    assert!(game.submit(&Move::new(at(1, 0), at(2, 1))).is_ok());
}
