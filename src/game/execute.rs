use super::board::{Board, Cell, Coord};
use super::movegen::Move;
use super::validate::IllegalMove;

/// Result of applying one move leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub board: Board,
    /// The move as executed, with capture metadata derived from geometry.
    pub mv: Move,
    /// Cell of the piece removed by this leg.
    pub captured: Option<Coord>,
    /// The moving piece was crowned on landing.
    pub crowned: bool,
}

impl Applied {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Apply a move leg and return the new board. The input board is untouched.
///
/// The destination must be a playable cell one or two diagonal steps away,
/// and a two-step leg must jump an opposing piece, which is removed. Capture
/// metadata on `mv` is ignored. Turn order, direction, and forced captures are
/// not checked; run `validate` first.
pub fn apply(mv: &Move, board: &Board) -> Result<Applied, IllegalMove> {
    let piece = board.piece_at(mv.from).ok_or(IllegalMove::NoPieceAtOrigin)?;
    if !board.get(mv.to).is_empty() {
        return Err(IllegalMove::DestinationOccupied);
    }
    if !board.is_playable(mv.to) {
        return Err(IllegalMove::NotAMemberOfLegalSet);
    }

    let captured = match mv.from.diagonal_distance(mv.to) {
        Some(1) => None,
        Some(2) => {
            let over = mv
                .from
                .midpoint(mv.to)
                .ok_or(IllegalMove::NotAMemberOfLegalSet)?;
            match board.piece_at(over) {
                Some(jumped) if jumped.owner != piece.owner => Some(over),
                _ => return Err(IllegalMove::NotAMemberOfLegalSet),
            }
        }
        _ => return Err(IllegalMove::NotAMemberOfLegalSet),
    };

    let mut next = *board;
    next.set(mv.from, Cell::Empty);
    if let Some(jumped) = captured {
        next.set(jumped, Cell::Empty);
    }

    let landed = piece.landed_on(mv.to.row());
    next.set(mv.to, Cell::Occupied(landed));

    Ok(Applied {
        board: next,
        mv: Move {
            from: mv.from,
            to: mv.to,
            captured,
        },
        captured,
        crowned: landed.crowned && !piece.crowned,
    })
}

impl Board {
    /// Copy of this board with `mv` applied.
    pub fn with_move_applied(&self, mv: &Move) -> Result<Applied, IllegalMove> {
        apply(mv, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::DarkParity;
    use crate::game::side::Side;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_simple_step_relocates_piece() {
        let board = Board::initial();
        let applied = apply(&Move::new(at(2, 2), at(3, 3)), &board).unwrap();

        assert!(!applied.is_capture());
        assert!(!applied.crowned);
        assert!(applied.board.get(at(2, 2)).is_empty());
        assert_eq!(applied.board.piece_at(at(3, 3)), Some(Side::First.man()));
        // receiver untouched
        assert_eq!(board.piece_at(at(2, 2)), Some(Side::First.man()));
    }

    #[test]
    fn test_jump_clears_intervening_cell_without_metadata() {
        let board = Board::empty(DarkParity::Even)
            .with_piece(at(2, 2), Side::First.man())
            .unwrap()
            .with_piece(at(3, 3), Side::Second.man())
            .unwrap();

        let applied = apply(&Move::new(at(2, 2), at(4, 4)), &board).unwrap();
        assert_eq!(applied.captured, Some(at(3, 3)));
        assert_eq!(applied.mv.captured, Some(at(3, 3)));
        assert!(applied.board.get(at(3, 3)).is_empty());
        assert_eq!(applied.board.count_by_side(Side::Second), 0);
    }

    #[test]
    fn test_stale_capture_metadata_is_ignored() {
        let board = Board::initial();
        let bogus = Move::capture(at(2, 2), at(5, 5), at(3, 3));
        let applied = apply(&bogus, &board).unwrap();
        assert_eq!(applied.captured, None);
        assert_eq!(applied.board.piece_at(at(5, 5)), Some(Side::Second.man()));
    }

    #[test]
    fn test_crowns_on_far_rank() {
        let board = Board::empty(DarkParity::Even)
            .with_piece(at(1, 1), Side::Second.man())
            .unwrap();
        let applied = apply(&Move::new(at(1, 1), at(0, 0)), &board).unwrap();
        assert!(applied.crowned);
        assert_eq!(applied.board.piece_at(at(0, 0)), Some(Side::Second.king()));
    }

    #[test]
    fn test_king_stays_crowned_and_is_not_recrowned() {
        let board = Board::empty(DarkParity::Even)
            .with_piece(at(1, 1), Side::Second.king())
            .unwrap();
        let applied = apply(&Move::new(at(1, 1), at(2, 2)), &board).unwrap();
        assert!(!applied.crowned);
        assert_eq!(applied.board.piece_at(at(2, 2)), Some(Side::Second.king()));

        let back = apply(&Move::new(at(2, 2), at(1, 1)), &applied.board).unwrap();
        assert!(!back.crowned);
        assert!(back.board.piece_at(at(1, 1)).unwrap().crowned);
    }

    #[test]
    fn test_rejects_empty_origin_and_occupied_destination() {
        let board = Board::initial();
        assert_eq!(
            apply(&Move::new(at(3, 3), at(4, 4)), &board),
            Err(IllegalMove::NoPieceAtOrigin)
        );
        assert_eq!(
            apply(&Move::new(at(1, 1), at(2, 2)), &board),
            Err(IllegalMove::DestinationOccupied)
        );
    }

    #[test]
    fn test_jump_over_empty_cell_is_refused() {
        let board = Board::empty(DarkParity::Even)
            .with_piece(at(2, 2), Side::First.king())
            .unwrap();
        assert_eq!(
            apply(&Move::new(at(2, 2), at(4, 4)), &board),
            Err(IllegalMove::NotAMemberOfLegalSet)
        );
    }

    #[test]
    fn test_jump_over_own_piece_is_refused() {
        let board = Board::empty(DarkParity::Even)
            .with_piece(at(2, 2), Side::First.man())
            .unwrap()
            .with_piece(at(3, 3), Side::First.man())
            .unwrap();
        assert_eq!(
            apply(&Move::new(at(2, 2), at(4, 4)), &board),
            Err(IllegalMove::NotAMemberOfLegalSet)
        );
        assert_eq!(board.count_by_side(Side::First), 2);
    }

    #[test]
    fn test_light_cell_destination_is_refused() {
        let board = Board::empty(DarkParity::Even)
            .with_piece(at(2, 2), Side::First.man())
            .unwrap();
        assert_eq!(
            apply(&Move::new(at(2, 2), at(2, 3)), &board),
            Err(IllegalMove::NotAMemberOfLegalSet)
        );
    }

    #[test]
    fn test_long_or_off_diagonal_leg_is_refused() {
        let board = Board::empty(DarkParity::Even)
            .with_piece(at(2, 2), Side::First.king())
            .unwrap()
            .with_piece(at(4, 4), Side::Second.man())
            .unwrap();
        for to in [at(5, 5), at(4, 2), at(2, 4)] {
            assert_eq!(
                apply(&Move::new(at(2, 2), to), &board),
                Err(IllegalMove::NotAMemberOfLegalSet)
            );
        }
    }
}
