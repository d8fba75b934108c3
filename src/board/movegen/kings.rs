//! King move generation, including castling.

use crate::board::attacks::KING_OFFSETS;
use crate::board::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(super) fn king_moves(&self, from: Square, us: Color, list: &mut MoveList) {
        for (df, dr) in KING_OFFSETS {
            let Some(to) = from.offset(df, dr) else {
                continue;
            };
            match self.piece_at(to) {
                None => list.push(Move::quiet(from, to)),
                Some((color, _)) if color != us => list.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }

        self.castling_moves(from, us, list);
    }

    /// Castling, emitted as a two-square king move.
    ///
    /// Gates: the right is still held, the rook is home, the squares
    /// between king and rook are empty, the king is not in check, and
    /// neither the transit square nor the destination is attacked. The
    /// b-file square must be empty for queenside but may be attacked.
    fn castling_moves(&self, from: Square, us: Color, list: &mut MoveList) {
        let rank = us.back_rank();
        if from != Square::new(rank, 4) {
            return;
        }
        let them = us.opponent();

        if self.has_kingside_right(us)
            && self.is_square_empty(Square::new(rank, 5))
            && self.is_square_empty(Square::new(rank, 6))
            && self.piece_at(Square::new(rank, 7)) == Some((us, Piece::Rook))
            && !self.in_check(us)
            && !self.is_square_attacked(Square::new(rank, 5), them)
            && !self.is_square_attacked(Square::new(rank, 6), them)
        {
            list.push(Move::castle(from, Square::new(rank, 6)));
        }

        if self.has_queenside_right(us)
            && self.is_square_empty(Square::new(rank, 3))
            && self.is_square_empty(Square::new(rank, 2))
            && self.is_square_empty(Square::new(rank, 1))
            && self.piece_at(Square::new(rank, 0)) == Some((us, Piece::Rook))
            && !self.in_check(us)
            && !self.is_square_attacked(Square::new(rank, 3), them)
            && !self.is_square_attacked(Square::new(rank, 2), them)
        {
            list.push(Move::castle(from, Square::new(rank, 2)));
        }
    }
}
