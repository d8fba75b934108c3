//! Bishop, rook and queen move generation.

use crate::board::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::board::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(super) fn slider_moves(&self, from: Square, us: Color, piece: Piece, list: &mut MoveList) {
        if matches!(piece, Piece::Bishop | Piece::Queen) {
            for (df, dr) in BISHOP_DIRECTIONS {
                self.slide(from, us, df, dr, list);
            }
        }
        if matches!(piece, Piece::Rook | Piece::Queen) {
            for (df, dr) in ROOK_DIRECTIONS {
                self.slide(from, us, df, dr, list);
            }
        }
    }

    /// Walk one ray, emitting quiet moves until the first blocker and a
    /// capture if the blocker is an enemy piece.
    fn slide(&self, from: Square, us: Color, df: isize, dr: isize, list: &mut MoveList) {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match self.piece_at(to) {
                None => list.push(Move::quiet(from, to)),
                Some((color, _)) => {
                    if color != us {
                        list.push(Move::capture(from, to));
                    }
                    return;
                }
            }
            current = to;
        }
    }
}
