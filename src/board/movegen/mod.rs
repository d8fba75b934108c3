//! Move generation: pseudo-legal per piece family, legality by trial make.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Enumerate moves for the side to move, ignoring self-check.
    ///
    /// Castling moves are the exception: their attack gates (not castling
    /// out of or through check) are applied here, as they cannot be
    /// expressed as a king-safety filter on the final position alone.
    #[must_use]
    pub fn pseudo_moves(&self) -> MoveList {
        let mut list = MoveList::new();
        let us = self.side_to_move;

        for idx in 0..64 {
            let Some((color, piece)) = self.squares[idx] else {
                continue;
            };
            if color != us {
                continue;
            }
            let from = Square::from_index(idx);
            match piece {
                Piece::Pawn => self.pawn_moves(from, us, &mut list),
                Piece::Knight => self.knight_moves(from, us, &mut list),
                Piece::Bishop | Piece::Rook | Piece::Queen => {
                    self.slider_moves(from, us, piece, &mut list);
                }
                Piece::King => self.king_moves(from, us, &mut list),
            }
        }

        list
    }

    /// All strictly legal moves, filtered from the pseudo-moves by a
    /// trial make/unmake.
    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        let pseudo = self.pseudo_moves();
        let mut legal = MoveList::new();

        for mv in &pseudo {
            if let Some(info) = self.try_make(*mv) {
                self.unmake(&info);
                legal.push(*mv);
            }
        }

        legal
    }

    /// Legal moves originating on `from`.
    #[must_use]
    pub fn legal_moves_from(&mut self, from: Square) -> MoveList {
        let all = self.legal_moves();
        let mut out = MoveList::new();
        for mv in &all {
            if mv.from() == from {
                out.push(*mv);
            }
        }
        out
    }
}
