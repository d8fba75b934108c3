//! Making and unmaking moves with incremental hash updates.

use crate::zobrist::ZOBRIST;

use super::{
    Board, Color, Move, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};

/// Everything needed to reverse a move: the move itself, any captured
/// piece, and the state that cannot be recomputed (en passant target,
/// castling rights, halfmove clock, hash).
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    mv: Move,
    captured: Option<(Color, Piece)>,
    prev_en_passant: Option<Square>,
    prev_castling: u8,
    prev_halfmove: u32,
    prev_hash: u64,
}

impl UnmakeInfo {
    /// The move this record reverses.
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The piece the move captured, if any.
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured
    }
}

impl Board {
    /// Perform `mv`, updating the hash in lockstep.
    ///
    /// Returns `None` if the move would leave the mover's king in check;
    /// in that case the board is restored before returning. The move is
    /// otherwise assumed to be pseudo-legal for the current position.
    pub fn try_make(&mut self, mv: Move) -> Option<UnmakeInfo> {
        let from = mv.from();
        let to = mv.to();
        let (color, piece) = self.squares[from.as_index()]?;

        let mut info = UnmakeInfo {
            mv,
            captured: None,
            prev_en_passant: self.en_passant_target,
            prev_castling: self.castling_rights,
            prev_halfmove: self.halfmove_clock,
            prev_hash: self.hash,
        };

        let resets_clock = piece == Piece::Pawn || mv.is_capture();
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock + 1
        };

        let z = &*ZOBRIST;

        // XOR out state keys that are about to change.
        self.hash ^= z.en_passant_key(self.en_passant_target);
        self.hash ^= z.castling_key(self.castling_rights);
        if self.side_to_move == Color::Black {
            self.hash ^= z.side_key();
        }

        // Cleared unconditionally; re-set below on a double push.
        self.en_passant_target = None;

        if mv.is_en_passant() {
            // The captured pawn sits one rank behind `to` from the
            // mover's perspective.
            let cap_rank = (to.rank() as isize - color.pawn_direction()) as usize;
            let cap_sq = Square::new(cap_rank, to.file());
            info.captured = self.squares[cap_sq.as_index()];
            if let Some((cc, cp)) = info.captured {
                self.hash ^= z.piece_key(cc, cp, cap_sq);
            }
            self.squares[cap_sq.as_index()] = None;
        } else if mv.is_capture() {
            info.captured = self.squares[to.as_index()];
            if let Some((cc, cp)) = info.captured {
                self.hash ^= z.piece_key(cc, cp, to);
            }
        }

        self.hash ^= z.piece_key(color, piece, from);
        self.squares[to.as_index()] = self.squares[from.as_index()];
        self.squares[from.as_index()] = None;
        self.hash ^= z.piece_key(color, piece, to);

        if let Some(promo) = mv.promotion() {
            self.hash ^= z.piece_key(color, Piece::Pawn, to);
            self.hash ^= z.piece_key(color, promo, to);
            self.squares[to.as_index()] = Some((color, promo));
        }

        if mv.is_castle() {
            let rank = color.back_rank();
            let (rook_from, rook_to) = if to.file() == 6 {
                (Square::new(rank, 7), Square::new(rank, 5))
            } else {
                (Square::new(rank, 0), Square::new(rank, 3))
            };
            if let Some((rc, rp)) = self.squares[rook_from.as_index()] {
                self.hash ^= z.piece_key(rc, rp, rook_from);
                self.hash ^= z.piece_key(rc, rp, rook_to);
                self.squares[rook_to.as_index()] = self.squares[rook_from.as_index()];
                self.squares[rook_from.as_index()] = None;
            }
        }

        self.update_castling_rights(from, to);

        if piece == Piece::Pawn {
            let from_rank = from.rank() as isize;
            let to_rank = to.rank() as isize;
            if (to_rank - from_rank).abs() == 2 {
                self.en_passant_target =
                    Some(Square::from_index((from.as_index() + to.as_index()) / 2));
            }
        }

        self.side_to_move = self.side_to_move.opponent();

        // Legality: the mover's king must not be left attacked.
        if self.in_check(self.side_to_move.opponent()) {
            self.unmake(&info);
            return None;
        }

        // XOR in the new state keys.
        self.hash ^= z.en_passant_key(self.en_passant_target);
        self.hash ^= z.castling_key(self.castling_rights);
        if self.side_to_move == Color::Black {
            self.hash ^= z.side_key();
        }

        Some(info)
    }

    /// Reverse a move made by [`Board::try_make`].
    pub fn unmake(&mut self, info: &UnmakeInfo) {
        let mv = info.mv;
        let from = mv.from();
        let to = mv.to();

        self.side_to_move = self.side_to_move.opponent();
        self.en_passant_target = info.prev_en_passant;
        self.castling_rights = info.prev_castling;
        self.halfmove_clock = info.prev_halfmove;
        self.hash = info.prev_hash;

        if mv.is_castle() {
            if let Some((color, _)) = self.squares[to.as_index()] {
                let rank = color.back_rank();
                let (rook_from, rook_to) = if to.file() == 6 {
                    (Square::new(rank, 7), Square::new(rank, 5))
                } else {
                    (Square::new(rank, 0), Square::new(rank, 3))
                };
                self.squares[rook_from.as_index()] = self.squares[rook_to.as_index()];
                self.squares[rook_to.as_index()] = None;
            }
        }

        self.squares[from.as_index()] = self.squares[to.as_index()];
        self.squares[to.as_index()] = None;

        // A promoted piece moves back as the pawn it was.
        if mv.promotion().is_some() {
            if let Some((color, _)) = self.squares[from.as_index()] {
                self.squares[from.as_index()] = Some((color, Piece::Pawn));
            }
        }

        if mv.is_en_passant() {
            if let Some((color, _)) = self.squares[from.as_index()] {
                let cap_rank = (to.rank() as isize - color.pawn_direction()) as usize;
                let cap_sq = Square::new(cap_rank, to.file());
                self.squares[cap_sq.as_index()] = info.captured;
            }
        } else if mv.is_capture() {
            self.squares[to.as_index()] = info.captured;
        }
    }

    /// Any touch of a king-home square clears both of that color's
    /// rights; any touch of a home rook square clears that side's right.
    /// Covers rook captures as well as rook and king moves.
    fn update_castling_rights(&mut self, from: Square, to: Square) {
        let mut clear_if_touched = |sq: usize, mask: u8| {
            if from.as_index() == sq || to.as_index() == sq {
                self.castling_rights &= !mask;
            }
        };

        clear_if_touched(4, CASTLE_WHITE_K | CASTLE_WHITE_Q); // e1
        clear_if_touched(0, CASTLE_WHITE_Q); // a1
        clear_if_touched(7, CASTLE_WHITE_K); // h1
        clear_if_touched(60, CASTLE_BLACK_K | CASTLE_BLACK_Q); // e8
        clear_if_touched(56, CASTLE_BLACK_Q); // a8
        clear_if_touched(63, CASTLE_BLACK_K); // h8
    }
}
