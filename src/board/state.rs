//! Board storage and game-state queries.

use crate::zobrist::ZOBRIST;

use super::{
    Color, Piece, Square, ALL_CASTLING_RIGHTS, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};

/// A chess position: piece placement plus side to move, en passant
/// target, castling rights, halfmove clock and Zobrist hash.
///
/// The hash is maintained incrementally by make/unmake and always equals
/// [`Board::recompute_hash`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Mailbox: one entry per square, rank-major (a1 = 0).
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    /// Square a pawn just double-pushed over, i.e. the capture target.
    pub(crate) en_passant_target: Option<Square>,
    /// Bitmask: WK=1, WQ=2, BK=4, BQ=8.
    pub(crate) castling_rights: u8,
    /// Plies since the last pawn move or capture.
    pub(crate) halfmove_clock: u32,
    pub(crate) hash: u64,
}

impl Board {
    /// Create a board in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Create a board with no pieces and no castling rights.
    #[must_use]
    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: 0,
            halfmove_clock: 0,
            hash: 0,
        }
    }

    /// Return the board to the standard starting position.
    pub fn reset(&mut self) {
        self.squares = [None; 64];

        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            self.squares[Square::new(0, file).as_index()] = Some((Color::White, piece));
            self.squares[Square::new(1, file).as_index()] = Some((Color::White, Piece::Pawn));
            self.squares[Square::new(6, file).as_index()] = Some((Color::Black, Piece::Pawn));
            self.squares[Square::new(7, file).as_index()] = Some((Color::Black, piece));
        }

        self.side_to_move = Color::White;
        self.en_passant_target = None;
        self.castling_rights = ALL_CASTLING_RIGHTS;
        self.halfmove_clock = 0;
        self.hash = self.recompute_hash();
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()]
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_square_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The current en passant capture target, if any.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// The castling-rights bitmask (WK=1, WQ=2, BK=4, BQ=8).
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> u8 {
        self.castling_rights
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// The incrementally maintained Zobrist hash.
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// The square of the given side's king.
    ///
    /// Returns `None` only for artificial positions without a king.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        (0..64).map(Square::from_index).find(|&sq| {
            matches!(self.squares[sq.as_index()], Some((c, Piece::King)) if c == color)
        })
    }

    /// Recompute the Zobrist hash from scratch.
    ///
    /// Used when building positions and by tests to validate the
    /// incremental updates.
    #[must_use]
    pub fn recompute_hash(&self) -> u64 {
        let z = &*ZOBRIST;
        let mut hash = 0u64;

        for idx in 0..64 {
            if let Some((color, piece)) = self.squares[idx] {
                hash ^= z.piece_key(color, piece, Square::from_index(idx));
            }
        }

        if self.side_to_move == Color::Black {
            hash ^= z.side_key();
        }
        hash ^= z.castling_key(self.castling_rights);
        hash ^= z.en_passant_key(self.en_passant_target);

        hash
    }

    /// True when neither side can possibly deliver mate.
    ///
    /// Covers: bare kings, a single minor piece against a bare king, and
    /// one bishop each.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = [0u32; 2];
        let mut bishops = [0u32; 2];
        let mut heavy_or_pawns = [0u32; 2];

        for entry in self.squares.iter().flatten() {
            let (color, piece) = *entry;
            let c = color.index();
            match piece {
                Piece::King => {}
                Piece::Pawn | Piece::Rook | Piece::Queen => heavy_or_pawns[c] += 1,
                Piece::Bishop => {
                    minors[c] += 1;
                    bishops[c] += 1;
                }
                Piece::Knight => minors[c] += 1,
            }
        }

        if heavy_or_pawns[0] > 0 || heavy_or_pawns[1] > 0 {
            return false;
        }
        if minors[0] == 0 && minors[1] == 0 {
            return true;
        }
        if minors[0] + minors[1] == 1 {
            return true;
        }
        minors[0] == 1 && minors[1] == 1 && bishops[0] == 1 && bishops[1] == 1
    }

    pub(crate) fn has_kingside_right(&self, color: Color) -> bool {
        let bit = match color {
            Color::White => CASTLE_WHITE_K,
            Color::Black => CASTLE_BLACK_K,
        };
        self.castling_rights & bit != 0
    }

    pub(crate) fn has_queenside_right(&self, color: Color) -> bool {
        let bit = match color {
            Color::White => CASTLE_WHITE_Q,
            Color::Black => CASTLE_BLACK_Q,
        };
        self.castling_rights & bit != 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
