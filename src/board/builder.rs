//! Fluent builder for constructing chess positions.
//!
//! Positions are assembled piece by piece; the Zobrist hash is computed
//! once at build time, after which make/unmake maintains it.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(0, 4), Color::White, Piece::King)
//!     .piece(Square::new(7, 4), Color::Black, Piece::King)
//!     .piece(Square::new(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for [`Board`] positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Option<Color>,
    castling_rights: u8,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
}

impl BoardBuilder {
    /// Create a new empty builder: no pieces, White to move, no
    /// castling rights.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder::default()
    }

    /// Place a piece.
    #[must_use]
    pub fn piece(mut self, sq: Square, color: Color, piece: Piece) -> Self {
        self.pieces.push((sq, color, piece));
        self
    }

    /// Set the side to move (defaults to White).
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = Some(color);
        self
    }

    /// Set the castling-rights bitmask (WK=1, WQ=2, BK=4, BQ=8).
    #[must_use]
    pub fn castling_rights(mut self, rights: u8) -> Self {
        self.castling_rights = rights & 0xF;
        self
    }

    /// Set the en passant capture target.
    #[must_use]
    pub fn en_passant(mut self, sq: Square) -> Self {
        self.en_passant_target = Some(sq);
        self
    }

    /// Set the halfmove clock.
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Build the board, computing its hash.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (sq, color, piece) in self.pieces {
            board.squares[sq.as_index()] = Some((color, piece));
        }
        board.side_to_move = self.side_to_move.unwrap_or(Color::White);
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.halfmove_clock = self.halfmove_clock;
        board.hash = board.recompute_hash();

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty_has_hash() {
        let board = BoardBuilder::new().build();
        assert_eq!(board.hash(), board.recompute_hash());
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), 0);
    }

    #[test]
    fn test_build_places_pieces() {
        let board = BoardBuilder::new()
            .piece(Square::new(0, 4), Color::White, Piece::King)
            .piece(Square::new(7, 4), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .build();

        assert_eq!(
            board.piece_at(Square::new(0, 4)),
            Some((Color::White, Piece::King))
        );
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.hash(), board.recompute_hash());
    }

    #[test]
    fn test_build_with_en_passant_hashes_file() {
        let with_ep = BoardBuilder::new()
            .piece(Square::new(0, 4), Color::White, Piece::King)
            .piece(Square::new(7, 4), Color::Black, Piece::King)
            .en_passant(Square::new(5, 3))
            .build();
        let without_ep = BoardBuilder::new()
            .piece(Square::new(0, 4), Color::White, Piece::King)
            .piece(Square::new(7, 4), Color::Black, Piece::King)
            .build();
        assert_ne!(with_ep.hash(), without_ep.hash());
    }
}
