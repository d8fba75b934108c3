//! Attack detection.

use super::{Board, Color, Piece, Square};

/// Knight jump deltas as (file, rank) offsets.
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// King step deltas as (file, rank) offsets.
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// True iff any piece of color `by` attacks `sq`.
    ///
    /// Checks enemy pawn diagonals, knight jumps, king adjacency, and the
    /// eight rays, stopping each ray at the first occupied square.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        // A pawn of `by` attacks sq from one rank toward `by`'s side.
        for df in [-1isize, 1] {
            if let Some(from) = sq.offset(df, -by.pawn_direction()) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for (df, dr) in KNIGHT_OFFSETS {
            if let Some(from) = sq.offset(df, dr) {
                if self.piece_at(from) == Some((by, Piece::Knight)) {
                    return true;
                }
            }
        }

        for (df, dr) in KING_OFFSETS {
            if let Some(from) = sq.offset(df, dr) {
                if self.piece_at(from) == Some((by, Piece::King)) {
                    return true;
                }
            }
        }

        for (df, dr) in BISHOP_DIRECTIONS {
            if self.ray_hits(sq, df, dr, by, Piece::Bishop) {
                return true;
            }
        }
        for (df, dr) in ROOK_DIRECTIONS {
            if self.ray_hits(sq, df, dr, by, Piece::Rook) {
                return true;
            }
        }

        false
    }

    /// Walk a ray from `sq` until the first occupied square; true when
    /// that square holds a `by`-colored `slider` or queen.
    fn ray_hits(&self, sq: Square, df: isize, dr: isize, by: Color, slider: Piece) -> bool {
        let mut current = sq;
        while let Some(next) = current.offset(df, dr) {
            if let Some((color, piece)) = self.piece_at(next) {
                return color == by && (piece == slider || piece == Piece::Queen);
            }
            current = next;
        }
        false
    }

    /// True iff `color`'s king is attacked by the opponent.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }
}
