//! Parsing of coordinate move notation ("e2e4", "e7e8q").
//!
//! Formatting goes the other way through `Move`'s `Display` impl. A
//! parsed move is resolved against the legal-move list so its flags
//! (capture, en passant, castle) are filled in correctly; castling is
//! written as the king's two-square move.

use super::error::NotationError;
use super::{Board, Move, Piece, Square};

impl Board {
    /// Parse a move in coordinate notation and resolve it against the
    /// current position's legal moves.
    pub fn parse_uci_move(&mut self, text: &str) -> Result<Move, NotationError> {
        let malformed = || NotationError::Malformed {
            text: text.to_string(),
        };

        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(malformed());
        }

        let from: Square = text[0..2].parse().map_err(|_| malformed())?;
        let to: Square = text[2..4].parse().map_err(|_| malformed())?;

        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece)
                    if matches!(
                        piece,
                        Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen
                    ) =>
                {
                    Some(piece)
                }
                _ => return Err(NotationError::UnknownPromotionPiece { found: c }),
            },
        };

        self.legal_moves()
            .iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
            .ok_or_else(|| NotationError::NoMatchingLegalMove {
                text: text.to_string(),
            })
    }
}
