//! Error types for board and engine operations.

use std::fmt;

/// Errors reported by the engine facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The supplied move is not legal in the current position.
    IllegalMove { mv: String },
    /// Search was requested on a position with no legal moves; query
    /// the terminal state instead.
    NoLegalMoves,
    /// A square index outside 0..64 was supplied to a query.
    OutOfBounds { index: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::IllegalMove { mv } => {
                write!(f, "Move '{mv}' is not legal in this position")
            }
            EngineError::NoLegalMoves => {
                write!(f, "No legal moves: the position is terminal")
            }
            EngineError::OutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Errors from reading coordinate move notation.
///
/// Syntax problems of any kind (wrong length, bad square letters) all
/// collapse into [`NotationError::Malformed`]; a well-formed move that
/// the position does not allow is reported separately so callers can
/// tell typos from illegal play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The text is not of the form `<from><to>[promotion]`.
    Malformed { text: String },
    /// The fifth character does not name a promotion piece.
    UnknownPromotionPiece { found: char },
    /// The move reads fine but matches nothing the position allows.
    NoMatchingLegalMove { text: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Malformed { text } => {
                write!(f, "'{text}' is not coordinate notation (expected e.g. e2e4 or e7e8q)")
            }
            NotationError::UnknownPromotionPiece { found } => {
                write!(f, "'{found}' names no promotion piece, expected one of q, r, b, n")
            }
            NotationError::NoMatchingLegalMove { text } => {
                write!(f, "no legal move matches '{text}' in this position")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Errors from square construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside the 0..64 board range.
    IndexOutOfBounds { index: usize },
    /// Text that does not name a square.
    NotASquare { text: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "square index {index} is off the board (valid range 0..64)")
            }
            SquareError::NotASquare { text } => {
                write!(f, "'{text}' does not name a square (expected file a-h then rank 1-8)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::IllegalMove {
            mv: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));

        let err = EngineError::OutOfBounds { index: 64 };
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_notation_error_display() {
        let err = NotationError::Malformed {
            text: "e2".to_string(),
        };
        assert!(err.to_string().contains("'e2'"));

        let err = NotationError::UnknownPromotionPiece { found: 'x' };
        assert!(err.to_string().contains("'x'"));

        let err = NotationError::NoMatchingLegalMove {
            text: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_square_error_display() {
        let err = SquareError::NotASquare {
            text: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));

        let err = SquareError::IndexOutOfBounds { index: 70 };
        assert!(err.to_string().contains("70"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EngineError::NoLegalMoves, EngineError::NoLegalMoves);
        assert_eq!(
            SquareError::IndexOutOfBounds { index: 70 },
            SquareError::IndexOutOfBounds { index: 70 }
        );
    }
}
