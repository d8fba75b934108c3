//! Perft node counts against known-good references.

use crate::board::{Board, BoardBuilder, Color, Piece, Square};

#[test]
fn test_perft_startpos() {
    let mut board = Board::new();
    let expected: &[(usize, u64)] = &[
        (1, 20),
        (2, 400),
        (3, 8_902),
        (4, 197_281),
        (5, 4_865_609),
    ];
    for &(depth, nodes) in expected {
        assert_eq!(
            board.perft(depth),
            nodes,
            "startpos perft({depth}) mismatch"
        );
    }
}

/// Kings and all four rooks on their home squares, every right intact.
/// Exercises castling generation and the attack gates.
#[test]
fn test_perft_castling_position() {
    let mut board = BoardBuilder::new()
        .piece(Square::new(0, 4), Color::White, Piece::King)
        .piece(Square::new(0, 0), Color::White, Piece::Rook)
        .piece(Square::new(0, 7), Color::White, Piece::Rook)
        .piece(Square::new(7, 4), Color::Black, Piece::King)
        .piece(Square::new(7, 0), Color::Black, Piece::Rook)
        .piece(Square::new(7, 7), Color::Black, Piece::Rook)
        .castling_rights(0b1111)
        .build();

    let expected: &[(usize, u64)] = &[(1, 26), (2, 568), (3, 13_744)];
    for &(depth, nodes) in expected {
        assert_eq!(
            board.perft(depth),
            nodes,
            "castling perft({depth}) mismatch"
        );
    }
}

/// Both sides one step from promoting, with knights guarding the
/// promotion squares. Exercises promotion and promotion-capture counts.
#[test]
fn test_perft_promotion_position() {
    let mut board = BoardBuilder::new()
        .piece(Square::new(7, 0), Color::Black, Piece::Knight)
        .piece(Square::new(7, 2), Color::Black, Piece::Knight)
        .piece(Square::new(6, 0), Color::White, Piece::Pawn)
        .piece(Square::new(6, 1), Color::White, Piece::Pawn)
        .piece(Square::new(6, 2), Color::White, Piece::Pawn)
        .piece(Square::new(6, 3), Color::Black, Piece::King)
        .piece(Square::new(1, 4), Color::White, Piece::King)
        .piece(Square::new(1, 5), Color::Black, Piece::Pawn)
        .piece(Square::new(1, 6), Color::Black, Piece::Pawn)
        .piece(Square::new(1, 7), Color::Black, Piece::Pawn)
        .piece(Square::new(0, 5), Color::White, Piece::Knight)
        .piece(Square::new(0, 7), Color::White, Piece::Knight)
        .side_to_move(Color::Black)
        .build();

    let expected: &[(usize, u64)] = &[(1, 24), (2, 496), (3, 9_483)];
    for &(depth, nodes) in expected {
        assert_eq!(
            board.perft(depth),
            nodes,
            "promotion perft({depth}) mismatch"
        );
    }
}

/// Sparse rook-and-pawn endgame with en passant pins (Position 3 of the
/// classic perft suite).
#[test]
fn test_perft_en_passant_pins() {
    let mut board = BoardBuilder::new()
        .piece(Square::new(4, 0), Color::White, Piece::King)
        .piece(Square::new(4, 1), Color::White, Piece::Pawn)
        .piece(Square::new(3, 1), Color::White, Piece::Rook)
        .piece(Square::new(1, 4), Color::White, Piece::Pawn)
        .piece(Square::new(1, 6), Color::White, Piece::Pawn)
        .piece(Square::new(6, 2), Color::Black, Piece::Pawn)
        .piece(Square::new(5, 3), Color::Black, Piece::Pawn)
        .piece(Square::new(3, 5), Color::Black, Piece::Pawn)
        .piece(Square::new(3, 7), Color::Black, Piece::King)
        .piece(Square::new(4, 7), Color::Black, Piece::Rook)
        .build();

    let expected: &[(usize, u64)] = &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)];
    for &(depth, nodes) in expected {
        assert_eq!(board.perft(depth), nodes, "endgame perft({depth}) mismatch");
    }
}
