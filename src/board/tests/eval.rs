//! Evaluation properties: symmetry, negamax convention, term signs.

use super::play;
use crate::board::{evaluate, Board, BoardBuilder, Color, Piece, Square};

#[test]
fn test_startpos_is_balanced() {
    let board = Board::new();
    assert_eq!(evaluate(&board), 0);
}

/// Flipping only the side to move must negate the score exactly.
#[test]
fn test_negamax_sign_convention() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4"]);

    let as_black = evaluate(&board);
    let mut flipped = board.clone();
    flipped.side_to_move = board.side_to_move().opponent();
    let as_white = evaluate(&flipped);

    assert_eq!(as_black, -as_white);
}

#[test]
fn test_negamax_sign_convention_on_built_position() {
    let board = BoardBuilder::new()
        .piece(Square::new(0, 6), Color::White, Piece::King)
        .piece(Square::new(3, 3), Color::White, Piece::Queen)
        .piece(Square::new(2, 2), Color::White, Piece::Pawn)
        .piece(Square::new(7, 6), Color::Black, Piece::King)
        .piece(Square::new(5, 5), Color::Black, Piece::Rook)
        .build();

    let mut flipped = board.clone();
    flipped.side_to_move = Color::Black;
    assert_eq!(evaluate(&board), -evaluate(&flipped));
}

#[test]
fn test_material_advantage_dominates() {
    // Remove Black's queen from the start position.
    let mut board = Board::new();
    board.squares[Square::new(7, 3).as_index()] = None;
    board.hash = board.recompute_hash();

    let score = evaluate(&board);
    assert!(
        score > 500,
        "a queen up should score heavily for White, got {score}"
    );
}

#[test]
fn test_doubled_and_isolated_pawns_penalized() {
    // Identical material, but Black's pawns are doubled and isolated.
    let healthy = BoardBuilder::new()
        .piece(Square::new(0, 4), Color::White, Piece::King)
        .piece(Square::new(1, 0), Color::White, Piece::Pawn)
        .piece(Square::new(1, 1), Color::White, Piece::Pawn)
        .piece(Square::new(7, 4), Color::Black, Piece::King)
        .piece(Square::new(6, 0), Color::Black, Piece::Pawn)
        .piece(Square::new(6, 1), Color::Black, Piece::Pawn)
        .build();
    let crippled = BoardBuilder::new()
        .piece(Square::new(0, 4), Color::White, Piece::King)
        .piece(Square::new(1, 0), Color::White, Piece::Pawn)
        .piece(Square::new(1, 1), Color::White, Piece::Pawn)
        .piece(Square::new(7, 4), Color::Black, Piece::King)
        .piece(Square::new(6, 3), Color::Black, Piece::Pawn)
        .piece(Square::new(5, 3), Color::Black, Piece::Pawn)
        .build();

    assert!(
        evaluate(&crippled) > evaluate(&healthy),
        "doubled+isolated black pawns should favor White"
    );
}

#[test]
fn test_bishop_pair_bonus_applies() {
    // Two bishops vs. bishop and knight, everything else mirrored.
    let pair = BoardBuilder::new()
        .piece(Square::new(0, 4), Color::White, Piece::King)
        .piece(Square::new(2, 2), Color::White, Piece::Bishop)
        .piece(Square::new(2, 5), Color::White, Piece::Bishop)
        .piece(Square::new(7, 4), Color::Black, Piece::King)
        .piece(Square::new(5, 2), Color::Black, Piece::Bishop)
        .piece(Square::new(5, 5), Color::Black, Piece::Knight)
        .build();

    assert!(evaluate(&pair) > 0, "bishop pair should outweigh the knight swap");
}
