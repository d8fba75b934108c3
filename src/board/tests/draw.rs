//! Draw detection: insufficient material, fifty-move horizon, repetition.

use crate::board::search::{find_best_move, SearchContext, Searcher, INF};
use crate::board::{Board, BoardBuilder, Color, Piece, Square};

fn kings_only() -> BoardBuilder {
    BoardBuilder::new()
        .piece(Square::new(0, 4), Color::White, Piece::King)
        .piece(Square::new(7, 4), Color::Black, Piece::King)
}

#[test]
fn test_bare_kings_are_insufficient() {
    assert!(kings_only().build().is_insufficient_material());
}

#[test]
fn test_single_minor_is_insufficient() {
    let knight = kings_only()
        .piece(Square::new(3, 3), Color::White, Piece::Knight)
        .build();
    assert!(knight.is_insufficient_material());

    let bishop = kings_only()
        .piece(Square::new(3, 3), Color::Black, Piece::Bishop)
        .build();
    assert!(bishop.is_insufficient_material());
}

#[test]
fn test_bishop_each_is_insufficient() {
    let board = kings_only()
        .piece(Square::new(3, 3), Color::White, Piece::Bishop)
        .piece(Square::new(4, 4), Color::Black, Piece::Bishop)
        .build();
    assert!(board.is_insufficient_material());
}

#[test]
fn test_mating_material_is_sufficient() {
    let pawn = kings_only()
        .piece(Square::new(3, 3), Color::White, Piece::Pawn)
        .build();
    assert!(!pawn.is_insufficient_material());

    let rook = kings_only()
        .piece(Square::new(3, 3), Color::Black, Piece::Rook)
        .build();
    assert!(!rook.is_insufficient_material());

    let two_knights = kings_only()
        .piece(Square::new(3, 3), Color::White, Piece::Knight)
        .piece(Square::new(3, 4), Color::White, Piece::Knight)
        .build();
    assert!(!two_knights.is_insufficient_material());

    let bishop_and_knight = kings_only()
        .piece(Square::new(3, 3), Color::White, Piece::Bishop)
        .piece(Square::new(4, 4), Color::Black, Piece::Knight)
        .build();
    assert!(!bishop_and_knight.is_insufficient_material());
}

#[test]
fn test_startpos_is_sufficient() {
    assert!(!Board::new().is_insufficient_material());
}

#[test]
fn test_fifty_move_horizon_scores_zero() {
    // Rook up, but the clock already stands at 100 plies: every line
    // hits the fifty-move cutoff, so the search reports a dead draw.
    let mut board = kings_only()
        .piece(Square::new(3, 0), Color::White, Piece::Rook)
        .halfmove_clock(100)
        .build();
    let mut ctx = SearchContext::new(4);

    let best = find_best_move(&mut board, &mut ctx, 4, 60_000);
    assert!(!best.is_null());
    assert_eq!(ctx.stats.best_score, 0);
}

#[test]
fn test_line_repetition_scores_zero() {
    // With the root hash already twice on the line, the node is an
    // immediate draw by repetition.
    let mut board = Board::new();
    let mut ctx = SearchContext::new(4);
    ctx.begin(60_000, board.hash());
    ctx.repetition.push(board.hash());

    let mut searcher = Searcher {
        board: &mut board,
        ctx: &mut ctx,
    };
    assert_eq!(searcher.negamax(4, -INF, INF, 0), 0);
}
