//! Chess engine core library.
//!
//! Provides the playing core of a chess program:
//! - Mailbox board representation with full legal move generation
//!   (castling, en passant, promotion, pin handling)
//! - Incremental Zobrist hashing kept in lockstep with make/undo
//! - Centipawn evaluation with piece-square tables
//! - Iterative-deepening alpha-beta search with a transposition table,
//!   quiescence and killer/history/LMR move ordering
//! - A narrow [`engine::Engine`] facade for UI front-ends
//!
//! # Quick Start
//!
//! ```
//! use chess_core::engine::Engine;
//!
//! let mut engine = Engine::new();
//!
//! // Play an opening move and ask the engine for a reply.
//! let mv = engine.parse_move("e2e4").unwrap();
//! engine.make_move(mv).unwrap();
//!
//! let (reply, stats) = engine.search(4, 1000).unwrap();
//! println!("engine plays {} after {} nodes", reply, stats.nodes);
//! ```
//!
//! # Building Positions
//!
//! ```
//! use chess_core::board::{BoardBuilder, Color, Piece, Square};
//!
//! let mut board = BoardBuilder::new()
//!     .piece(Square::new(0, 7), Color::White, Piece::King)
//!     .piece(Square::new(7, 7), Color::Black, Piece::King)
//!     .piece(Square::new(6, 0), Color::White, Piece::Pawn)
//!     .build();
//!
//! assert!(!board.legal_moves().is_empty());
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square` and `Move`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Chess engines have intentionally similar names (score/best_score, etc.)
#![allow(clippy::similar_names)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod engine;
pub mod tt;
pub mod zobrist;
