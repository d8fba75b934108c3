//! Narrow engine facade for UI front-ends.
//!
//! Wraps a [`Board`] and a [`SearchContext`] behind the small set of
//! operations a front-end needs: reset, square/turn/check queries, legal
//! move enumeration, push/undo of moves, terminal-state detection and
//! triggering a search. The facade validates inputs and reports
//! [`EngineError`] instead of panicking.

use log::info;

use crate::board::error::{EngineError, NotationError};
use crate::board::search::{find_best_move, HaltHandle, SearchContext, SearchStats};
use crate::board::{Board, Color, Move, Piece, Square, UnmakeInfo};

/// Default transposition table size in megabytes.
pub const DEFAULT_TT_MB: usize = 64;

/// Default search depth.
pub const DEFAULT_DEPTH: u32 = 8;

/// Upper bound on the accepted search depth.
const MAX_DEPTH: u32 = 100;

/// Game status as reported by [`Engine::terminal_state`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalState {
    /// The game continues.
    Ongoing,
    /// The named side is checkmated.
    Checkmate { loser: Color },
    /// The side to move has no legal moves but is not in check.
    Stalemate,
    /// Neither side can deliver mate.
    InsufficientMaterial,
}

/// The engine: a board plus persistent search state.
pub struct Engine {
    board: Board,
    ctx: SearchContext,
}

impl Engine {
    /// Create an engine at the starting position with the default
    /// transposition table size.
    #[must_use]
    pub fn new() -> Self {
        Engine::with_tt_size(DEFAULT_TT_MB)
    }

    /// Create an engine with a transposition table of `tt_mb` megabytes.
    #[must_use]
    pub fn with_tt_size(tt_mb: usize) -> Self {
        Engine {
            board: Board::new(),
            ctx: SearchContext::new(tt_mb),
        }
    }

    /// Return to the starting position.
    ///
    /// The transposition table is kept: Zobrist keys are fixed, so its
    /// entries remain valid across games.
    pub fn reset(&mut self) {
        self.board.reset();
        self.ctx.repetition.clear();
        info!("engine reset to starting position");
    }

    /// Read access to the underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the current position, e.g. with one assembled by
    /// [`crate::board::BoardBuilder`].
    pub fn set_position(&mut self, board: Board) {
        self.board = board;
    }

    /// The piece on the square with the given 0-63 index.
    pub fn piece_at(&self, index: usize) -> Result<Option<(Color, Piece)>, EngineError> {
        let sq = Square::try_from(index).map_err(|_| EngineError::OutOfBounds { index })?;
        Ok(self.board.piece_at(sq))
    }

    /// The side to move.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Whether the given side's king is attacked.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.board.in_check(color)
    }

    /// All legal moves in the current position.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.board.legal_moves().as_slice().to_vec()
    }

    /// Legal moves from the square with the given 0-63 index.
    pub fn legal_moves_from(&mut self, index: usize) -> Result<Vec<Move>, EngineError> {
        let sq = Square::try_from(index).map_err(|_| EngineError::OutOfBounds { index })?;
        Ok(self.board.legal_moves_from(sq).as_slice().to_vec())
    }

    /// Push a move. The returned [`UnmakeInfo`] can be stacked by the
    /// caller for full game undo.
    pub fn make_move(&mut self, mv: Move) -> Result<UnmakeInfo, EngineError> {
        if !self.board.legal_moves().contains(mv) {
            return Err(EngineError::IllegalMove { mv: mv.to_string() });
        }
        self.board
            .try_make(mv)
            .ok_or(EngineError::IllegalMove { mv: mv.to_string() })
    }

    /// Push the move between two square indices.
    ///
    /// When several legal moves share from/to and differ only in the
    /// promotion piece, the queen promotion is chosen.
    pub fn move_from_to(&mut self, from: usize, to: usize) -> Result<UnmakeInfo, EngineError> {
        let from_sq =
            Square::try_from(from).map_err(|_| EngineError::OutOfBounds { index: from })?;
        let to_sq = Square::try_from(to).map_err(|_| EngineError::OutOfBounds { index: to })?;

        let candidates = self.board.legal_moves_from(from_sq);
        let chosen = candidates
            .iter()
            .copied()
            .filter(|m| m.to() == to_sq)
            .max_by_key(|m| u32::from(m.promotion() == Some(Piece::Queen)));

        match chosen {
            Some(mv) => self.make_move(mv),
            None => Err(EngineError::IllegalMove {
                mv: format!("{from_sq}{to_sq}"),
            }),
        }
    }

    /// Reverse a move previously made through this engine.
    pub fn undo(&mut self, info: &UnmakeInfo) {
        self.board.unmake(info);
    }

    /// Parse a move in coordinate notation ("e2e4", "e7e8q") against the
    /// current position.
    pub fn parse_move(&mut self, text: &str) -> Result<Move, NotationError> {
        self.board.parse_uci_move(text)
    }

    /// Classify the current position.
    pub fn terminal_state(&mut self) -> TerminalState {
        if self.board.legal_moves().is_empty() {
            let stm = self.board.side_to_move();
            if self.board.in_check(stm) {
                return TerminalState::Checkmate { loser: stm };
            }
            return TerminalState::Stalemate;
        }
        if self.board.is_insufficient_material() {
            return TerminalState::InsufficientMaterial;
        }
        TerminalState::Ongoing
    }

    /// Search for the best move within the given depth and time budget.
    ///
    /// `max_depth` is clamped to 1..=100; `time_limit_ms` must be at
    /// least 1. Returns [`EngineError::NoLegalMoves`] on a terminal
    /// position.
    pub fn search(
        &mut self,
        max_depth: u32,
        time_limit_ms: u64,
    ) -> Result<(Move, SearchStats), EngineError> {
        let depth = max_depth.clamp(1, MAX_DEPTH);
        let budget = time_limit_ms.max(1);

        let best = find_best_move(&mut self.board, &mut self.ctx, depth, budget);
        if best.is_null() {
            return Err(EngineError::NoLegalMoves);
        }

        let stats = self.ctx.stats;
        info!(
            "search done: best {} depth {} score {} nodes {} in {}ms",
            best, stats.depth_reached, stats.best_score, stats.nodes, stats.time_ms
        );
        Ok((best, stats))
    }

    /// A handle for aborting a running search from another thread.
    ///
    /// The search re-checks its halt flag at every node, so a
    /// [`HaltHandle::halt`] makes it unwind promptly with the last
    /// completed iteration's result.
    #[must_use]
    pub fn halt_handle(&self) -> HaltHandle {
        self.ctx.halt_handle()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
