//! Iterative-deepening driver with root aspiration windows.

use log::debug;

use crate::board::{Board, Color, Move, MoveList, ScoredMoveList};

use super::{SearchContext, Searcher, ASPIRATION_WINDOW, INF};

/// Search `board` for the best move within a depth and wall-clock budget.
///
/// Returns [`Move::null`] when the position has no legal moves; callers
/// should consult the terminal state in that case. Statistics for the
/// search are left in `ctx.stats`. Only fully completed iterations
/// contribute to the result: when time runs out mid-iteration the
/// previous iteration's move is returned.
pub fn find_best_move(
    board: &mut Board,
    ctx: &mut SearchContext,
    max_depth: u32,
    time_limit_ms: u64,
) -> Move {
    ctx.begin(time_limit_ms, board.hash());

    let root_moves = board.legal_moves();
    if root_moves.is_empty() {
        return Move::null();
    }

    let mut searcher = Searcher { board, ctx };
    let best = searcher.deepen(&root_moves, max_depth);

    let white_to_move = searcher.board.side_to_move() == Color::White;
    let stats = &mut searcher.ctx.stats;
    if !white_to_move {
        stats.best_score = -stats.best_score;
    }
    stats.time_ms = searcher.ctx.start.elapsed().as_millis() as u64;

    best
}

impl Searcher<'_> {
    fn deepen(&mut self, root_moves: &MoveList, max_depth: u32) -> Move {
        let mut best_move = root_moves[0];
        let mut best_score = -INF;

        for depth in 1..=max_depth as i32 {
            if self.ctx.time_up() {
                break;
            }

            // Full window for the first iterations, then an aspiration
            // window around the previous score.
            let (mut alpha, beta) = if depth < 3 {
                (-INF, INF)
            } else {
                (best_score - ASPIRATION_WINDOW, best_score + ASPIRATION_WINDOW)
            };

            let tt_move = self
                .ctx
                .tt
                .probe(self.board.hash())
                .map_or(Move::null(), |entry| entry.best);

            let mut ordered = ScoredMoveList::new();
            for mv in root_moves {
                let score = self.score_move(*mv, tt_move, 0);
                ordered.push(*mv, score);
            }
            ordered.sort_by_score_desc();

            let mut local_best = -INF;
            let mut local_move = ordered.as_slice()[0].mv;

            for i in 0..ordered.len() {
                if self.ctx.time_up() {
                    break;
                }
                let mv = ordered.as_slice()[i].mv;
                let Some(info) = self.board.try_make(mv) else {
                    continue;
                };
                self.ctx.repetition.push(self.board.hash());
                let score = -self.negamax(depth - 1, -beta, -alpha, 1);
                self.ctx.repetition.pop();
                self.board.unmake(&info);

                if self.ctx.stopped() {
                    break;
                }

                if score > local_best {
                    local_best = score;
                    local_move = mv;
                }
                alpha = alpha.max(score);

                // Aspiration fail-high at the root: re-search this move
                // once with the full window as the definitive result and
                // abandon the rest of this iteration; the next iteration
                // revisits the siblings with an updated window.
                if alpha >= beta {
                    if let Some(info) = self.board.try_make(mv) {
                        self.ctx.repetition.push(self.board.hash());
                        let full = -self.negamax(depth - 1, -INF, INF, 1);
                        self.ctx.repetition.pop();
                        self.board.unmake(&info);
                        if !self.ctx.stopped() && full > local_best {
                            local_best = full;
                            local_move = mv;
                        }
                    }
                    break;
                }
            }

            if !self.ctx.stopped() {
                best_move = local_move;
                best_score = local_best;
                self.ctx.stats.depth_reached = depth as u32;
                self.ctx.stats.best_score = best_score;

                debug!(
                    "depth {} best {} score {} nodes {} qnodes {} time {}ms",
                    depth,
                    best_move,
                    best_score,
                    self.ctx.stats.nodes,
                    self.ctx.stats.qnodes,
                    self.ctx.start.elapsed().as_millis()
                );
            }
        }

        best_move
    }
}
