//! Perft: exhaustive legal-move tree counting, for move generator
//! validation.

use super::Board;

impl Board {
    /// Count leaf nodes of the legal move tree to the given depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let pseudo = self.pseudo_moves();
        let mut nodes = 0;

        for mv in &pseudo {
            if let Some(info) = self.try_make(*mv) {
                nodes += if depth == 1 { 1 } else { self.perft(depth - 1) };
                self.unmake(&info);
            }
        }

        nodes
    }
}
