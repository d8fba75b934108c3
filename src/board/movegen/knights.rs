//! Knight move generation.

use crate::board::attacks::KNIGHT_OFFSETS;
use crate::board::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(super) fn knight_moves(&self, from: Square, us: Color, list: &mut MoveList) {
        for (df, dr) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(df, dr) else {
                continue;
            };
            match self.piece_at(to) {
                None => list.push(Move::quiet(from, to)),
                Some((color, _)) if color != us => list.push(Move::capture(from, to)),
                Some(_) => {}
            }
        }
    }
}
