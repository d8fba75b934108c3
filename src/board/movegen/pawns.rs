//! Pawn move generation: pushes, captures, en passant, promotions.

use crate::board::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(super) fn pawn_moves(&self, from: Square, us: Color, list: &mut MoveList) {
        let dir = us.pawn_direction();
        let promo_rank = us.pawn_promotion_rank();

        // Single push, and double push from the starting rank.
        if let Some(one) = from.offset(0, dir) {
            if self.is_square_empty(one) {
                if one.rank() == promo_rank {
                    for promo in PROMOTION_PIECES {
                        list.push(Move::new_promotion(from, one, promo, false));
                    }
                } else {
                    list.push(Move::quiet(from, one));
                    if from.rank() == us.pawn_start_rank() {
                        if let Some(two) = from.offset(0, 2 * dir) {
                            if self.is_square_empty(two) {
                                list.push(Move::quiet(from, two));
                            }
                        }
                    }
                }
            }
        }

        // Diagonal captures and en passant.
        for df in [-1isize, 1] {
            let Some(to) = from.offset(df, dir) else {
                continue;
            };

            if let Some((color, _)) = self.piece_at(to) {
                if color != us {
                    if to.rank() == promo_rank {
                        for promo in PROMOTION_PIECES {
                            list.push(Move::new_promotion(from, to, promo, true));
                        }
                    } else {
                        list.push(Move::capture(from, to));
                    }
                }
            }

            if self.en_passant_target == Some(to) {
                // The victim pawn stands beside the mover, on `to`'s file.
                let beside = Square::new(from.rank(), to.file());
                if let Some((color, piece)) = self.piece_at(beside) {
                    if color != us && piece == Piece::Pawn {
                        list.push(Move::en_passant(from, to));
                    }
                }
            }
        }
    }
}
