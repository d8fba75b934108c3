//! Zobrist keys for incremental position hashing.
//!
//! All keys are derived from a fixed seed so that position hashes are
//! reproducible across runs and processes.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Color, Piece, Square};

const ZOBRIST_SEED: u64 = 0xC0_FFEE_1234;

/// Index used for "no en passant file" in the en passant key row.
const NO_EP_FILE: usize = 8;

/// Process-wide key table. Immutable after first use.
pub static ZOBRIST: Lazy<ZobristTable> = Lazy::new(|| ZobristTable::from_seed(ZOBRIST_SEED));

/// Pre-generated random bitstrings for every hashable position feature.
pub struct ZobristTable {
    /// `[color][piece][square]`
    piece_keys: [[[u64; 64]; 6]; 2],
    /// XORed in when Black is to move.
    side_key: u64,
    /// Keyed by the 4-bit castling-rights mask.
    castling_keys: [u64; 16],
    /// Keyed by en passant file, index 8 meaning "none".
    en_passant_keys: [u64; 9],
}

impl ZobristTable {
    fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut piece_keys = [[[0u64; 64]; 6]; 2];
        for by_color in &mut piece_keys {
            for by_piece in by_color.iter_mut() {
                for key in by_piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let side_key = rng.gen();

        let mut castling_keys = [0u64; 16];
        for key in &mut castling_keys {
            *key = rng.gen();
        }

        let mut en_passant_keys = [0u64; 9];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristTable {
            piece_keys,
            side_key,
            castling_keys,
            en_passant_keys,
        }
    }

    /// Key for a piece of the given color on the given square.
    #[inline]
    #[must_use]
    pub fn piece_key(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][sq.as_index()]
    }

    /// Key XORed in when Black is to move.
    #[inline]
    #[must_use]
    pub fn side_key(&self) -> u64 {
        self.side_key
    }

    /// Key for a castling-rights mask.
    #[inline]
    #[must_use]
    pub fn castling_key(&self, rights: u8) -> u64 {
        self.castling_keys[(rights & 0xF) as usize]
    }

    /// Key for the en passant target file, or the "none" key.
    #[inline]
    #[must_use]
    pub fn en_passant_key(&self, target: Option<Square>) -> u64 {
        match target {
            Some(sq) => self.en_passant_keys[sq.file()],
            None => self.en_passant_keys[NO_EP_FILE],
        }
    }
}
