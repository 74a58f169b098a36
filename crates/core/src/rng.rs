//! RNG module - random piece generation without immediate repeats
//!
//! Kinds are drawn uniformly from the seven catalog kinds. A draw that matches
//! the previously produced kind is thrown away and re-rolled, so two
//! consecutive pieces never share a kind. The exclusion survives board resets.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Piece factory
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: StdRng,
    /// Kind produced by the previous call, excluded from the next one
    last: Option<PieceKind>,
}

impl PieceFactory {
    /// Create a deterministic factory from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            last: None,
        }
    }

    /// Create a factory seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            last: None,
        }
    }

    /// Draw the next kind, re-rolling while it equals the previous one
    pub fn next_kind(&mut self) -> PieceKind {
        let kind = loop {
            let Some(&candidate) = PieceKind::ALL.choose(&mut self.rng) else {
                unreachable!("piece catalog is empty");
            };
            if Some(candidate) != self.last {
                break candidate;
            }
        };
        self.last = Some(kind);
        kind
    }

    /// Produce a fresh piece at the spawn anchor
    pub fn create_random_piece(&mut self) -> Piece {
        Piece::spawn(self.next_kind())
    }

    /// Kind most recently produced (the current exclusion seed)
    pub fn last_kind(&self) -> Option<PieceKind> {
        self.last
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
