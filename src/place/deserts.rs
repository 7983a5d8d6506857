//! Desert placement.
//!
//! Deserts are fixed before any other phase. Moving them invalidates every
//! later placement, so both methods leave the board with no tiles, numbers
//! or ports.

use rand::Rng;
use tracing::debug;

use super::ensure_deck_size;
use crate::board::{Board, Deck, Position};
use crate::error::BoardError;

impl Board {
    /// Uses the given desert positions, typically the scenario's centered
    /// layout.
    pub fn place_deserts(&mut self, deserts: Vec<Position>) -> Result<(), BoardError> {
        self.set_deserts(deserts)
    }

    /// Chooses `count` distinct desert positions uniformly from the whole
    /// board.
    pub fn place_deserts_random<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        ensure_deck_size("position", self.size(), count)?;
        let mut positions: Deck<Position> = (0..self.size()).collect();
        let mut deserts = Vec::with_capacity(count);
        for _ in 0..count {
            deserts.push(positions.pop_random_draw(rng)?);
        }
        deserts.sort_unstable();
        debug!(?deserts, "placed deserts randomly");
        self.set_deserts(deserts)
    }
}
