//! Placement algorithms.
//!
//! Each submodule adds one family of placement methods to `Board`: deserts,
//! resource tiles, roll numbers, and ports. Every method takes its pieces
//! by value and the random source by reference so callers control seeding.

pub mod deserts;
pub mod numbers;
pub mod ports;
pub mod tiles;

use crate::error::BoardError;

/// Fails with `DeckTooSmall` unless `available >= required`.
pub(crate) fn ensure_deck_size(
    deck: &'static str,
    available: usize,
    required: usize,
) -> Result<(), BoardError> {
    if available < required {
        return Err(BoardError::DeckTooSmall {
            deck,
            available,
            required,
        });
    }
    Ok(())
}
