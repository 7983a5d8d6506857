//! Tile supply for constrained placement.
//!
//! Wraps a `Deck` of tile types together with a per-type remaining count so
//! the clumped placer can ask "is there still a Wool tile left?" in O(1).
//! The count table always mirrors the live contents of the deck.

use super::deck::Deck;
use super::piece::{TileType, ALL_TILE_TYPES, TILE_TYPE_COUNT};

/// A deck of tile types plus a live count per type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileHolder {
    deck: Deck<TileType>,
    counts: [usize; TILE_TYPE_COUNT],
}

impl TileHolder {
    pub fn new(deck: Deck<TileType>) -> Self {
        let mut counts = [0; TILE_TYPE_COUNT];
        for tile in deck.iter() {
            counts[*tile as usize] += 1;
        }
        TileHolder { deck, counts }
    }

    /// Remaining tiles of `tile_type`; zero when exhausted or never present.
    pub fn count_of(&self, tile_type: TileType) -> usize {
        self.counts[tile_type as usize]
    }

    /// Snapshot of the remaining count per type, indexed by `TileType as usize`.
    pub fn counts(&self) -> [usize; TILE_TYPE_COUNT] {
        self.counts
    }

    /// Total remaining tiles.
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Takes one tile of `tile_type` out of the holder. Returns false, and
    /// changes nothing, if none are left.
    pub fn remove(&mut self, tile_type: TileType) -> bool {
        if self.counts[tile_type as usize] == 0 {
            return false;
        }
        self.counts[tile_type as usize] -= 1;
        self.deck.remove(&tile_type)
    }

    /// One entry per remaining tile of every type not in `exclude`, so a
    /// uniform draw from the result is weighted by remaining abundance.
    pub fn types_excluding(&self, exclude: &[TileType]) -> Deck<TileType> {
        let mut remaining = Deck::new();
        for tile_type in ALL_TILE_TYPES {
            if exclude.contains(&tile_type) {
                continue;
            }
            remaining.extend(std::iter::repeat(tile_type).take(self.count_of(tile_type)));
        }
        remaining
    }

    /// Every remaining tile, one entry per unit.
    pub fn all_types(&self) -> Deck<TileType> {
        self.types_excluding(&[])
    }
}
