//! Settlement spots: the board vertices where up to three tiles meet.
//!
//! Each tile contributes one vertex per pair of consecutive directions
//! (NE/E, E/SE, ..., NW/NE). The same vertex is seen from up to three tiles,
//! so spots are keyed by their sorted member set. A vertex with only one real
//! tile around it lies on the outer rim and is not a playable spot.

use std::collections::HashSet;

use super::adjacency::{Topology, ALL_DIRECTIONS};
use super::Position;

/// The (up to) three tile positions meeting at one vertex. `None` stands for
/// the outside of the board. Members are kept sorted so two spots compare
/// equal exactly when they hold the same set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SettlementSpot {
    tiles: [Option<Position>; 3],
}

impl SettlementSpot {
    pub fn new(a: Option<Position>, b: Option<Position>, c: Option<Position>) -> Self {
        let mut tiles = [a, b, c];
        tiles.sort_unstable();
        SettlementSpot { tiles }
    }

    /// The three member slots, `None` slots first.
    pub fn slots(&self) -> &[Option<Position>; 3] {
        &self.tiles
    }

    /// The real tile positions touching this vertex.
    pub fn tiles(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().flatten().copied()
    }

    /// Number of real (on-board) tiles touching this vertex.
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }
}

/// Derives every playable settlement spot of a topology, in first-seen order
/// when positions are visited in increasing order.
pub fn derive_settlement_spots(topology: &Topology) -> Vec<SettlementSpot> {
    derive_settlement_spots_from(topology, 0..topology.size())
}

/// Same as `derive_settlement_spots` but visits positions in the given order.
/// The resulting set does not depend on the order; only the list order does.
pub fn derive_settlement_spots_from<I>(topology: &Topology, positions: I) -> Vec<SettlementSpot>
where
    I: IntoIterator<Item = Position>,
{
    let mut seen = HashSet::new();
    let mut spots = Vec::new();
    for position in positions {
        for direction in ALL_DIRECTIONS {
            let spot = SettlementSpot::new(
                Some(position),
                topology.neighbor(position, direction),
                topology.neighbor(position, direction.clockwise()),
            );
            if spot.tile_count() < 2 {
                continue;
            }
            if seen.insert(spot) {
                spots.push(spot);
            }
        }
    }
    spots
}
