//! Board representation.
//!
//! Contains the data model for a generated board: the hex adjacency graph,
//! tile/number/port pieces, the multiset deck used for random draws, the
//! tile holder used by constrained placement, settlement spots, and the
//! `Board` aggregate itself.

pub mod adjacency;
pub mod deck;
pub mod piece;
pub mod settlement;
pub mod state;
pub mod tile_holder;

/// Identifier of one hex tile slot, `0 <= position < board size`.
pub type Position = usize;

pub use adjacency::{AdjacencyList, Direction, PortSpot, Topology, ALL_DIRECTIONS};
pub use deck::{Deck, DeckError};
pub use piece::{
    roll_numbers, PortType, RollNumber, TileType, ALL_TILE_TYPES, TILE_TYPE_COUNT,
};
pub use settlement::{derive_settlement_spots, SettlementSpot};
pub use state::{Board, Terrain, TileOccupancy};
pub use tile_holder::TileHolder;
