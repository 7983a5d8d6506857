//! The board aggregate.
//!
//! A `Board` owns one immutable topology and port-spot list plus the mutable
//! results of each generation phase. Per-position state lives in vectors
//! indexed by `Position` for O(1) lookup; `None` means "not placed yet"
//! (or, for deserts, "never placed").

use std::fmt;

use serde::{Serialize, Serializer};

use super::adjacency::{PortSpot, Topology};
use super::deck::Deck;
use super::piece::{PortType, RollNumber, TileType, TILE_TYPE_COUNT};
use super::settlement::{derive_settlement_spots, SettlementSpot};
use super::Position;
use crate::error::BoardError;

/// What occupies a tile slot in the final layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Desert,
    Resource(TileType),
}

impl Terrain {
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Desert => "Desert",
            Terrain::Resource(t) => t.name(),
        }
    }

    /// One-letter abbreviation: `D` for desert, otherwise the resource's.
    pub const fn abbr(self) -> char {
        match self {
            Terrain::Desert => 'D',
            Terrain::Resource(t) => t.abbr(),
        }
    }
}

impl Serialize for Terrain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Occupancy record for one position, as handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileOccupancy {
    pub resource: Terrain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<RollNumber>,
}

/// A hex board under generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub(crate) topology: Topology,
    pub(crate) deserts: Vec<Position>,
    pub(crate) tile_types: Vec<Option<TileType>>,
    pub(crate) tile_numbers: Vec<Option<RollNumber>>,
    pub(crate) port_spots: Vec<PortSpot>,
    pub(crate) ports: Vec<Option<PortType>>,
    pub(crate) settlement_spots: Option<Vec<SettlementSpot>>,
    /// Tiles per type in the full inventory handed to tile placement.
    pub(crate) resource_counts: Option<[usize; TILE_TYPE_COUNT]>,
}

impl Board {
    /// Creates an empty board, validating desert positions and port spots.
    pub fn new(
        topology: Topology,
        deserts: Vec<Position>,
        port_spots: Vec<PortSpot>,
    ) -> Result<Self, BoardError> {
        let size = topology.size();
        validate_deserts(&deserts, size)?;
        for spot in &port_spots {
            if spot.position >= size {
                return Err(BoardError::PortSpotOutOfRange {
                    position: spot.position,
                    size,
                });
            }
            if topology.neighbor(spot.position, spot.direction).is_some() {
                return Err(BoardError::PortSpotNotExterior {
                    position: spot.position,
                    direction: spot.direction,
                });
            }
        }
        let port_count = port_spots.len();
        Ok(Board {
            topology,
            deserts,
            tile_types: vec![None; size],
            tile_numbers: vec![None; size],
            port_spots,
            ports: vec![None; port_count],
            settlement_spots: None,
            resource_counts: None,
        })
    }

    /// Number of tile positions.
    pub fn size(&self) -> usize {
        self.topology.size()
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn deserts(&self) -> &[Position] {
        &self.deserts
    }

    pub fn is_desert(&self, position: Position) -> bool {
        self.deserts.contains(&position)
    }

    pub fn tile_type(&self, position: Position) -> Option<TileType> {
        self.tile_types[position]
    }

    pub fn tile_number(&self, position: Position) -> Option<RollNumber> {
        self.tile_numbers[position]
    }

    pub fn port_spots(&self) -> &[PortSpot] {
        &self.port_spots
    }

    /// Assigned port types, index-aligned with `port_spots`.
    pub fn ports(&self) -> &[Option<PortType>] {
        &self.ports
    }

    pub fn settlement_spots(&self) -> Option<&[SettlementSpot]> {
        self.settlement_spots.as_deref()
    }

    /// Tile count per type of the inventory used for tile placement, or
    /// `None` before tiles are placed.
    pub fn resource_counts(&self) -> Option<[usize; TILE_TYPE_COUNT]> {
        self.resource_counts
    }

    pub fn tiles_placed(&self) -> bool {
        self.resource_counts.is_some()
    }

    pub fn numbers_placed(&self) -> bool {
        self.non_desert_positions()
            .all(|p| self.tile_numbers[p].is_some())
    }

    /// Positions that take a resource tile, in increasing order.
    pub fn non_desert_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size()).filter(move |p| !self.is_desert(*p))
    }

    pub fn non_desert_count(&self) -> usize {
        self.non_desert_positions().count()
    }

    /// A deck holding every non-desert position once.
    pub fn tile_position_deck(&self) -> Deck<Position> {
        self.non_desert_positions().collect()
    }

    /// Computes the playable settlement spots from the topology. Calling it
    /// again yields the same spots.
    pub fn derive_settlement_spots(&mut self) -> &[SettlementSpot] {
        self.settlement_spots
            .get_or_insert_with(|| derive_settlement_spots(&self.topology))
    }

    pub fn terrain(&self, position: Position) -> Option<Terrain> {
        if self.is_desert(position) {
            return Some(Terrain::Desert);
        }
        self.tile_types[position].map(Terrain::Resource)
    }

    /// Occupancy of every position in order. Fails unless both tiles and
    /// numbers have been placed.
    pub fn occupancies(&self) -> Result<Vec<TileOccupancy>, BoardError> {
        if !self.tiles_placed() {
            return Err(BoardError::TilesNotPlaced("reading occupancies"));
        }
        if !self.numbers_placed() {
            return Err(BoardError::NumbersNotPlaced("occupancies"));
        }
        Ok((0..self.size())
            .map(|p| match self.terrain(p) {
                Some(Terrain::Resource(t)) => TileOccupancy {
                    resource: Terrain::Resource(t),
                    number: self.tile_numbers[p],
                },
                _ => TileOccupancy {
                    resource: Terrain::Desert,
                    number: None,
                },
            })
            .collect())
    }

    /// Validates and records the desert positions, clearing every later
    /// placement phase since tiles must never sit on a desert.
    pub(crate) fn set_deserts(&mut self, deserts: Vec<Position>) -> Result<(), BoardError> {
        validate_deserts(&deserts, self.size())?;
        self.deserts = deserts;
        self.tile_types.iter_mut().for_each(|t| *t = None);
        self.tile_numbers.iter_mut().for_each(|n| *n = None);
        self.ports.iter_mut().for_each(|p| *p = None);
        self.resource_counts = None;
        Ok(())
    }
}

fn validate_deserts(deserts: &[Position], size: usize) -> Result<(), BoardError> {
    match deserts.iter().find(|&&d| d >= size) {
        Some(&position) => Err(BoardError::DesertOutOfRange { position, size }),
        None => Ok(()),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..self.size() {
            match (self.terrain(position), self.tile_numbers[position]) {
                (Some(Terrain::Desert), _) => writeln!(f, "{}: Desert", position)?,
                (Some(terrain), Some(number)) => {
                    writeln!(f, "{}: {}, {}", position, terrain.name(), number)?
                }
                (Some(terrain), None) => writeln!(f, "{}: {}", position, terrain.name())?,
                (None, _) => writeln!(f, "{}: -", position)?,
            }
        }
        writeln!(f)?;
        for (i, port) in self.ports.iter().enumerate() {
            match port {
                Some(p) => writeln!(f, "{}: {}", i, p)?,
                None => writeln!(f, "{}: -", i)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::adjacency::{AdjacencyList, Direction};

    fn pair() -> Topology {
        Topology::new(vec![
            AdjacencyList::new([None, Some(1), None, None, None, None]),
            AdjacencyList::new([None, None, None, None, Some(0), None]),
        ])
        .unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(pair(), vec![], vec![PortSpot::new(0, Direction::West)]).unwrap();
        assert_eq!(board.size(), 2);
        assert!(!board.tiles_placed());
        assert!(!board.numbers_placed());
        assert_eq!(board.ports(), &[None]);
        assert!(board.settlement_spots().is_none());
    }

    #[test]
    fn desert_out_of_range_is_rejected() {
        let result = Board::new(pair(), vec![2], vec![]);
        assert_eq!(result, Err(BoardError::DesertOutOfRange { position: 2, size: 2 }));
    }

    #[test]
    fn interior_port_spot_is_rejected() {
        let result = Board::new(pair(), vec![], vec![PortSpot::new(0, Direction::East)]);
        assert_eq!(
            result,
            Err(BoardError::PortSpotNotExterior {
                position: 0,
                direction: Direction::East
            })
        );
    }

    #[test]
    fn port_spot_out_of_range_is_rejected() {
        let result = Board::new(pair(), vec![], vec![PortSpot::new(5, Direction::East)]);
        assert_eq!(result, Err(BoardError::PortSpotOutOfRange { position: 5, size: 2 }));
    }

    #[test]
    fn tile_position_deck_skips_deserts() {
        let board = Board::new(pair(), vec![1], vec![]).unwrap();
        assert_eq!(board.tile_position_deck().as_slice(), &[0]);
        assert_eq!(board.non_desert_count(), 1);
        assert_eq!(board.terrain(1), Some(Terrain::Desert));
        assert_eq!(board.terrain(0), None);
    }

    #[test]
    fn occupancies_require_placement() {
        let board = Board::new(pair(), vec![], vec![]).unwrap();
        assert!(matches!(board.occupancies(), Err(BoardError::TilesNotPlaced(_))));
    }

    #[test]
    fn derive_settlement_spots_is_idempotent() {
        let mut board = Board::new(pair(), vec![], vec![]).unwrap();
        let first = board.derive_settlement_spots().to_vec();
        let second = board.derive_settlement_spots().to_vec();
        assert_eq!(first, second);
        // Two tiles sharing one edge meet at two rim vertices, which share a key.
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn terrain_serializes_as_name() {
        let occ = TileOccupancy {
            resource: Terrain::Desert,
            number: None,
        };
        assert_eq!(serde_json::to_string(&occ).unwrap(), r#"{"resource":"Desert"}"#);
        let occ = TileOccupancy {
            resource: Terrain::Resource(TileType::Ore),
            number: Some(RollNumber::new(6).unwrap()),
        };
        assert_eq!(
            serde_json::to_string(&occ).unwrap(),
            r#"{"resource":"Ore","number":6}"#
        );
    }
}
