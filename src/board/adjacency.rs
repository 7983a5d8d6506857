//! Hex-grid adjacency.
//!
//! Every tile position carries six directional neighbor slots in the fixed
//! order NE, E, SE, SW, W, NW. A slot is `None` when that edge of the tile
//! faces the outside of the board. The graph is expected to be symmetric
//! (if B is A's east neighbor then A is B's west neighbor); scenario data is
//! responsible for that, and `Topology::is_symmetric` exists to check it.

use serde::{Deserialize, Serialize};

use super::Position;
use crate::error::BoardError;

/// One of the six edges of a hexagonal tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    NorthEast = 0,
    East = 1,
    SouthEast = 2,
    SouthWest = 3,
    West = 4,
    NorthWest = 5,
}

/// All directions in index order.
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Direction, BoardError> {
        ALL_DIRECTIONS
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidDirection(index))
    }

    /// The direction pointing back across the same edge.
    pub const fn opposite(self) -> Direction {
        ALL_DIRECTIONS[(self as usize + 3) % 6]
    }

    /// The next direction clockwise.
    pub const fn clockwise(self) -> Direction {
        ALL_DIRECTIONS[(self as usize + 1) % 6]
    }
}

/// The six neighbor slots of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjacencyList {
    neighbors: [Option<Position>; 6],
}

impl AdjacencyList {
    pub const fn new(neighbors: [Option<Position>; 6]) -> Self {
        AdjacencyList { neighbors }
    }

    /// Builds a list from an arbitrary slice, rejecting anything but six slots.
    pub fn from_slice(neighbors: &[Option<Position>]) -> Result<Self, BoardError> {
        let neighbors: [Option<Position>; 6] = neighbors
            .try_into()
            .map_err(|_| BoardError::AdjacencyLength(neighbors.len()))?;
        Ok(AdjacencyList { neighbors })
    }

    pub const fn neighbor(&self, direction: Direction) -> Option<Position> {
        self.neighbors[direction as usize]
    }

    pub const fn slots(&self) -> &[Option<Position>; 6] {
        &self.neighbors
    }

    /// Existing neighbors, in direction order.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        self.neighbors.iter().flatten().copied()
    }
}

/// The neighbor graph for a whole board, indexed by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    lists: Vec<AdjacencyList>,
}

impl Topology {
    /// Builds a topology, checking that every listed neighbor is on the board.
    pub fn new(lists: Vec<AdjacencyList>) -> Result<Self, BoardError> {
        let size = lists.len();
        for (position, list) in lists.iter().enumerate() {
            if let Some(neighbor) = list.neighbors().find(|&n| n >= size) {
                return Err(BoardError::NeighborOutOfRange {
                    position,
                    neighbor,
                    size,
                });
            }
        }
        Ok(Topology { lists })
    }

    /// Builds a topology from a static table without range checks. The
    /// built-in tables are covered by the scenario tests instead.
    pub(crate) fn from_table(lists: &[AdjacencyList]) -> Self {
        Topology {
            lists: lists.to_vec(),
        }
    }

    /// Builds a topology from raw rows, the shape scenario files use.
    pub fn from_rows(rows: &[Vec<Option<Position>>]) -> Result<Self, BoardError> {
        let lists = rows
            .iter()
            .map(|row| AdjacencyList::from_slice(row))
            .collect::<Result<Vec<_>, _>>()?;
        Topology::new(lists)
    }

    /// Number of tile positions.
    pub fn size(&self) -> usize {
        self.lists.len()
    }

    pub fn adjacency(&self, position: Position) -> &AdjacencyList {
        &self.lists[position]
    }

    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        self.lists[position].neighbor(direction)
    }

    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        self.lists[position].neighbors()
    }

    pub fn is_adjacent(&self, a: Position, b: Position) -> bool {
        self.neighbors(a).any(|n| n == b)
    }

    /// True if every edge is recorded from both sides in opposite directions.
    pub fn is_symmetric(&self) -> bool {
        self.lists.iter().enumerate().all(|(position, list)| {
            ALL_DIRECTIONS.iter().all(|&d| match list.neighbor(d) {
                Some(n) => self.lists[n].neighbor(d.opposite()) == Some(position),
                None => true,
            })
        })
    }
}

/// An exterior edge of the board where a port dock attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortSpot {
    pub position: Position,
    pub direction: Direction,
}

impl PortSpot {
    pub const fn new(position: Position, direction: Direction) -> Self {
        PortSpot {
            position,
            direction,
        }
    }
}
