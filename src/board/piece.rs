//! Board pieces: resource tiles, roll-number chits, and ports.
//!
//! Tile and port types are indexed by their `#[repr(u8)]` discriminant so
//! per-type tallies can live in fixed-size arrays.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// The number of resource tile types.
pub const TILE_TYPE_COUNT: usize = 5;

/// A resource-producing tile type. Deserts are tracked separately by the
/// board and are never a `TileType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileType {
    Brick = 0,
    Lumber = 1,
    Wool = 2,
    Grain = 3,
    Ore = 4,
}

/// All tile types in index order.
pub const ALL_TILE_TYPES: [TileType; TILE_TYPE_COUNT] = [
    TileType::Brick,
    TileType::Lumber,
    TileType::Wool,
    TileType::Grain,
    TileType::Ore,
];

impl TileType {
    pub const fn name(self) -> &'static str {
        match self {
            TileType::Brick => "Brick",
            TileType::Lumber => "Lumber",
            TileType::Wool => "Wool",
            TileType::Grain => "Grain",
            TileType::Ore => "Ore",
        }
    }

    /// One-letter abbreviation used by the text renderer.
    pub const fn abbr(self) -> char {
        match self {
            TileType::Brick => 'B',
            TileType::Lumber => 'L',
            TileType::Wool => 'W',
            TileType::Grain => 'G',
            TileType::Ore => 'O',
        }
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative roll weight for each sum of two dice, indexed by the sum.
/// Index 7 is zero because 7 never appears on a chit.
const ROLL_WEIGHTS: [u32; 13] = [0, 0, 1, 2, 3, 4, 5, 0, 5, 4, 3, 2, 1];

/// A number chit placed on a resource tile: 2-12, never 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RollNumber(u8);

impl RollNumber {
    pub fn new(value: u8) -> Result<Self, BoardError> {
        if !(2..=12).contains(&value) || value == 7 {
            return Err(BoardError::InvalidRollNumber(value));
        }
        Ok(RollNumber(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Number of the 36 two-dice outcomes that roll this number.
    pub const fn probability(self) -> u32 {
        ROLL_WEIGHTS[self.0 as usize]
    }

    /// Sixes and eights are the most frequent rolls and print in red.
    pub const fn is_red(self) -> bool {
        self.0 == 6 || self.0 == 8
    }
}

/// Builds a chit for the static scenario tables; an invalid value fails
/// at compile time when used in a `const`.
pub(crate) const fn chit(value: u8) -> RollNumber {
    assert!(value >= 2 && value <= 12 && value != 7, "invalid roll number");
    RollNumber(value)
}

impl TryFrom<u8> for RollNumber {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RollNumber::new(value)
    }
}

impl From<RollNumber> for u8 {
    fn from(number: RollNumber) -> u8 {
        number.0
    }
}

impl std::fmt::Display for RollNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds a list of roll numbers from raw values.
pub fn roll_numbers(values: &[u8]) -> Result<Vec<RollNumber>, BoardError> {
    values.iter().map(|&v| RollNumber::new(v)).collect()
}

/// A trading port. `Mystery` is the generic 3-for-1 port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PortType {
    Brick = 0,
    Lumber = 1,
    Wool = 2,
    Grain = 3,
    Ore = 4,
    Mystery = 5,
}

impl PortType {
    pub const fn name(self) -> &'static str {
        match self {
            PortType::Brick => "Brick",
            PortType::Lumber => "Lumber",
            PortType::Wool => "Wool",
            PortType::Grain => "Grain",
            PortType::Ore => "Ore",
            PortType::Mystery => "Mystery",
        }
    }

    /// The resource a 2-for-1 port trades, or `None` for the generic port.
    pub const fn resource(self) -> Option<TileType> {
        match self {
            PortType::Brick => Some(TileType::Brick),
            PortType::Lumber => Some(TileType::Lumber),
            PortType::Wool => Some(TileType::Wool),
            PortType::Grain => Some(TileType::Grain),
            PortType::Ore => Some(TileType::Ore),
            PortType::Mystery => None,
        }
    }
}

impl From<TileType> for PortType {
    fn from(tile: TileType) -> Self {
        match tile {
            TileType::Brick => PortType::Brick,
            TileType::Lumber => PortType::Lumber,
            TileType::Wool => PortType::Wool,
            TileType::Grain => PortType::Grain,
            TileType::Ore => PortType::Ore,
        }
    }
}

impl std::fmt::Display for PortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
