//! Built-in board scenarios.
//!
//! A scenario pairs a board structure (topology, default deserts, port
//! spots) with the pieces placed onto it. The data lives in `static`-style
//! tables in the submodules and is turned into owned values on request.

pub mod expansion;
pub mod standard;

use std::fmt;
use std::str::FromStr;

use crate::board::{
    AdjacencyList, Board, Deck, PortSpot, PortType, Position, RollNumber, TileType, Topology,
    ALL_TILE_TYPES, TILE_TYPE_COUNT,
};
use crate::error::BoardError;

/// The fixed shape of a board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStructure {
    pub topology: Topology,
    pub deserts: Vec<Position>,
    pub port_spots: Vec<PortSpot>,
}

impl BoardStructure {
    /// A fresh, empty board with the default deserts.
    pub fn new_board(&self) -> Result<Board, BoardError> {
        Board::new(
            self.topology.clone(),
            self.deserts.clone(),
            self.port_spots.clone(),
        )
    }
}

/// The pieces placed on a board, each deck sized to the structure.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardPieces {
    pub tiles: Deck<TileType>,
    pub numbers: Deck<RollNumber>,
    /// Also the preset port order, index-aligned with the port spots.
    pub ports: Deck<PortType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub structure: BoardStructure,
    pub pieces: BoardPieces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    /// 19 tiles, 3-4 players.
    Standard,
    /// 30 tiles, 5-6 players.
    Expansion,
}

pub const ALL_SCENARIOS: [ScenarioKind; 2] = [ScenarioKind::Standard, ScenarioKind::Expansion];

impl ScenarioKind {
    pub const fn name(self) -> &'static str {
        match self {
            ScenarioKind::Standard => "standard",
            ScenarioKind::Expansion => "expansion",
        }
    }

    pub fn scenario(self) -> Scenario {
        let data = match self {
            ScenarioKind::Standard => &standard::DATA,
            ScenarioKind::Expansion => &expansion::DATA,
        };
        data.build(self)
    }
}

impl FromStr for ScenarioKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SCENARIOS
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::UnknownScenario(s.to_string()))
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compile-time scenario table.
pub(crate) struct ScenarioData {
    pub adjacencies: &'static [AdjacencyList],
    pub deserts: &'static [Position],
    pub port_spots: &'static [PortSpot],
    /// Tile count per type, indexed by `TileType as usize`.
    pub tile_counts: [usize; TILE_TYPE_COUNT],
    pub numbers: &'static [RollNumber],
    pub ports: &'static [PortType],
}

impl ScenarioData {
    fn build(&self, kind: ScenarioKind) -> Scenario {
        let tiles = ALL_TILE_TYPES
            .iter()
            .flat_map(|&t| std::iter::repeat(t).take(self.tile_counts[t as usize]))
            .collect();
        Scenario {
            kind,
            structure: BoardStructure {
                topology: Topology::from_table(self.adjacencies),
                deserts: self.deserts.to_vec(),
                port_spots: self.port_spots.to_vec(),
            },
            pieces: BoardPieces {
                tiles,
                numbers: Deck::from(self.numbers),
                ports: Deck::from(self.ports),
            },
        }
    }
}

/// One adjacency row in table form: `-1` marks the board edge.
pub(crate) const fn hex(row: [i8; 6]) -> AdjacencyList {
    let mut neighbors = [None; 6];
    let mut i = 0;
    while i < 6 {
        if row[i] >= 0 {
            neighbors[i] = Some(row[i] as Position);
        }
        i += 1;
    }
    AdjacencyList::new(neighbors)
}
