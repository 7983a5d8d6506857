//! Board generation driver.
//!
//! `BoardGenerator` owns a scenario, one algorithm choice per placement
//! concern, and the random source. `generate_board` runs the phases in
//! their required order: deserts, tiles, numbers, ports.

use std::fmt;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, PortSpot, PortType, Terrain, TileOccupancy};
use crate::error::BoardError;
use crate::scenario::{BoardPieces, BoardStructure, Scenario, ScenarioKind};
use crate::search::{self, DEFAULT_TRIALS};
use crate::stats::VarianceKind;

/// An algorithm selector as written in configuration: a name plus an
/// optional probability parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmChoice {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
}

impl AlgorithmChoice {
    fn new(name: &str, p: Option<f64>) -> Self {
        AlgorithmChoice {
            name: name.to_string(),
            p,
        }
    }
}

fn require_probability(algorithm: &'static str, p: Option<f64>) -> Result<f64, BoardError> {
    match p {
        Some(v) if (0.0..=1.0).contains(&v) => Ok(v),
        _ => Err(BoardError::InvalidProbability {
            algorithm,
            value: p,
        }),
    }
}

/// Implements the `AlgorithmChoice` conversions for a selector enum.
macro_rules! algorithm_choice {
    ($ty:ty) => {
        impl TryFrom<AlgorithmChoice> for $ty {
            type Error = BoardError;

            fn try_from(choice: AlgorithmChoice) -> Result<Self, Self::Error> {
                <$ty>::from_name(&choice.name, choice.p)
            }
        }

        impl From<$ty> for AlgorithmChoice {
            fn from(algorithm: $ty) -> Self {
                AlgorithmChoice::new(algorithm.name(), algorithm.p())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AlgorithmChoice", into = "AlgorithmChoice")]
pub enum TileAlgorithm {
    Random,
    /// Clumped placement with clumpiness `p`.
    Clumped { p: f64 },
}

impl TileAlgorithm {
    pub fn from_name(name: &str, p: Option<f64>) -> Result<Self, BoardError> {
        match name {
            "random" => Ok(TileAlgorithm::Random),
            "clumped" => Ok(TileAlgorithm::Clumped {
                p: require_probability("clumped", p)?,
            }),
            _ => Err(BoardError::UnknownAlgorithm {
                concern: "tile",
                name: name.to_string(),
            }),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TileAlgorithm::Random => "random",
            TileAlgorithm::Clumped { .. } => "clumped",
        }
    }

    pub const fn p(self) -> Option<f64> {
        match self {
            TileAlgorithm::Clumped { p } => Some(p),
            TileAlgorithm::Random => None,
        }
    }
}

algorithm_choice!(TileAlgorithm);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AlgorithmChoice", into = "AlgorithmChoice")]
pub enum NumberAlgorithm {
    Random,
    /// Random, but no two red numbers on adjacent tiles.
    Pseudorandom,
    /// Best-of-trials by resource-balance variance at percentile `p`.
    ResourceVariance { p: f64 },
    /// Best-of-trials by settlement-resource variance at percentile `p`.
    SettlementResourceVariance { p: f64 },
}

impl NumberAlgorithm {
    pub fn from_name(name: &str, p: Option<f64>) -> Result<Self, BoardError> {
        match name {
            "random" => Ok(NumberAlgorithm::Random),
            "pseudorandom" => Ok(NumberAlgorithm::Pseudorandom),
            "resource-variance" => Ok(NumberAlgorithm::ResourceVariance {
                p: require_probability("resource-variance", p)?,
            }),
            "settlement-resource-variance" => Ok(NumberAlgorithm::SettlementResourceVariance {
                p: require_probability("settlement-resource-variance", p)?,
            }),
            _ => Err(BoardError::UnknownAlgorithm {
                concern: "number",
                name: name.to_string(),
            }),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            NumberAlgorithm::Random => "random",
            NumberAlgorithm::Pseudorandom => "pseudorandom",
            NumberAlgorithm::ResourceVariance { .. } => VarianceKind::Resource.name(),
            NumberAlgorithm::SettlementResourceVariance { .. } => {
                VarianceKind::SettlementResource.name()
            }
        }
    }

    pub const fn p(self) -> Option<f64> {
        match self {
            NumberAlgorithm::ResourceVariance { p }
            | NumberAlgorithm::SettlementResourceVariance { p } => Some(p),
            NumberAlgorithm::Random | NumberAlgorithm::Pseudorandom => None,
        }
    }
}

algorithm_choice!(NumberAlgorithm);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AlgorithmChoice", into = "AlgorithmChoice")]
pub enum DesertAlgorithm {
    /// The scenario's own desert positions.
    Centered,
    /// As many deserts as the scenario has, anywhere on the board.
    Random,
}

impl DesertAlgorithm {
    pub fn from_name(name: &str, _p: Option<f64>) -> Result<Self, BoardError> {
        match name {
            "centered" => Ok(DesertAlgorithm::Centered),
            "random" => Ok(DesertAlgorithm::Random),
            _ => Err(BoardError::UnknownAlgorithm {
                concern: "desert",
                name: name.to_string(),
            }),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DesertAlgorithm::Centered => "centered",
            DesertAlgorithm::Random => "random",
        }
    }

    pub const fn p(self) -> Option<f64> {
        None
    }
}

algorithm_choice!(DesertAlgorithm);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AlgorithmChoice", into = "AlgorithmChoice")]
pub enum PortAlgorithm {
    Random,
    /// The scenario's port deck, in order.
    Preset,
}

impl PortAlgorithm {
    pub fn from_name(name: &str, _p: Option<f64>) -> Result<Self, BoardError> {
        match name {
            "random" => Ok(PortAlgorithm::Random),
            "preset" => Ok(PortAlgorithm::Preset),
            _ => Err(BoardError::UnknownAlgorithm {
                concern: "port",
                name: name.to_string(),
            }),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PortAlgorithm::Random => "random",
            PortAlgorithm::Preset => "preset",
        }
    }

    pub const fn p(self) -> Option<f64> {
        None
    }
}

algorithm_choice!(PortAlgorithm);

/// Configuration for board generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub tiles: TileAlgorithm,
    pub numbers: NumberAlgorithm,
    pub deserts: DesertAlgorithm,
    pub ports: PortAlgorithm,
    /// Trials for the variance-targeting number algorithms.
    pub trials: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            tiles: TileAlgorithm::Random,
            numbers: NumberAlgorithm::Pseudorandom,
            deserts: DesertAlgorithm::Centered,
            ports: PortAlgorithm::Preset,
            trials: DEFAULT_TRIALS,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        serde_json::from_str(json).map_err(|e| BoardError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| BoardError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// A seeded random source, or an entropy-seeded one when `seed` is 0.
    pub fn rng(&self) -> SmallRng {
        if self.seed != 0 {
            SmallRng::seed_from_u64(self.seed)
        } else {
            SmallRng::from_entropy()
        }
    }
}

/// Generates boards for one scenario.
pub struct BoardGenerator {
    config: GeneratorConfig,
    kind: ScenarioKind,
    structure: BoardStructure,
    pieces: BoardPieces,
    board: Board,
    rng: SmallRng,
}

impl BoardGenerator {
    pub fn new(scenario: Scenario, config: GeneratorConfig) -> Result<Self, BoardError> {
        let rng = config.rng();
        Self::with_rng(scenario, config, rng)
    }

    /// Builds a generator drawing from the given random source; the
    /// config's seed is ignored.
    pub fn with_rng(
        scenario: Scenario,
        config: GeneratorConfig,
        rng: SmallRng,
    ) -> Result<Self, BoardError> {
        if config.trials == 0 {
            return Err(BoardError::Config("trials must be at least 1".to_string()));
        }
        let board = scenario.structure.new_board()?;
        Ok(BoardGenerator {
            config,
            kind: scenario.kind,
            structure: scenario.structure,
            pieces: scenario.pieces,
            board,
            rng,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn scenario_kind(&self) -> ScenarioKind {
        self.kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs every phase and derives the settlement spots of the result.
    pub fn generate_board(&mut self) -> Result<&Board, BoardError> {
        self.generate_deserts()?;
        self.generate_tiles()?;
        self.generate_numbers()?;
        self.generate_ports()?;
        self.board.derive_settlement_spots();
        Ok(&self.board)
    }

    pub fn generate_deserts(&mut self) -> Result<(), BoardError> {
        match self.config.deserts {
            DesertAlgorithm::Centered => self.board.place_deserts(self.structure.deserts.clone())?,
            DesertAlgorithm::Random => self
                .board
                .place_deserts_random(self.structure.deserts.len(), &mut self.rng)?,
        }
        debug!(algorithm = self.config.deserts.name(), deserts = ?self.board.deserts(), "deserts");
        Ok(())
    }

    pub fn generate_tiles(&mut self) -> Result<(), BoardError> {
        let deck = self.pieces.tiles.clone();
        match self.config.tiles {
            TileAlgorithm::Random => self.board.place_tiles_random(deck, &mut self.rng)?,
            TileAlgorithm::Clumped { p } => {
                self.board.place_tiles_clumped(deck, p, &mut self.rng)?
            }
        }
        debug!(algorithm = self.config.tiles.name(), "tiles");
        Ok(())
    }

    pub fn generate_numbers(&mut self) -> Result<(), BoardError> {
        let trials = self.config.trials;
        match self.config.numbers {
            NumberAlgorithm::Random => self
                .board
                .place_numbers_random(self.pieces.numbers.clone(), &mut self.rng)?,
            NumberAlgorithm::Pseudorandom => self
                .board
                .place_numbers_no_adjacent_reds(self.pieces.numbers.clone(), &mut self.rng)?,
            NumberAlgorithm::ResourceVariance { p } => {
                search::place_numbers_by_variance(
                    &mut self.board,
                    &self.pieces.numbers,
                    p,
                    VarianceKind::Resource,
                    trials,
                    &mut self.rng,
                )?;
            }
            NumberAlgorithm::SettlementResourceVariance { p } => {
                self.board.derive_settlement_spots();
                search::place_numbers_by_variance(
                    &mut self.board,
                    &self.pieces.numbers,
                    p,
                    VarianceKind::SettlementResource,
                    trials,
                    &mut self.rng,
                )?;
            }
        }
        debug!(algorithm = self.config.numbers.name(), "numbers");
        Ok(())
    }

    pub fn generate_ports(&mut self) -> Result<(), BoardError> {
        match self.config.ports {
            PortAlgorithm::Random => self
                .board
                .place_ports_random(self.pieces.ports.clone(), &mut self.rng)?,
            PortAlgorithm::Preset => self.board.place_ports_preset(self.pieces.ports.as_slice())?,
        }
        debug!(algorithm = self.config.ports.name(), "ports");
        Ok(())
    }

    /// The renderer-facing result of the last generation.
    pub fn output(&self) -> Result<GeneratedBoard, BoardError> {
        GeneratedBoard::from_board(self.kind, &self.board)
    }
}

/// A finished board in the shape a renderer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedBoard {
    pub scenario: &'static str,
    /// One record per position, in position order.
    pub tiles: Vec<TileOccupancy>,
    /// Index-aligned with `port_spots`.
    pub ports: Vec<PortType>,
    pub port_spots: Vec<PortSpot>,
    pub resource_variance: f64,
    /// Present when settlement spots have been derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_variance: Option<f64>,
}

impl GeneratedBoard {
    pub fn from_board(kind: ScenarioKind, board: &Board) -> Result<Self, BoardError> {
        let tiles = board.occupancies()?;
        let ports = board
            .ports()
            .iter()
            .copied()
            .collect::<Option<Vec<PortType>>>()
            .ok_or(BoardError::PortsNotPlaced("reading the generated board"))?;
        let settlement_variance = match board.settlement_spots() {
            Some(_) => Some(board.settlement_resource_variance()?),
            None => None,
        };
        Ok(GeneratedBoard {
            scenario: kind.name(),
            tiles,
            ports,
            port_spots: board.port_spots().to_vec(),
            resource_variance: board.resource_variance()?,
            settlement_variance,
        })
    }

    /// One letter per position: `D` for desert, else the resource initial.
    pub fn abbreviations(&self) -> String {
        self.tiles.iter().map(|t| t.resource.abbr()).collect()
    }
}

impl fmt::Display for GeneratedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.scenario, self.abbreviations())?;
        for (position, tile) in self.tiles.iter().enumerate() {
            match (tile.resource, tile.number) {
                (Terrain::Resource(t), Some(n)) => writeln!(f, "{}: {}, {}", position, t, n)?,
                (terrain, _) => writeln!(f, "{}: {}", position, terrain.name())?,
            }
        }
        writeln!(f)?;
        for (i, (port, spot)) in self.ports.iter().zip(&self.port_spots).enumerate() {
            writeln!(f, "{}: {} ({} {:?})", i, port, spot.position, spot.direction)?;
        }
        writeln!(f)?;
        write!(f, "resource variance: {:.4}", self.resource_variance)?;
        if let Some(v) = self.settlement_variance {
            write!(f, "\nsettlement-resource variance: {:.4}", v)?;
        }
        Ok(())
    }
}
