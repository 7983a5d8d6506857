//! Hexboard: procedural board generation for hex-tile territory-trading
//! games.
//!
//! Exposes the board model, the placement algorithms, balance statistics,
//! the generation driver and the built-in scenarios for use by integration
//! tests, benches and the binary entry point.

pub mod batch;
pub mod board;
pub mod error;
pub mod generator;
pub mod place;
pub mod scenario;
pub mod search;
pub mod stats;

pub use error::{BoardError, ErrorKind};
pub use generator::{BoardGenerator, GeneratedBoard, GeneratorConfig};
pub use scenario::ScenarioKind;
