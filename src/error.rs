//! Error types for board construction and generation.
//!
//! Every failure is surfaced as a distinct `BoardError` variant so callers
//! (and tests) can assert on the failure instead of inspecting a partially
//! generated board.

use crate::board::adjacency::Direction;
use crate::board::deck::DeckError;
use crate::board::Position;

/// Broad classification of a `BoardError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied a bad value (position, number, name, parameter).
    InvalidArgument,
    /// The operation was requested in the wrong order or ran out of pieces.
    InvalidState,
}

/// Errors raised while building or generating a board.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("adjacency list has {0} entries, expected 6")]
    AdjacencyLength(usize),

    #[error("position {position} lists neighbor {neighbor}, but the board has only {size} tiles")]
    NeighborOutOfRange {
        position: Position,
        neighbor: Position,
        size: usize,
    },

    #[error("desert position {position} is outside the board (size {size})")]
    DesertOutOfRange { position: Position, size: usize },

    #[error("port spot position {position} is outside the board (size {size})")]
    PortSpotOutOfRange { position: Position, size: usize },

    #[error("port spot ({position}, {direction:?}) does not face the board exterior")]
    PortSpotNotExterior {
        position: Position,
        direction: Direction,
    },

    #[error("roll number {0} is not a valid roll (2-12, excluding 7)")]
    InvalidRollNumber(u8),

    #[error("invalid direction index {0}, expected 0-5")]
    InvalidDirection(usize),

    #[error("unknown {concern} algorithm '{name}'")]
    UnknownAlgorithm { concern: &'static str, name: String },

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("{algorithm} requires a probability parameter in [0, 1], got {value:?}")]
    InvalidProbability {
        algorithm: &'static str,
        value: Option<f64>,
    },

    #[error("preset port list has {actual} entries but the board has {expected} port spots")]
    PresetPortCount { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("tiles must be generated before {0}")]
    TilesNotPlaced(&'static str),

    #[error("numbers must be placed before computing {0}")]
    NumbersNotPlaced(&'static str),

    #[error("ports must be placed before {0}")]
    PortsNotPlaced(&'static str),

    #[error("settlement spots must be derived before computing settlement-resource variance")]
    SettlementSpotsNotDerived,

    #[error("{deck} deck has {available} entries but {required} are required")]
    DeckTooSmall {
        deck: &'static str,
        available: usize,
        required: usize,
    },

    #[error("no candidate position left for red number {number} ({placed} reds already placed)")]
    RedCandidatesExhausted { number: u8, placed: usize },

    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl BoardError {
    /// Returns whether this error is a bad-argument or a bad-state failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::AdjacencyLength(_)
            | BoardError::NeighborOutOfRange { .. }
            | BoardError::DesertOutOfRange { .. }
            | BoardError::PortSpotOutOfRange { .. }
            | BoardError::PortSpotNotExterior { .. }
            | BoardError::InvalidRollNumber(_)
            | BoardError::InvalidDirection(_)
            | BoardError::UnknownAlgorithm { .. }
            | BoardError::UnknownScenario(_)
            | BoardError::InvalidProbability { .. }
            | BoardError::PresetPortCount { .. }
            | BoardError::Config(_) => ErrorKind::InvalidArgument,
            BoardError::TilesNotPlaced(_)
            | BoardError::NumbersNotPlaced(_)
            | BoardError::PortsNotPlaced(_)
            | BoardError::SettlementSpotsNotDerived
            | BoardError::DeckTooSmall { .. }
            | BoardError::RedCandidatesExhausted { .. }
            | BoardError::WorkerPool(_) => ErrorKind::InvalidState,
            BoardError::Deck(DeckError::IndexOutOfRange { .. }) => ErrorKind::InvalidArgument,
            BoardError::Deck(DeckError::Empty) => ErrorKind::InvalidState,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_failures_are_invalid_argument() {
        assert_eq!(BoardError::AdjacencyLength(5).kind(), ErrorKind::InvalidArgument);
        assert_eq!(BoardError::InvalidRollNumber(13).kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            BoardError::UnknownAlgorithm {
                concern: "tile",
                name: "spiral".to_string()
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn sequencing_failures_are_invalid_state() {
        assert_eq!(BoardError::TilesNotPlaced("numbers").kind(), ErrorKind::InvalidState);
        assert_eq!(BoardError::SettlementSpotsNotDerived.kind(), ErrorKind::InvalidState);
        assert_eq!(
            BoardError::RedCandidatesExhausted { number: 6, placed: 3 }.kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(BoardError::from(DeckError::Empty).kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn messages_carry_offending_values() {
        let err = BoardError::DeckTooSmall {
            deck: "tile",
            available: 17,
            required: 18,
        };
        assert_eq!(err.to_string(), "tile deck has 17 entries but 18 are required");
    }
}
