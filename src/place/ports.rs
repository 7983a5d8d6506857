//! Port placement.

use rand::Rng;
use tracing::debug;

use super::ensure_deck_size;
use crate::board::{Board, Deck, PortType};
use crate::error::BoardError;

impl Board {
    /// Assigns one random port from `deck` to every port spot.
    pub fn place_ports_random<R: Rng + ?Sized>(
        &mut self,
        mut deck: Deck<PortType>,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        if !self.tiles_placed() {
            return Err(BoardError::TilesNotPlaced("ports"));
        }
        ensure_deck_size("port", deck.len(), self.port_spots.len())?;
        for slot in self.ports.iter_mut() {
            *slot = Some(deck.pop_random_draw(rng)?);
        }
        debug!(ports = self.ports.len(), "placed ports randomly");
        Ok(())
    }

    /// Assigns `preset[i]` to port spot `i`. The preset must name exactly
    /// one port per spot.
    pub fn place_ports_preset(&mut self, preset: &[PortType]) -> Result<(), BoardError> {
        if !self.tiles_placed() {
            return Err(BoardError::TilesNotPlaced("ports"));
        }
        if preset.len() != self.port_spots.len() {
            return Err(BoardError::PresetPortCount {
                expected: self.port_spots.len(),
                actual: preset.len(),
            });
        }
        self.ports = preset.iter().copied().map(Some).collect();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn tiled_board(kind: ScenarioKind) -> (Board, SmallRng) {
        let scenario = kind.scenario();
        let mut board = scenario.structure.new_board().unwrap();
        let mut rng = SmallRng::seed_from_u64(77);
        board.place_tiles_random(scenario.pieces.tiles.clone(), &mut rng).unwrap();
        (board, rng)
    }

    #[test]
    fn ports_require_tiles_first() {
        let scenario = ScenarioKind::Standard.scenario();
        let mut board = scenario.structure.new_board().unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            board.place_ports_random(scenario.pieces.ports.clone(), &mut rng),
            Err(BoardError::TilesNotPlaced("ports"))
        );
        assert_eq!(
            board.place_ports_preset(scenario.pieces.ports.as_slice()),
            Err(BoardError::TilesNotPlaced("ports"))
        );
    }

    #[test]
    fn random_ports_use_every_port_once() {
        let scenario = ScenarioKind::Expansion.scenario();
        let (mut board, mut rng) = tiled_board(ScenarioKind::Expansion);
        board.place_ports_random(scenario.pieces.ports.clone(), &mut rng).unwrap();

        let mut placed: Vec<PortType> = board.ports().iter().map(|p| p.unwrap()).collect();
        let mut expected = scenario.pieces.ports.as_slice().to_vec();
        placed.sort();
        expected.sort();
        assert_eq!(placed, expected);
    }

    #[test]
    fn random_ports_reject_short_deck() {
        let (mut board, mut rng) = tiled_board(ScenarioKind::Standard);
        let short = Deck::from(vec![PortType::Mystery; 4]);
        assert_eq!(
            board.place_ports_random(short, &mut rng),
            Err(BoardError::DeckTooSmall {
                deck: "port",
                available: 4,
                required: 9
            })
        );
    }

    #[test]
    fn preset_ports_keep_spot_order() {
        let scenario = ScenarioKind::Standard.scenario();
        let (mut board, _) = tiled_board(ScenarioKind::Standard);
        board.place_ports_preset(scenario.pieces.ports.as_slice()).unwrap();
        let placed: Vec<PortType> = board.ports().iter().map(|p| p.unwrap()).collect();
        assert_eq!(placed, scenario.pieces.ports.as_slice());
        assert_eq!(placed[1], PortType::Wool);
    }

    #[test]
    fn preset_must_cover_every_spot() {
        let (mut board, _) = tiled_board(ScenarioKind::Standard);
        assert_eq!(
            board.place_ports_preset(&[PortType::Ore, PortType::Brick]),
            Err(BoardError::PresetPortCount {
                expected: 9,
                actual: 2
            })
        );
        assert!(board.ports().iter().all(Option::is_none));
    }
}
