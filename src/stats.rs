//! Balance statistics over a finished layout.
//!
//! Both metrics are sample variances of an expected-yield figure built from
//! the roll weights in `RollNumber::probability`: lower means more even.

use crate::board::{Board, ALL_TILE_TYPES, TILE_TYPE_COUNT};
use crate::error::BoardError;

/// Which balance metric to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarianceKind {
    /// Spread of per-unit roll weight across resource types.
    Resource,
    /// Spread of average roll weight across settlement spots.
    SettlementResource,
}

impl VarianceKind {
    pub const fn name(self) -> &'static str {
        match self {
            VarianceKind::Resource => "resource-variance",
            VarianceKind::SettlementResource => "settlement-resource-variance",
        }
    }
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (divides by n - 1). Fewer than two values have no
/// spread, so the result is 0.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    sum_sq / (values.len() - 1) as f64
}

impl Board {
    /// Sum of roll weights on the tiles of each type.
    pub fn resource_balance(&self) -> Result<[u32; TILE_TYPE_COUNT], BoardError> {
        self.ensure_numbered("resource variance")?;
        let mut weights = [0u32; TILE_TYPE_COUNT];
        for position in self.non_desert_positions() {
            if let (Some(t), Some(n)) = (self.tile_types[position], self.tile_numbers[position]) {
                weights[t as usize] += n.probability();
            }
        }
        Ok(weights)
    }

    /// Sample variance of the per-unit roll weight of every resource type
    /// present in the tile inventory.
    pub fn resource_variance(&self) -> Result<f64, BoardError> {
        let weights = self.resource_balance()?;
        let counts = self
            .resource_counts
            .ok_or(BoardError::TilesNotPlaced("computing resource variance"))?;
        let per_unit: Vec<f64> = ALL_TILE_TYPES
            .iter()
            .map(|&t| t as usize)
            .filter(|&i| counts[i] > 0)
            .map(|i| weights[i] as f64 / counts[i] as f64)
            .collect();
        Ok(sample_variance(&per_unit))
    }

    /// Average roll weight of the resource tiles around each settlement
    /// spot. Spots touching fewer than two resource tiles are left out.
    pub fn settlement_resources(&self) -> Result<Vec<f64>, BoardError> {
        let spots = self
            .settlement_spots
            .as_deref()
            .ok_or(BoardError::SettlementSpotsNotDerived)?;
        self.ensure_numbered("settlement-resource variance")?;

        let mut expected = Vec::with_capacity(spots.len());
        for spot in spots {
            let weights: Vec<u32> = spot
                .tiles()
                .filter(|&p| !self.is_desert(p))
                .filter_map(|p| self.tile_numbers[p])
                .map(|n| n.probability())
                .collect();
            if weights.len() < 2 {
                continue;
            }
            expected.push(weights.iter().sum::<u32>() as f64 / weights.len() as f64);
        }
        Ok(expected)
    }

    /// Sample variance of `settlement_resources`.
    pub fn settlement_resource_variance(&self) -> Result<f64, BoardError> {
        Ok(sample_variance(&self.settlement_resources()?))
    }

    pub fn variance(&self, kind: VarianceKind) -> Result<f64, BoardError> {
        match kind {
            VarianceKind::Resource => self.resource_variance(),
            VarianceKind::SettlementResource => self.settlement_resource_variance(),
        }
    }

    fn ensure_numbered(&self, metric: &'static str) -> Result<(), BoardError> {
        if !self.tiles_placed() {
            return Err(BoardError::TilesNotPlaced(metric));
        }
        if !self.numbers_placed() {
            return Err(BoardError::NumbersNotPlaced(metric));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{AdjacencyList, Deck, RollNumber, TileType, Topology};
    use crate::scenario::ScenarioKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Three mutually adjacent tiles meeting at one vertex.
    fn triangle() -> Board {
        let topology = Topology::new(vec![
            AdjacencyList::new([None, Some(1), Some(2), None, None, None]),
            AdjacencyList::new([None, None, None, Some(2), Some(0), None]),
            AdjacencyList::new([Some(1), None, None, None, None, Some(0)]),
        ])
        .unwrap();
        Board::new(topology, vec![], vec![]).unwrap()
    }

    fn set_numbers(board: &mut Board, values: &[u8]) {
        let numbers = values.iter().map(|&v| Some(RollNumber::new(v).unwrap())).collect();
        board.commit_numbers(numbers);
    }

    #[test]
    fn sample_variance_divides_by_n_minus_one() {
        assert!(close(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5));
        assert!(close(sample_variance(&[1.0, 2.0, 3.0, 4.0]), 5.0 / 3.0));
        assert!(close(sample_variance(&[7.0, 7.0, 7.0]), 0.0));
    }

    #[test]
    fn sample_variance_of_short_input_is_zero() {
        assert_eq!(sample_variance(&[]), 0.0);
        assert_eq!(sample_variance(&[3.5]), 0.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn metrics_require_tiles_and_numbers() {
        let scenario = ScenarioKind::Standard.scenario();
        let mut board = scenario.structure.new_board().unwrap();
        assert!(matches!(board.resource_variance(), Err(BoardError::TilesNotPlaced(_))));

        let mut rng = SmallRng::seed_from_u64(2);
        board.place_tiles_random(scenario.pieces.tiles.clone(), &mut rng).unwrap();
        assert!(matches!(board.resource_variance(), Err(BoardError::NumbersNotPlaced(_))));
    }

    #[test]
    fn settlement_variance_requires_derived_spots() {
        let scenario = ScenarioKind::Standard.scenario();
        let mut board = scenario.structure.new_board().unwrap();
        let mut rng = SmallRng::seed_from_u64(2);
        board.place_tiles_random(scenario.pieces.tiles.clone(), &mut rng).unwrap();
        board.place_numbers_random(scenario.pieces.numbers.clone(), &mut rng).unwrap();
        assert_eq!(
            board.settlement_resource_variance(),
            Err(BoardError::SettlementSpotsNotDerived)
        );
        board.derive_settlement_spots();
        assert!(board.settlement_resource_variance().unwrap() > 0.0);
    }

    #[test]
    fn uniform_weights_have_zero_resource_variance() {
        let mut board = triangle();
        let mut rng = SmallRng::seed_from_u64(1);
        let deck = Deck::from(vec![TileType::Brick, TileType::Wool, TileType::Ore]);
        board.place_tiles_random(deck, &mut rng).unwrap();
        // 6 and 8 carry the same weight.
        set_numbers(&mut board, &[6, 8, 6]);
        assert!(close(board.resource_variance().unwrap(), 0.0));
    }

    #[test]
    fn resource_variance_uses_per_unit_weight() {
        let mut board = triangle();
        let mut rng = SmallRng::seed_from_u64(1);
        let deck = Deck::from(vec![TileType::Brick, TileType::Brick, TileType::Ore]);
        board.place_tiles_random(deck, &mut rng).unwrap();
        set_numbers(&mut board, &[5, 5, 5]);
        // Brick: 8 / 2 = 4, Ore: 4 / 1 = 4.
        assert!(close(board.resource_variance().unwrap(), 0.0));

        set_numbers(&mut board, &[2, 2, 2]);
        // Both per-unit figures are 1.
        assert!(close(board.resource_variance().unwrap(), 0.0));

        let ore = (0..3).find(|&p| board.tile_type(p) == Some(TileType::Ore)).unwrap();
        let mut values = [2u8; 3];
        values[ore] = 12;
        set_numbers(&mut board, &values);
        assert!(close(board.resource_variance().unwrap(), 0.0));

        values[ore] = 6;
        set_numbers(&mut board, &values);
        // Brick 1, Ore 5: variance of [1, 5] is 8.
        assert!(close(board.resource_variance().unwrap(), 8.0));
        assert_eq!(board.resource_balance().unwrap()[TileType::Ore as usize], 5);
    }

    #[test]
    fn settlement_resources_skip_deserts_and_rim() {
        let topology = Topology::new(vec![
            AdjacencyList::new([None, Some(1), Some(2), None, None, None]),
            AdjacencyList::new([None, None, None, Some(2), Some(0), None]),
            AdjacencyList::new([Some(1), None, None, None, None, Some(0)]),
        ])
        .unwrap();
        let mut board = Board::new(topology, vec![2], vec![]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        board
            .place_tiles_random(Deck::from(vec![TileType::Grain, TileType::Lumber]), &mut rng)
            .unwrap();
        let mut numbers = vec![None; 3];
        numbers[0] = Some(RollNumber::new(4).unwrap());
        numbers[1] = Some(RollNumber::new(10).unwrap());
        board.commit_numbers(numbers);
        board.derive_settlement_spots();

        // Only the spots holding both 0 and 1 count; each averages 3.
        let values = board.settlement_resources().unwrap();
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|&v| close(v, 3.0)));
        assert!(close(board.variance(VarianceKind::SettlementResource).unwrap(), 0.0));
    }
}
