//! Property tests over the placement algorithms and board model.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use hexboard::board::settlement::derive_settlement_spots_from;
use hexboard::board::{derive_settlement_spots, Deck, RollNumber, TileHolder, ALL_TILE_TYPES};
use hexboard::ScenarioKind;

fn scenario_kind() -> impl Strategy<Value = ScenarioKind> {
    prop_oneof![Just(ScenarioKind::Standard), Just(ScenarioKind::Expansion)]
}

fn sorted<T: Ord + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut v: Vec<T> = items.into_iter().collect();
    v.sort();
    v
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Clumped placement places every tile of the deck exactly once.
    #[test]
    fn clumped_tiles_are_a_bijection(kind in scenario_kind(), seed in any::<u64>(), p in 0.0f64..=1.0) {
        let scenario = kind.scenario();
        let mut board = scenario.structure.new_board().unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        board.place_deserts_random(scenario.structure.deserts.len(), &mut rng).unwrap();
        board.place_tiles_clumped(scenario.pieces.tiles.clone(), p, &mut rng).unwrap();

        let placed = sorted(board.non_desert_positions().map(|pos| board.tile_type(pos).unwrap()));
        prop_assert_eq!(placed, sorted(scenario.pieces.tiles.iter().copied()));
        for &d in board.deserts() {
            prop_assert!(board.tile_type(d).is_none());
        }
    }

    /// No two reds are ever adjacent, wherever the deserts land.
    #[test]
    fn no_adjacent_reds(kind in scenario_kind(), seed in any::<u64>()) {
        let scenario = kind.scenario();
        let mut board = scenario.structure.new_board().unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        board.place_deserts_random(scenario.structure.deserts.len(), &mut rng).unwrap();
        board.place_tiles_random(scenario.pieces.tiles.clone(), &mut rng).unwrap();
        board.place_numbers_no_adjacent_reds(scenario.pieces.numbers.clone(), &mut rng).unwrap();

        for p in 0..board.size() {
            if board.tile_number(p).is_some_and(RollNumber::is_red) {
                for n in board.topology().neighbors(p) {
                    prop_assert!(!board.tile_number(n).is_some_and(RollNumber::is_red));
                }
            }
        }
        let placed = sorted(board.non_desert_positions().map(|pos| board.tile_number(pos).unwrap()));
        prop_assert_eq!(placed, sorted(scenario.pieces.numbers.iter().copied()));
    }

    /// Settlement spots do not depend on the order positions are visited.
    #[test]
    fn settlement_spots_are_order_independent(
        order in Just((0..30usize).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let topology = ScenarioKind::Expansion.scenario().structure.topology;
        let forward: HashSet<_> = derive_settlement_spots(&topology).into_iter().collect();
        let shuffled: HashSet<_> = derive_settlement_spots_from(&topology, order).into_iter().collect();
        prop_assert_eq!(forward, shuffled);
    }

    /// Excluding nothing yields every remaining tile.
    #[test]
    fn types_excluding_nothing_is_all_types(indices in prop::collection::vec(0usize..5, 0..40)) {
        let deck: Deck<_> = indices.iter().map(|&i| ALL_TILE_TYPES[i]).collect();
        let holder = TileHolder::new(deck);
        prop_assert_eq!(holder.types_excluding(&[]), holder.all_types());
        prop_assert_eq!(holder.all_types().len(), indices.len());
    }

    /// Drawing a deck empty returns exactly its contents.
    #[test]
    fn draining_a_deck_returns_its_contents(items in prop::collection::vec(0u8..20, 0..50), seed in any::<u64>()) {
        let mut deck: Deck<u8> = items.iter().copied().collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut drawn = Vec::new();
        while !deck.is_empty() {
            drawn.push(deck.pop_random_draw(&mut rng).unwrap());
        }
        prop_assert!(deck.pop_random_draw(&mut rng).is_err());
        prop_assert_eq!(sorted(drawn), sorted(items));
    }
}
