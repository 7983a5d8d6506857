//! Roll-number placement.

use rand::Rng;
use tracing::debug;

use super::ensure_deck_size;
use crate::board::{Board, Deck, Position, RollNumber};
use crate::error::BoardError;

impl Board {
    /// Places one random number from `deck` on every non-desert position,
    /// overwriting any previous number layout.
    pub fn place_numbers_random<R: Rng + ?Sized>(
        &mut self,
        mut deck: Deck<RollNumber>,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        self.begin_number_placement(&deck)?;
        let positions: Vec<Position> = self.non_desert_positions().collect();
        for position in positions {
            self.tile_numbers[position] = Some(deck.pop_random_draw(rng)?);
        }
        Ok(())
    }

    /// Places numbers so that no two red numbers (6 and 8) are adjacent.
    ///
    /// Reds go first, each on a random position that is not next to an
    /// earlier red; the rest fill the remaining positions at random.
    pub fn place_numbers_no_adjacent_reds<R: Rng + ?Sized>(
        &mut self,
        deck: Deck<RollNumber>,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        self.begin_number_placement(&deck)?;
        let (reds, mut others): (Deck<RollNumber>, Deck<RollNumber>) =
            deck.into_iter().partition(|n| n.is_red());

        let mut red_spots = self.tile_position_deck();
        let mut spots = self.tile_position_deck();
        for (placed, &number) in reds.iter().enumerate() {
            let spot = red_spots
                .pop_random_draw(rng)
                .map_err(|_| BoardError::RedCandidatesExhausted {
                    number: number.value(),
                    placed,
                })?;
            self.tile_numbers[spot] = Some(number);
            for neighbor in self.topology.neighbors(spot) {
                red_spots.remove(&neighbor);
            }
            spots.remove(&spot);
        }

        for &spot in spots.iter() {
            self.tile_numbers[spot] = Some(others.pop_random_draw(rng)?);
        }
        debug!(reds = reds.len(), "placed numbers with no adjacent reds");
        Ok(())
    }

    fn begin_number_placement(&mut self, deck: &Deck<RollNumber>) -> Result<(), BoardError> {
        if !self.tiles_placed() {
            return Err(BoardError::TilesNotPlaced("numbers"));
        }
        ensure_deck_size("number", deck.len(), self.non_desert_count())?;
        self.tile_numbers.iter_mut().for_each(|n| *n = None);
        Ok(())
    }

    /// Replaces the whole number layout at once.
    pub(crate) fn commit_numbers(&mut self, numbers: Vec<Option<RollNumber>>) {
        debug_assert_eq!(numbers.len(), self.size());
        self.tile_numbers = numbers;
    }

    pub(crate) fn number_layout(&self) -> &[Option<RollNumber>] {
        &self.tile_numbers
    }
}
