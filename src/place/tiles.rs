//! Resource tile placement: uniform random and clumped.
//!
//! The clumped placer walks the board from a random start, preferring to
//! step onto an empty neighbor of the tile it just placed. With probability
//! `p` it copies the type of an already-placed neighbor (if any of that type
//! is left); otherwise it draws from the remaining tiles while avoiding the
//! neighbors' types. Higher `p` therefore produces larger same-type regions.

use rand::Rng;
use tracing::debug;

use super::ensure_deck_size;
use crate::board::{Board, Deck, Position, TileHolder, TileType};
use crate::error::BoardError;

impl Board {
    /// Places one random tile from `deck` on every non-desert position.
    pub fn place_tiles_random<R: Rng + ?Sized>(
        &mut self,
        mut deck: Deck<TileType>,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        ensure_deck_size("tile", deck.len(), self.non_desert_count())?;
        self.begin_tile_placement(&deck);
        let positions: Vec<Position> = self.non_desert_positions().collect();
        for position in positions {
            self.tile_types[position] = Some(deck.pop_random_draw(rng)?);
        }
        debug!(tiles = self.non_desert_count(), "placed tiles randomly");
        Ok(())
    }

    /// Places tiles from `deck` with spatial clustering controlled by
    /// `clumpiness` in [0, 1].
    pub fn place_tiles_clumped<R: Rng + ?Sized>(
        &mut self,
        deck: Deck<TileType>,
        clumpiness: f64,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        ensure_deck_size("tile", deck.len(), self.non_desert_count())?;
        self.begin_tile_placement(&deck);
        let mut unplaced = self.tile_position_deck();
        if unplaced.is_empty() {
            return Ok(());
        }
        let mut holder = TileHolder::new(deck);
        let mut target = unplaced.pop_random_draw(rng)?;

        loop {
            if unplaced.is_empty() {
                let last = *holder.all_types().random_draw(rng)?;
                holder.remove(last);
                self.tile_types[target] = Some(last);
                break;
            }

            let tile_type = self.clumped_tile_type(target, &mut holder, clumpiness, rng)?;
            self.tile_types[target] = Some(tile_type);

            let empty = self.empty_neighbors(target);
            target = if empty.is_empty() {
                *unplaced.random_draw(rng)?
            } else {
                *empty.random_draw(rng)?
            };
            unplaced.remove(&target);
        }
        debug!(clumpiness, tiles = self.non_desert_count(), "placed tiles with clumping");
        Ok(())
    }

    /// Chooses and takes a tile type for `target` from `holder`.
    fn clumped_tile_type<R: Rng + ?Sized>(
        &self,
        target: Position,
        holder: &mut TileHolder,
        clumpiness: f64,
        rng: &mut R,
    ) -> Result<TileType, BoardError> {
        let neighbor_types = self.neighbor_tile_types(target);

        if rng.gen::<f64>() < clumpiness {
            let mut candidates = neighbor_types.clone();
            let mut chosen = None;
            // The whole candidate deck is drained even after a match; only
            // the first available candidate is used.
            while !candidates.is_empty() {
                let candidate = candidates.pop_random_draw(rng)?;
                if chosen.is_none() && holder.count_of(candidate) > 0 {
                    holder.remove(candidate);
                    chosen = Some(candidate);
                }
            }
            if let Some(tile_type) = chosen {
                return Ok(tile_type);
            }
        }

        let mut remaining = holder.types_excluding(neighbor_types.as_slice());
        if remaining.is_empty() {
            remaining = holder.all_types();
        }
        let tile_type = *remaining.random_draw(rng)?;
        holder.remove(tile_type);
        Ok(tile_type)
    }

    /// Types of the already-placed, non-desert neighbors of `position`, one
    /// entry per neighbor.
    pub(crate) fn neighbor_tile_types(&self, position: Position) -> Deck<TileType> {
        self.topology
            .neighbors(position)
            .filter(|n| !self.is_desert(*n))
            .filter_map(|n| self.tile_types[n])
            .collect()
    }

    /// Non-desert neighbors of `position` that have no tile yet.
    pub(crate) fn empty_neighbors(&self, position: Position) -> Deck<Position> {
        self.topology
            .neighbors(position)
            .filter(|n| !self.is_desert(*n) && self.tile_types[*n].is_none())
            .collect()
    }

    /// Clears tile-dependent state and records the inventory counts.
    fn begin_tile_placement(&mut self, deck: &Deck<TileType>) {
        self.tile_types.iter_mut().for_each(|t| *t = None);
        self.tile_numbers.iter_mut().for_each(|n| *n = None);
        self.ports.iter_mut().for_each(|p| *p = None);
        self.resource_counts = Some(TileHolder::new(deck.clone()).counts());
    }
}
